use crate::types::stats::Goals;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_seconds: u64,
    pub allow_dev_tokens: bool,
    pub goals: Goals,
    pub pace_analysis_window: usize,
    pub feedback_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            jwt_secret: "dev-only-secret-change-me".to_string(),
            token_ttl_seconds: 7 * 24 * 3600,
            allow_dev_tokens: false,
            goals: Goals::default(),
            pace_analysis_window: 10,
            feedback_window_days: 7,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env_parse("PORT").unwrap_or(defaults.port);

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.jwt_secret);

        let token_ttl_seconds =
            env_parse("TOKEN_TTL_SECONDS").unwrap_or(defaults.token_ttl_seconds);

        let allow_dev_tokens = std::env::var("ALLOW_DEV_TOKENS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.allow_dev_tokens);

        // Targets must stay positive, otherwise the consistency score divides by zero.
        let weekly_run_target = env_parse::<u32>("WEEKLY_RUN_TARGET")
            .filter(|v| *v > 0)
            .unwrap_or(defaults.goals.weekly_run_target);
        let weekly_distance_target = env_parse::<f64>("WEEKLY_DISTANCE_TARGET_KM")
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.goals.weekly_distance_target);

        let pace_analysis_window = env_parse::<usize>("PACE_ANALYSIS_WINDOW")
            .filter(|v| *v > 0)
            .unwrap_or(defaults.pace_analysis_window);

        let feedback_window_days = env_parse::<i64>("FEEDBACK_WINDOW_DAYS")
            .filter(|v| *v > 0)
            .unwrap_or(defaults.feedback_window_days);

        Self {
            port,
            jwt_secret,
            token_ttl_seconds,
            allow_dev_tokens,
            goals: Goals {
                weekly_run_target,
                weekly_distance_target,
            },
            pace_analysis_window,
            feedback_window_days,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
