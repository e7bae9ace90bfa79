use serde::{Deserialize, Serialize};

use super::run::RunType;

/// Weekly totals for one user. Averages are `None` for weeks without data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub total_runs: u32,
    pub total_distance: f64,
    pub total_duration: f64,
    pub avg_pace: Option<f64>,
    pub avg_recovery_score: Option<f64>,
    pub run_types: Vec<RunType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub weekly_run_target: u32,
    /// Kilometers.
    pub weekly_distance_target: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            weekly_run_target: 4,
            weekly_distance_target: 30.0,
        }
    }
}
