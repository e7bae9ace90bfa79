use std::collections::HashSet;

use rand::Rng;

use crate::types::feedback::{
    Diagnosis, DistanceLevel, Feedback, FeedbackDetails, FeedbackType, IntensityLevel, Level,
    PaceLevel, Priority, RecoveryLevel,
};
use crate::types::stats::{Goals, WeeklyStats};

/// Seconds per km below which the weekly average counts as too fast.
pub const FAST_PACE_THRESHOLD: f64 = 300.0;
/// Seconds per km above which the weekly average counts as too slow.
pub const SLOW_PACE_THRESHOLD: f64 = 420.0;

pub fn analyze_consistency(stats: &WeeklyStats, goals: &Goals) -> Diagnosis {
    let target = goals.weekly_run_target.max(1);
    let score = f64::from(stats.total_runs) / f64::from(target) * 100.0;
    // half the target or less is low
    let level = if score <= 50.0 {
        Level::Low
    } else if score < 80.0 {
        Level::Medium
    } else {
        Level::High
    };
    Diagnosis::Consistency {
        level,
        score,
        missed_runs: target.saturating_sub(stats.total_runs),
    }
}

pub fn analyze_pace(stats: &WeeklyStats) -> Diagnosis {
    let level = match stats.avg_pace {
        None => PaceLevel::Unknown,
        Some(pace) if pace < FAST_PACE_THRESHOLD => PaceLevel::TooFast,
        Some(pace) if pace > SLOW_PACE_THRESHOLD => PaceLevel::TooSlow,
        Some(_) => PaceLevel::Optimal,
    };
    Diagnosis::Pace {
        level,
        pace: stats.avg_pace,
    }
}

pub fn analyze_recovery(stats: &WeeklyStats) -> Diagnosis {
    let level = match stats.avg_recovery_score {
        None => RecoveryLevel::Unknown,
        Some(score) if score < 6.0 => RecoveryLevel::Low,
        Some(score) if score < 8.0 => RecoveryLevel::Medium,
        Some(_) => RecoveryLevel::High,
    };
    Diagnosis::Recovery {
        level,
        recovery_score: stats.avg_recovery_score,
    }
}

pub fn analyze_variety(stats: &WeeklyStats) -> Diagnosis {
    let distinct = stats.run_types.iter().collect::<HashSet<_>>().len();
    let level = match distinct {
        0 | 1 => Level::Low,
        2 => Level::Medium,
        _ => Level::High,
    };
    Diagnosis::Variety {
        level,
        run_types: distinct,
    }
}

pub fn analyze_distance(stats: &WeeklyStats, goals: &Goals) -> Diagnosis {
    let deficit = (goals.weekly_distance_target - stats.total_distance).max(0.0);
    Diagnosis::Distance {
        level: if deficit > 0.0 {
            DistanceLevel::Short
        } else {
            DistanceLevel::OnTarget
        },
        distance_deficit: deficit,
        current_distance: stats.total_distance,
    }
}

pub fn analyze_intensity(stats: &WeeklyStats) -> Diagnosis {
    let intensity_runs = stats.run_types.iter().filter(|t| t.is_intensity()).count();
    // an empty week is a consistency problem, not an intensity one
    let level = if intensity_runs == 0 && !stats.run_types.is_empty() {
        IntensityLevel::Missing
    } else {
        IntensityLevel::Present
    };
    Diagnosis::Intensity {
        level,
        intensity_runs,
    }
}

/// Every diagnosis, in tie-break order: consistency, pace, recovery, variety,
/// distance, intensity.
pub fn diagnose(stats: &WeeklyStats, goals: &Goals) -> Vec<Diagnosis> {
    vec![
        analyze_consistency(stats, goals),
        analyze_pace(stats),
        analyze_recovery(stats),
        analyze_variety(stats),
        analyze_distance(stats, goals),
        analyze_intensity(stats),
    ]
}

/// Picks the diagnosis with the strictly highest priority; earlier entries win ties.
pub fn dominant(diagnoses: Vec<Diagnosis>) -> Option<Diagnosis> {
    diagnoses.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.priority() >= candidate.priority() => Some(current),
        _ => Some(candidate),
    })
}

/// Produces the feedback for one week. `goals` falls back to the defaults and
/// `rng` picks the message from the pool for the winning diagnosis.
pub fn generate_recommendation<R: Rng>(
    stats: &WeeklyStats,
    goals: Option<&Goals>,
    rng: &mut R,
) -> Feedback {
    let goals = goals.copied().unwrap_or_default();
    let diagnoses = diagnose(stats, &goals);

    // consistency is always present, so the fallback never triggers in practice
    let winner = dominant(diagnoses).unwrap_or_else(|| analyze_consistency(stats, &goals));
    let score = winner.priority();

    let pool = message_pool(&winner);
    let template = pool[rng.gen_range(0..pool.len())];
    let message = template.replace("{targetRuns}", &goals.weekly_run_target.to_string());

    // a week with nothing flagged reports where the distance stands
    let (kind, diagnosis) = if score > 1 {
        (winner.feedback_type(), winner)
    } else {
        (FeedbackType::Maintain, analyze_distance(stats, &goals))
    };

    tracing::debug!(
        "Feedback {} selected with priority {}",
        kind.as_str(),
        score
    );

    Feedback {
        kind,
        message,
        priority: Priority::from_score(score),
        details: FeedbackDetails {
            diagnosis,
            weekly_stats: stats.clone(),
        },
    }
}

fn message_pool(diagnosis: &Diagnosis) -> &'static [&'static str; 3] {
    match diagnosis {
        Diagnosis::Consistency { level, .. } => match level {
            Level::Low => &[
                "I notice you've been running less frequently than usual. Remember, consistency is key to improvement!",
                "Your running schedule seems a bit irregular. Let's aim for at least {targetRuns} runs per week.",
                "I see you're taking more rest days than planned. While rest is important, maintaining a regular schedule will help build your endurance.",
            ],
            Level::Medium => &[
                "You're maintaining a decent running schedule. Keep it up!",
                "Good consistency this week. Try to maintain this rhythm.",
                "Your running frequency is on track. Consider adding one more run next week for better progress.",
            ],
            Level::High => &[
                "Excellent consistency! You're really sticking to your training plan.",
                "Impressive dedication to your running schedule!",
                "You're showing great commitment to your training. This consistency will pay off!",
            ],
        },
        Diagnosis::Pace { level, .. } => match level {
            PaceLevel::TooFast => &[
                "I notice your easy runs are a bit too fast. Remember, easy runs should feel comfortable and conversational.",
                "Your pace on recovery runs is higher than recommended. Let's slow it down to build endurance.",
                "Try to keep your easy runs at a more relaxed pace. This will help with recovery and long-term progress.",
            ],
            PaceLevel::TooSlow => &[
                "Your pace has been slower than usual. Are you feeling tired or recovering from something?",
                "I notice your recent runs have been at a slower pace. Let's check if you need more recovery time.",
                "Your pace is below your usual range. Consider if you need to adjust your training load.",
            ],
            PaceLevel::Optimal => &[
                "Great pace control! You're maintaining the right intensity for each run type.",
                "Excellent pace management across your different types of runs.",
                "Your pace is spot on for your current training phase. Keep it up!",
            ],
            PaceLevel::Unknown => &[
                "Log a few runs this week so I can look at your pacing.",
                "No pace data yet this week. Your next run will give me something to work with.",
                "Once you record some runs I'll check how your pacing lines up with your goals.",
            ],
        },
        Diagnosis::Recovery { level, .. } => match level {
            RecoveryLevel::Low => &[
                "Your recovery scores are quite low. Consider taking an extra rest day or doing some light cross-training.",
                "I notice you're not recovering well between runs. Let's focus on proper rest and nutrition.",
                "Your body might need more recovery time. Consider reducing intensity for a few days.",
            ],
            RecoveryLevel::Medium => &[
                "Your recovery is on track. Keep monitoring how you feel.",
                "Good recovery management. Continue listening to your body.",
                "Your recovery scores are in a healthy range. Maintain this balance.",
            ],
            RecoveryLevel::High => &[
                "Excellent recovery! Your body is adapting well to the training.",
                "Great job on recovery! You're finding the right balance between training and rest.",
                "Your recovery scores are impressive. This shows good training management.",
            ],
            RecoveryLevel::Unknown => &[
                "Add a recovery score to your runs so I can tell how well you're bouncing back.",
                "I don't have any recovery scores for this week. Rate how you feel after your next run.",
                "Tracking recovery helps me balance your training. Try scoring your next run from 1 to 10.",
            ],
        },
        Diagnosis::Variety { level, .. } => match level {
            Level::Low => &[
                "I notice you're doing similar types of runs. Let's add some variety to your training.",
                "Your training could benefit from more variety. Consider adding some speed work or long runs.",
                "Try mixing up your run types to improve different aspects of your fitness.",
            ],
            Level::Medium => &[
                "Good variety in your training. Keep this balanced approach.",
                "You're maintaining a nice mix of different run types. This is great for overall development.",
                "Your training variety is on point. Continue this balanced approach.",
            ],
            Level::High => &[
                "Excellent training variety! You're covering all the important aspects of running.",
                "Great job mixing up your run types. This comprehensive approach will lead to better results.",
                "Your training variety is impressive. This balanced approach is perfect for long-term progress.",
            ],
        },
        Diagnosis::Distance { level, .. } => match level {
            DistanceLevel::Short => &[
                "You're a bit short of your weekly distance goal. Extending your next run by a few kilometers will close the gap.",
                "Your weekly volume is below target. Add a little distance to your easy runs to get back on track.",
                "A few more kilometers this week would bring you up to your distance goal.",
            ],
            DistanceLevel::OnTarget => &[
                "You've hit your weekly distance goal. Nice work!",
                "Your weekly volume is right where it should be.",
                "Distance goal reached. Keep building steadily from here.",
            ],
        },
        Diagnosis::Intensity { level, .. } => match level {
            IntensityLevel::Missing => &[
                "Your week is all steady running. A tempo run or interval session would sharpen your speed.",
                "Consider adding some quality work. One tempo run a week boosts your lactate threshold.",
                "Mixing in a harder session will make your easy runs feel easier over time.",
            ],
            IntensityLevel::Present => &[
                "Good balance of hard and easy efforts this week.",
                "Your quality sessions are in place. Keep the easy days easy around them.",
                "Nice job including some intensity in your training.",
            ],
        },
    }
}
