use serde::{Deserialize, Serialize};

use super::stats::WeeklyStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Rest,
    Consistency,
    Distance,
    Variety,
    Intensity,
    Pace,
    Recovery,
    Maintain,
}

impl FeedbackType {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackType::Rest => "rest",
            FeedbackType::Consistency => "consistency",
            FeedbackType::Distance => "distance",
            FeedbackType::Variety => "variety",
            FeedbackType::Intensity => "intensity",
            FeedbackType::Pace => "pace",
            FeedbackType::Recovery => "recovery",
            FeedbackType::Maintain => "maintain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_score(score: u8) -> Self {
        match score {
            3 => Priority::High,
            2 => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceLevel {
    TooFast,
    TooSlow,
    Optimal,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryLevel {
    Low,
    Medium,
    High,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceLevel {
    Short,
    OnTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Missing,
    Present,
}

/// One rule's verdict on a week of training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Diagnosis {
    Consistency {
        level: Level,
        score: f64,
        missed_runs: u32,
    },
    Pace {
        level: PaceLevel,
        pace: Option<f64>,
    },
    Recovery {
        level: RecoveryLevel,
        recovery_score: Option<f64>,
    },
    Variety {
        level: Level,
        run_types: usize,
    },
    Distance {
        level: DistanceLevel,
        distance_deficit: f64,
        current_distance: f64,
    },
    Intensity {
        level: IntensityLevel,
        intensity_runs: usize,
    },
}

impl Diagnosis {
    /// Numeric weight used to pick the dominant issue: 3, 2 or 1.
    pub fn priority(&self) -> u8 {
        match self {
            Diagnosis::Consistency { level: Level::Low, .. } => 3,
            Diagnosis::Pace { level: PaceLevel::TooFast, .. } => 2,
            Diagnosis::Recovery { level: RecoveryLevel::Low, .. } => 3,
            Diagnosis::Variety { level: Level::Low, .. } => 2,
            Diagnosis::Distance { level: DistanceLevel::Short, .. } => 2,
            Diagnosis::Intensity { level: IntensityLevel::Missing, .. } => 2,
            _ => 1,
        }
    }

    /// The actionable feedback type when this diagnosis is the flagged issue.
    pub fn feedback_type(&self) -> FeedbackType {
        match self {
            Diagnosis::Consistency { .. } => FeedbackType::Consistency,
            Diagnosis::Pace { .. } => FeedbackType::Pace,
            Diagnosis::Recovery { level: RecoveryLevel::Low, .. } => FeedbackType::Rest,
            Diagnosis::Recovery { .. } => FeedbackType::Recovery,
            Diagnosis::Variety { .. } => FeedbackType::Variety,
            Diagnosis::Distance { .. } => FeedbackType::Distance,
            Diagnosis::Intensity { .. } => FeedbackType::Intensity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDetails {
    /// Serialized inline, so `details` carries the diagnosis fields next to `weekly_stats`.
    #[serde(flatten)]
    pub diagnosis: Diagnosis,
    pub weekly_stats: WeeklyStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub message: String,
    pub priority: Priority,
    pub details: FeedbackDetails,
}

impl Feedback {
    pub fn distance_deficit(&self) -> Option<f64> {
        match self.details.diagnosis {
            Diagnosis::Distance { distance_deficit, .. } => Some(distance_deficit),
            _ => None,
        }
    }

    pub fn missed_runs(&self) -> Option<u32> {
        match self.details.diagnosis {
            Diagnosis::Consistency { missed_runs, .. } => Some(missed_runs),
            _ => None,
        }
    }

    pub fn recovery_score(&self) -> Option<f64> {
        match self.details.diagnosis {
            Diagnosis::Recovery { recovery_score, .. } => recovery_score,
            _ => None,
        }
    }
}
