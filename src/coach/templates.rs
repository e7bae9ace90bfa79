use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::feedback::{Feedback, FeedbackType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingTopic {
    Rest,
    Consistency,
    Distance,
    Variety,
    Intensity,
    EasyPaceTooFast,
    PaceInconsistent,
    Maintain,
    General,
}

impl FromStr for CoachingTopic {
    type Err = std::convert::Infallible;

    /// Unrecognized names map to [`CoachingTopic::General`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "rest" => CoachingTopic::Rest,
            "consistency" => CoachingTopic::Consistency,
            "distance" => CoachingTopic::Distance,
            "variety" => CoachingTopic::Variety,
            "intensity" => CoachingTopic::Intensity,
            "easyPaceTooFast" | "easy_pace_too_fast" => CoachingTopic::EasyPaceTooFast,
            "paceInconsistent" | "pace_inconsistent" => CoachingTopic::PaceInconsistent,
            "maintain" => CoachingTopic::Maintain,
            _ => CoachingTopic::General,
        })
    }
}

impl From<FeedbackType> for CoachingTopic {
    fn from(kind: FeedbackType) -> Self {
        match kind {
            FeedbackType::Rest => CoachingTopic::Rest,
            FeedbackType::Consistency => CoachingTopic::Consistency,
            FeedbackType::Distance => CoachingTopic::Distance,
            FeedbackType::Variety => CoachingTopic::Variety,
            FeedbackType::Intensity => CoachingTopic::Intensity,
            FeedbackType::Pace => CoachingTopic::PaceInconsistent,
            FeedbackType::Maintain => CoachingTopic::Maintain,
            FeedbackType::Recovery => CoachingTopic::General,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachingContext {
    pub user_name: Option<String>,
    pub recovery_score: Option<f64>,
    pub missed_runs: Option<u32>,
    pub distance_deficit: Option<f64>,
}

impl CoachingContext {
    pub fn for_feedback(user_name: Option<String>, feedback: &Feedback) -> Self {
        Self {
            user_name,
            recovery_score: feedback.recovery_score(),
            missed_runs: feedback.missed_runs(),
            distance_deficit: feedback.distance_deficit(),
        }
    }
}

pub fn coaching_message(topic: CoachingTopic, context: &CoachingContext) -> String {
    let name = context
        .user_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Runner");

    match topic {
        CoachingTopic::Rest => {
            let score = context
                .recovery_score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "below 4".to_string());
            format!(
                "{name}, I notice your recovery scores are quite low ({score}/10). Your body needs time to rebuild - let's add a rest day or some light cross-training to help you bounce back stronger."
            )
        }
        CoachingTopic::Consistency => {
            let missed = context
                .missed_runs
                .filter(|m| *m > 0)
                .map(|m| m.to_string())
                .unwrap_or_else(|| "a few".to_string());
            format!(
                "Hey {name}, you're {missed} runs behind your weekly target. Let's get back on track with a short, easy run to maintain your fitness momentum."
            )
        }
        CoachingTopic::Distance => {
            let deficit = context
                .distance_deficit
                .filter(|d| *d > 0.0)
                .map(|d| format!("{:.1}", d))
                .unwrap_or_else(|| "5+".to_string());
            format!(
                "{name}, you're about {deficit}km short of your weekly distance goal. Consider extending your next run by a few kilometers to close that gap."
            )
        }
        CoachingTopic::Variety => format!(
            "{name}, I'd recommend adding a long run to your weekly routine. It'll build your endurance base and make your other runs feel easier over time."
        ),
        CoachingTopic::Intensity => format!(
            "{name}, your training could use some intensity. A tempo run or interval session would be great to boost your speed and lactate threshold."
        ),
        CoachingTopic::EasyPaceTooFast => format!(
            "I've noticed your easy runs are nearly as fast as your tempo runs, {name}. Remember that easy days should actually feel easy - try slowing down by 30-60 seconds per km to truly recover between harder efforts."
        ),
        CoachingTopic::PaceInconsistent => format!(
            "{name}, your pacing seems a bit erratic. Try to maintain a more consistent effort level during your runs - it'll help build efficiency and prevent burnout."
        ),
        CoachingTopic::Maintain => format!(
            "Great job staying consistent with your training, {name}! You're right on track with your goals. Keep up the solid work and you'll continue to see progress."
        ),
        CoachingTopic::General => format!(
            "Keep moving forward, {name}! Consistency is the key to improvement in running."
        ),
    }
}
