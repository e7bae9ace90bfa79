use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::run::{Run, RunType};

pub const MIN_RUNS: usize = 3;
/// Easy pace must be at least this much slower (larger s/km) than tempo pace.
pub const EASY_TEMPO_MIN_RATIO: f64 = 1.15;

const INSUFFICIENT_DATA_MESSAGE: &str = "Not enough run data to analyze pace variability.";
const EASY_TOO_FAST_MESSAGE: &str =
    "Your easy runs may be too fast. Consider slowing down to improve recovery.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_pace_too_fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_tempo_ratio: Option<f64>,
    /// Mean pace per run type present in the sample.
    pub avg_pace_by_type: BTreeMap<RunType, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceAnalysis {
    pub has_sufficient_data: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PaceDetails>,
}

/// Checks whether easy runs are actually run easier than tempo runs.
pub fn analyze_pace_variability(runs: &[Run]) -> PaceAnalysis {
    if runs.len() < MIN_RUNS {
        return PaceAnalysis {
            has_sufficient_data: false,
            message: INSUFFICIENT_DATA_MESSAGE.to_string(),
            details: None,
        };
    }

    let mut by_type: BTreeMap<RunType, Vec<f64>> = BTreeMap::new();
    for run in runs {
        by_type.entry(run.run_type).or_default().push(run.pace);
    }
    let avg_pace_by_type: BTreeMap<RunType, f64> = by_type
        .iter()
        .map(|(run_type, paces)| (*run_type, paces.iter().sum::<f64>() / paces.len() as f64))
        .collect();

    let mut details = PaceDetails {
        avg_pace_by_type,
        ..PaceDetails::default()
    };
    let mut message = String::new();

    let easy = details.avg_pace_by_type.get(&RunType::Easy).copied();
    let tempo = details.avg_pace_by_type.get(&RunType::Tempo).copied();
    if let (Some(easy), Some(tempo)) = (easy, tempo) {
        if tempo > 0.0 {
            let ratio = easy / tempo;
            if ratio < EASY_TEMPO_MIN_RATIO {
                message = EASY_TOO_FAST_MESSAGE.to_string();
                details.easy_pace_too_fast = Some(true);
                details.easy_tempo_ratio = Some(ratio);
            }
        }
    }

    PaceAnalysis {
        has_sufficient_data: true,
        message,
        details: Some(details),
    }
}
