use crate::types::run::Run;
use crate::types::stats::WeeklyStats;

/// Totals and averages over `runs`. Averages stay `None` when there is nothing
/// to average; recovery only counts runs that carry a score.
pub fn aggregate(runs: &[Run]) -> WeeklyStats {
    let total_runs = runs.len() as u32;
    let total_distance = runs.iter().map(|r| r.distance).sum();
    let total_duration = runs.iter().map(|r| r.duration).sum();

    let avg_pace = mean(runs.iter().map(|r| r.pace));
    let avg_recovery_score = mean(runs.iter().filter_map(|r| r.recovery_score));

    WeeklyStats {
        total_runs,
        total_distance,
        total_duration,
        avg_pace,
        avg_recovery_score,
        run_types: runs.iter().map(|r| r.run_type).collect(),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
