use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::run::{Run, RunType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Easy,
    Tempo,
    Interval,
    Long,
    Race,
    Recovery,
    Rest,
}

impl From<RunType> for WorkoutType {
    fn from(run_type: RunType) -> Self {
        match run_type {
            RunType::Easy => WorkoutType::Easy,
            RunType::Tempo => WorkoutType::Tempo,
            RunType::Interval => WorkoutType::Interval,
            RunType::Long => WorkoutType::Long,
            RunType::Race => WorkoutType::Race,
            RunType::Recovery => WorkoutType::Recovery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub date: NaiveDateTime,
    pub run_type: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    pub pace: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_rest: bool,
    /// Set when the workout mirrors a logged run.
    #[serde(default)]
    pub run_id: Option<String>,
}

impl From<&Run> for Workout {
    fn from(run: &Run) -> Self {
        Self {
            date: run.date,
            run_type: run.run_type.into(),
            distance: run.distance,
            duration: run.duration,
            pace: run.pace,
            notes: run.notes.clone(),
            is_rest: false,
            run_id: Some(run.id.clone()),
        }
    }
}

/// Workouts of one Sunday-to-Saturday week. Adjustments produce new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub user_id: String,
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    pub workouts: Vec<Workout>,
    pub total_distance: f64,
    pub total_workouts: usize,
}

impl WeeklyPlan {
    pub fn new(
        user_id: impl Into<String>,
        week_start: NaiveDateTime,
        week_end: NaiveDateTime,
        workouts: Vec<Workout>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            week_start,
            week_end,
            workouts,
            total_distance: 0.0,
            total_workouts: 0,
        }
        .with_totals()
    }

    /// Plan built from the runs logged inside the week, in date order.
    pub fn from_runs(
        user_id: impl Into<String>,
        week_start: NaiveDateTime,
        week_end: NaiveDateTime,
        runs: &[Run],
    ) -> Self {
        let mut workouts: Vec<Workout> = runs
            .iter()
            .filter(|run| run.date >= week_start && run.date <= week_end)
            .map(Workout::from)
            .collect();
        workouts.sort_by_key(|w| w.date);
        Self::new(user_id, week_start, week_end, workouts)
    }

    pub fn with_totals(mut self) -> Self {
        self.total_distance = self.workouts.iter().map(|w| w.distance).sum();
        self.total_workouts = self.workouts.iter().filter(|w| !w.is_rest).count();
        self
    }
}
