use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

use crate::clock::{week_bounds, week_start};
use crate::store::RunStore;
use crate::types::feedback::{Feedback, FeedbackType};
use crate::types::plan::{WeeklyPlan, Workout, WorkoutType};

/// Deficit assumed when distance feedback carries none.
pub const DEFAULT_DISTANCE_DEFICIT: f64 = 5.0;

/// Current-week plan for `user_id`: the saved plan for this week when one
/// exists, otherwise a plan built from the runs logged this week. Logging,
/// editing or deleting a run in the week drops the saved plan.
pub fn current_week_plan(store: &dyn RunStore, user_id: &str, now: NaiveDateTime) -> WeeklyPlan {
    let (start, end) = week_bounds(now);
    if let Some(plan) = store.find_plan(user_id, start) {
        return plan;
    }
    let runs = store.find_by_user_and_date_range(user_id, start, end);
    WeeklyPlan::from_runs(user_id, start, end, &runs)
}

/// Applies the adjustment matching `feedback` and refreshes the totals.
/// Feedback types without a strategy leave the workouts untouched.
pub fn adjust_plan(plan: &WeeklyPlan, feedback: &Feedback, now: NaiveDateTime) -> WeeklyPlan {
    let plan = plan.clone();
    let adjusted = match feedback.kind {
        FeedbackType::Rest => add_rest_day(plan, now),
        FeedbackType::Consistency => add_easy_run(plan, now),
        FeedbackType::Distance => {
            let deficit = feedback
                .distance_deficit()
                .filter(|d| *d > 0.0)
                .unwrap_or(DEFAULT_DISTANCE_DEFICIT);
            extend_distance(plan, deficit, now)
        }
        FeedbackType::Variety => add_long_run(plan, now),
        FeedbackType::Intensity => add_tempo_run(plan, now),
        FeedbackType::Pace | FeedbackType::Recovery | FeedbackType::Maintain => plan,
    };
    adjusted.with_totals()
}

/// Turns the first upcoming tempo, interval or long workout into a rest day.
pub fn add_rest_day(mut plan: WeeklyPlan, now: NaiveDateTime) -> WeeklyPlan {
    let target = plan.workouts.iter_mut().find(|w| {
        w.date > now
            && matches!(
                w.run_type,
                WorkoutType::Tempo | WorkoutType::Interval | WorkoutType::Long
            )
    });
    if let Some(workout) = target {
        workout.run_type = WorkoutType::Rest;
        workout.distance = 0.0;
        workout.duration = 0.0;
        workout.is_rest = true;
        workout.notes = Some("Rest day added based on recovery feedback".to_string());
    }
    plan
}

pub fn add_easy_run(plan: WeeklyPlan, now: NaiveDateTime) -> WeeklyPlan {
    let Some(day) = available_days(&plan.workouts, now).first().copied() else {
        return plan;
    };
    insert_sorted(
        plan,
        Workout {
            date: day,
            run_type: WorkoutType::Easy,
            distance: 4.0,
            duration: 1440.0,
            pace: 360.0,
            notes: Some("Easy run added to improve weekly consistency".to_string()),
            is_rest: false,
            run_id: None,
        },
    )
}

/// Spreads `deficit` km over upcoming non-rest workouts, capped per workout type.
pub fn extend_distance(mut plan: WeeklyPlan, deficit: f64, now: NaiveDateTime) -> WeeklyPlan {
    let mut remaining = deficit;
    for workout in plan.workouts.iter_mut() {
        if remaining <= 0.0 {
            break;
        }
        if workout.date <= now || workout.is_rest || workout.run_type == WorkoutType::Rest {
            continue;
        }

        let extra = extra_distance(workout.run_type, remaining);
        if workout.distance > 0.0 {
            workout.duration = (workout.duration * (1.0 + extra / workout.distance)).round();
        }
        workout.distance += extra;

        let note = format!(
            "Distance increased by {}km to meet weekly goal.",
            format_km(extra)
        );
        workout.notes = Some(match workout.notes.take() {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), note),
            _ => note,
        });

        remaining -= extra;
    }
    plan
}

fn extra_distance(run_type: WorkoutType, remaining: f64) -> f64 {
    let cap = match run_type {
        WorkoutType::Easy | WorkoutType::Recovery => 2.0,
        WorkoutType::Long => 3.0,
        _ => 1.0,
    };
    remaining.min(cap)
}

pub fn add_long_run(plan: WeeklyPlan, now: NaiveDateTime) -> WeeklyPlan {
    if plan.workouts.iter().any(|w| w.run_type == WorkoutType::Long) {
        return plan;
    }
    let days = available_days(&plan.workouts, now);
    let Some(day) = days
        .iter()
        .find(|d| is_weekend(**d))
        .or_else(|| days.first())
        .copied()
    else {
        return plan;
    };
    insert_sorted(
        plan,
        Workout {
            date: day,
            run_type: WorkoutType::Long,
            distance: 10.0,
            duration: 3600.0,
            pace: 360.0,
            notes: Some("Long run added to improve training variety".to_string()),
            is_rest: false,
            run_id: None,
        },
    )
}

/// Adds a tempo run, preferably on a weekday, when the week has no quality session.
pub fn add_tempo_run(plan: WeeklyPlan, now: NaiveDateTime) -> WeeklyPlan {
    let has_intensity = plan
        .workouts
        .iter()
        .any(|w| matches!(w.run_type, WorkoutType::Tempo | WorkoutType::Interval));
    if has_intensity {
        return plan;
    }
    let days = available_days(&plan.workouts, now);
    let Some(day) = days
        .iter()
        .find(|d| !is_weekend(**d))
        .or_else(|| days.first())
        .copied()
    else {
        return plan;
    };
    insert_sorted(
        plan,
        Workout {
            date: day,
            run_type: WorkoutType::Tempo,
            distance: 6.0,
            duration: 1800.0,
            pace: 300.0,
            notes: Some("Tempo run added to improve speed and lactate threshold".to_string()),
            is_rest: false,
            run_id: None,
        },
    )
}

/// Midnights of the days in `now`'s week that are still ahead and carry no workout.
pub fn available_days(workouts: &[Workout], now: NaiveDateTime) -> Vec<NaiveDateTime> {
    let start = week_start(now);
    (0..7)
        .map(|offset| start + Duration::days(offset))
        .filter(|day| *day > now)
        .filter(|day| !workouts.iter().any(|w| w.date.date() == day.date()))
        .collect()
}

// one decimal, without a trailing ".0"
fn format_km(km: f64) -> String {
    let text = format!("{:.1}", km);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

fn is_weekend(day: NaiveDateTime) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

fn insert_sorted(mut plan: WeeklyPlan, workout: Workout) -> WeeklyPlan {
    plan.workouts.push(workout);
    plan.workouts.sort_by_key(|w| w.date);
    plan
}
