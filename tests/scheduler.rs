use chrono::{NaiveDate, NaiveDateTime};
use running_coach::clock::week_bounds;
use running_coach::coach::scheduler::{adjust_plan, available_days, current_week_plan};
use running_coach::store::{MemoryStore, RunStore};
use running_coach::types::feedback::{
    Diagnosis, DistanceLevel, Feedback, FeedbackDetails, FeedbackType, Level, Priority,
};
use running_coach::types::plan::{WeeklyPlan, Workout, WorkoutType};
use running_coach::types::run::{NewRun, Run, RunType};
use running_coach::types::stats::WeeklyStats;

// Week of Sunday 2026-10-11 to Saturday 2026-10-17.
fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid date")
}

fn tuesday_morning() -> NaiveDateTime {
    at(13, 10)
}

fn workout(day: u32, run_type: WorkoutType, distance: f64, duration: f64) -> Workout {
    Workout {
        date: at(day, 7),
        run_type,
        distance,
        duration,
        pace: if distance > 0.0 { duration / distance } else { 0.0 },
        notes: None,
        is_rest: false,
        run_id: None,
    }
}

fn plan(workouts: Vec<Workout>) -> WeeklyPlan {
    let (start, end) = week_bounds(tuesday_morning());
    WeeklyPlan::new("runner-1", start, end, workouts)
}

fn feedback(kind: FeedbackType, diagnosis: Diagnosis) -> Feedback {
    Feedback {
        kind,
        message: String::new(),
        priority: Priority::Medium,
        details: FeedbackDetails {
            diagnosis,
            weekly_stats: WeeklyStats::default(),
        },
    }
}

fn simple(kind: FeedbackType) -> Feedback {
    feedback(
        kind,
        Diagnosis::Variety {
            level: Level::Low,
            run_types: 1,
        },
    )
}

fn distance_feedback(deficit: f64) -> Feedback {
    feedback(
        FeedbackType::Distance,
        Diagnosis::Distance {
            level: DistanceLevel::Short,
            distance_deficit: deficit,
            current_distance: 30.0 - deficit,
        },
    )
}

#[test]
fn rest_converts_first_future_hard_workout_only() {
    let original = plan(vec![
        workout(12, WorkoutType::Tempo, 6.0, 1800.0),
        workout(14, WorkoutType::Tempo, 6.0, 1800.0),
        workout(15, WorkoutType::Easy, 5.0, 1800.0),
        workout(17, WorkoutType::Long, 14.0, 5040.0),
    ]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Rest), tuesday_morning());

    // Monday's tempo is in the past
    assert_eq!(adjusted.workouts[0], original.workouts[0]);
    let rest = &adjusted.workouts[1];
    assert_eq!(rest.run_type, WorkoutType::Rest);
    assert!(rest.is_rest);
    assert_eq!(rest.distance, 0.0);
    assert_eq!(rest.duration, 0.0);
    assert_eq!(adjusted.workouts[2], original.workouts[2]);
    assert_eq!(adjusted.workouts[3], original.workouts[3]);
    assert_eq!(adjusted.total_workouts, 3);
    assert_eq!(adjusted.total_distance, 25.0);
    // the input plan is left alone
    assert_eq!(original.workouts[1].run_type, WorkoutType::Tempo);
}

#[test]
fn rest_adjustment_is_idempotent() {
    let original = plan(vec![
        workout(12, WorkoutType::Easy, 5.0, 1800.0),
        workout(14, WorkoutType::Tempo, 6.0, 1800.0),
        workout(16, WorkoutType::Easy, 5.0, 1800.0),
    ]);
    let now = tuesday_morning();

    let once = adjust_plan(&original, &simple(FeedbackType::Rest), now);
    let twice = adjust_plan(&once, &simple(FeedbackType::Rest), now);

    assert_eq!(once.workouts.iter().filter(|w| w.is_rest).count(), 1);
    assert_eq!(once, twice);
}

#[test]
fn consistency_adds_easy_run_on_earliest_free_day() {
    let original = plan(vec![
        workout(12, WorkoutType::Easy, 5.0, 1800.0),
        workout(14, WorkoutType::Tempo, 6.0, 1800.0),
    ]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Consistency), tuesday_morning());

    assert_eq!(adjusted.workouts.len(), 3);
    let added = &adjusted.workouts[2];
    assert_eq!(added.date, at(15, 0));
    assert_eq!(added.run_type, WorkoutType::Easy);
    assert_eq!(added.distance, 4.0);
    assert_eq!(added.duration, 1440.0);
    assert_eq!(added.pace, 360.0);
    assert_eq!(adjusted.total_workouts, 3);
    assert_eq!(adjusted.total_distance, 15.0);
}

#[test]
fn consistency_without_free_days_is_noop() {
    let original = plan(vec![workout(12, WorkoutType::Easy, 5.0, 1800.0)]);

    let saturday_night = at(17, 22);
    let adjusted = adjust_plan(&original, &simple(FeedbackType::Consistency), saturday_night);

    assert_eq!(adjusted, original);
}

#[test]
fn distance_deficit_is_spread_with_per_type_caps() {
    let original = plan(vec![
        workout(14, WorkoutType::Easy, 5.0, 1800.0),
        workout(17, WorkoutType::Long, 8.0, 2880.0),
    ]);

    let adjusted = adjust_plan(&original, &distance_feedback(10.0), tuesday_morning());

    let easy = &adjusted.workouts[0];
    let long = &adjusted.workouts[1];
    assert_eq!(easy.distance, 7.0);
    assert_eq!(easy.duration, 2520.0);
    assert_eq!(long.distance, 11.0);
    assert_eq!(long.duration, 3960.0);
    assert_eq!(adjusted.total_distance, 18.0);
    assert!(easy
        .notes
        .as_deref()
        .is_some_and(|n| n.contains("Distance increased by 2km")));
    assert!(long
        .notes
        .as_deref()
        .is_some_and(|n| n.contains("Distance increased by 3km")));
}

#[test]
fn distance_skips_past_and_rest_workouts_and_stops_when_met() {
    let mut rest = workout(15, WorkoutType::Rest, 0.0, 0.0);
    rest.is_rest = true;
    let original = plan(vec![
        workout(12, WorkoutType::Easy, 5.0, 1800.0),
        workout(14, WorkoutType::Tempo, 6.0, 1800.0),
        rest,
        workout(16, WorkoutType::Easy, 5.0, 1800.0),
        workout(17, WorkoutType::Long, 12.0, 4320.0),
    ]);

    let adjusted = adjust_plan(&original, &distance_feedback(2.5), tuesday_morning());

    assert_eq!(adjusted.workouts[0].distance, 5.0);
    assert_eq!(adjusted.workouts[1].distance, 7.0);
    assert_eq!(adjusted.workouts[2].distance, 0.0);
    assert_eq!(adjusted.workouts[3].distance, 6.5);
    assert_eq!(adjusted.workouts[4], original.workouts[4]);
}

#[test]
fn fractional_deficit_note_is_rounded() {
    let original = plan(vec![
        workout(14, WorkoutType::Easy, 5.0, 1800.0),
        workout(15, WorkoutType::Easy, 5.0, 1800.0),
        workout(16, WorkoutType::Easy, 5.0, 1800.0),
    ]);

    let adjusted = adjust_plan(&original, &distance_feedback(4.3), tuesday_morning());

    let last = adjusted.workouts[2].notes.as_deref().unwrap_or_default();
    assert_eq!(last, "Distance increased by 0.3km to meet weekly goal.");
    assert!(adjusted.workouts[0]
        .notes
        .as_deref()
        .is_some_and(|n| n.contains("by 2km")));
}

#[test]
fn distance_without_deficit_uses_default() {
    let original = plan(vec![
        workout(14, WorkoutType::Long, 10.0, 3600.0),
        workout(16, WorkoutType::Easy, 5.0, 1800.0),
    ]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Distance), tuesday_morning());

    assert_eq!(adjusted.workouts[0].distance, 13.0);
    assert_eq!(adjusted.workouts[1].distance, 7.0);
}

#[test]
fn variety_adds_weekend_long_run() {
    let original = plan(vec![workout(14, WorkoutType::Easy, 5.0, 1800.0)]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Variety), tuesday_morning());

    let long = adjusted
        .workouts
        .iter()
        .find(|w| w.run_type == WorkoutType::Long)
        .expect("long run added");
    assert_eq!(long.date, at(17, 0));
    assert_eq!(long.distance, 10.0);
    assert_eq!(long.duration, 3600.0);
    assert_eq!(adjusted.workouts.last(), Some(long));
}

#[test]
fn variety_falls_back_to_weekday_when_weekend_taken() {
    let original = plan(vec![
        workout(14, WorkoutType::Easy, 5.0, 1800.0),
        workout(17, WorkoutType::Easy, 5.0, 1800.0),
    ]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Variety), tuesday_morning());

    assert_eq!(adjusted.workouts.len(), 3);
    assert_eq!(adjusted.workouts[1].run_type, WorkoutType::Long);
    assert_eq!(adjusted.workouts[1].date, at(15, 0));
}

#[test]
fn variety_with_existing_long_run_is_noop() {
    let original = plan(vec![workout(16, WorkoutType::Long, 12.0, 4320.0)]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Variety), tuesday_morning());

    assert_eq!(adjusted, original);
}

#[test]
fn intensity_adds_tempo_on_weekday() {
    let original = plan(vec![
        workout(14, WorkoutType::Easy, 5.0, 1800.0),
        workout(17, WorkoutType::Long, 14.0, 5040.0),
    ]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Intensity), tuesday_morning());

    assert_eq!(adjusted.workouts.len(), 3);
    let tempo = &adjusted.workouts[1];
    assert_eq!(tempo.run_type, WorkoutType::Tempo);
    assert_eq!(tempo.date, at(15, 0));
    assert_eq!(tempo.distance, 6.0);
    assert_eq!(tempo.pace, 300.0);
}

#[test]
fn intensity_with_existing_interval_is_noop() {
    let original = plan(vec![workout(15, WorkoutType::Interval, 8.0, 2400.0)]);

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Intensity), tuesday_morning());

    assert_eq!(adjusted, original);
}

#[test]
fn feedback_without_strategy_only_refreshes_totals() {
    let mut original = plan(vec![workout(14, WorkoutType::Easy, 5.0, 1800.0)]);
    original.total_distance = 99.0;

    let adjusted = adjust_plan(&original, &simple(FeedbackType::Maintain), tuesday_morning());

    assert_eq!(adjusted.workouts, original.workouts);
    assert_eq!(adjusted.total_distance, 5.0);
    assert_eq!(adjusted.total_workouts, 1);
}

#[test]
fn available_days_are_future_and_unscheduled() {
    let workouts = vec![
        workout(12, WorkoutType::Easy, 5.0, 1800.0),
        workout(16, WorkoutType::Tempo, 6.0, 1800.0),
    ];

    let days = available_days(&workouts, tuesday_morning());

    assert_eq!(days, vec![at(14, 0), at(15, 0), at(17, 0)]);
}

fn log_run(store: &MemoryStore, date: NaiveDateTime, run_type: RunType, distance: f64) -> Run {
    let run = Run::create(
        NewRun {
            user_id: "runner-1".to_string(),
            date: Some(date),
            distance,
            duration: distance * 360.0,
            pace: None,
            run_type,
            recovery_score: Some(7.0),
            heart_rate: None,
            notes: None,
            location: None,
            weather: None,
            elevation_gain: None,
        },
        date,
    )
    .expect("valid run");
    store.save(run)
}

#[test]
fn current_week_plan_uses_this_weeks_runs_in_order() {
    let store = MemoryStore::new();
    log_run(&store, at(13, 7), RunType::Tempo, 6.0);
    log_run(&store, at(11, 8), RunType::Easy, 5.0);
    log_run(&store, at(9, 8), RunType::Long, 15.0);

    let plan = current_week_plan(&store, "runner-1", tuesday_morning());

    assert_eq!(plan.week_start, at(11, 0));
    assert_eq!(plan.workouts.len(), 2);
    assert_eq!(plan.workouts[0].run_type, WorkoutType::Easy);
    assert_eq!(plan.workouts[1].run_type, WorkoutType::Tempo);
    assert_eq!(plan.total_distance, 11.0);
    assert_eq!(plan.total_workouts, 2);
}

#[test]
fn current_week_plan_prefers_saved_plan() {
    let store = MemoryStore::new();
    log_run(&store, at(12, 7), RunType::Easy, 5.0);
    let saved = plan(vec![workout(16, WorkoutType::Long, 12.0, 4320.0)]);
    store.save_plan(saved.clone());

    let plan = current_week_plan(&store, "runner-1", tuesday_morning());

    assert_eq!(plan, saved);
}

#[test]
fn removing_a_saved_plan_falls_back_to_runs() {
    let store = MemoryStore::new();
    log_run(&store, at(12, 7), RunType::Easy, 5.0);
    store.save_plan(plan(vec![workout(16, WorkoutType::Long, 12.0, 4320.0)]));

    assert!(store.remove_plan("runner-1", at(4, 0)).is_none());
    assert!(store.remove_plan("runner-1", at(11, 0)).is_some());
    let plan = current_week_plan(&store, "runner-1", tuesday_morning());

    assert_eq!(plan.workouts.len(), 1);
    assert_eq!(plan.workouts[0].run_type, WorkoutType::Easy);
}
