use chrono::NaiveDate;
use running_coach::coach::pace::analyze_pace_variability;
use running_coach::types::run::{NewRun, Run, RunType};

fn run(run_type: RunType, pace: f64) -> Run {
    let now = NaiveDate::from_ymd_opt(2026, 10, 13)
        .and_then(|d| d.and_hms_opt(7, 0, 0))
        .expect("valid date");
    Run::create(
        NewRun {
            user_id: "runner-1".to_string(),
            date: None,
            distance: 8.0,
            duration: pace * 8.0,
            pace: Some(pace),
            run_type,
            recovery_score: None,
            heart_rate: None,
            notes: None,
            location: None,
            weather: None,
            elevation_gain: None,
        },
        now,
    )
    .expect("valid run")
}

#[test]
fn fewer_than_three_runs_is_insufficient() {
    let runs = vec![run(RunType::Easy, 360.0), run(RunType::Tempo, 300.0)];

    let analysis = analyze_pace_variability(&runs);

    assert!(!analysis.has_sufficient_data);
    assert!(analysis.message.contains("Not enough run data"));
    assert!(analysis.details.is_none());
}

#[test]
fn easy_runs_close_to_tempo_are_flagged() {
    let runs = vec![
        run(RunType::Easy, 320.0),
        run(RunType::Easy, 330.0),
        run(RunType::Tempo, 300.0),
        run(RunType::Tempo, 310.0),
    ];

    let analysis = analyze_pace_variability(&runs);

    assert!(analysis.has_sufficient_data);
    let details = analysis.details.expect("details");
    assert_eq!(details.easy_pace_too_fast, Some(true));
    let ratio = details.easy_tempo_ratio.expect("ratio");
    assert!((ratio - 325.0 / 305.0).abs() < 1e-9);
    assert!(analysis.message.contains("too fast"));
}

#[test]
fn well_separated_paces_are_not_flagged() {
    let runs = vec![
        run(RunType::Easy, 400.0),
        run(RunType::Easy, 410.0),
        run(RunType::Tempo, 320.0),
        run(RunType::Tempo, 330.0),
    ];

    let analysis = analyze_pace_variability(&runs);

    assert!(analysis.has_sufficient_data);
    let details = analysis.details.expect("details");
    assert_eq!(details.easy_pace_too_fast, None);
    assert_eq!(details.easy_tempo_ratio, None);
    assert!(analysis.message.is_empty());
}

#[test]
fn missing_tempo_group_leaves_no_flag() {
    let runs = vec![
        run(RunType::Easy, 310.0),
        run(RunType::Easy, 320.0),
        run(RunType::Long, 380.0),
    ];

    let analysis = analyze_pace_variability(&runs);

    assert!(analysis.has_sufficient_data);
    assert!(analysis.message.is_empty());
    let details = analysis.details.expect("details");
    assert_eq!(details.easy_pace_too_fast, None);
    assert_eq!(details.avg_pace_by_type.get(&RunType::Easy), Some(&315.0));
    assert_eq!(details.avg_pace_by_type.get(&RunType::Long), Some(&380.0));
}

#[test]
fn serialized_analysis_omits_unset_flags() {
    let runs = vec![
        run(RunType::Easy, 400.0),
        run(RunType::Tempo, 320.0),
        run(RunType::Long, 390.0),
    ];

    let json = serde_json::to_value(analyze_pace_variability(&runs)).expect("serialize");

    assert_eq!(json["has_sufficient_data"], true);
    assert!(json["details"].get("easy_pace_too_fast").is_none());
    assert_eq!(json["details"]["avg_pace_by_type"]["tempo"], 320.0);
}
