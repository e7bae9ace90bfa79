use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RunError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunType {
    Easy,
    Tempo,
    Interval,
    Long,
    Race,
    Recovery,
}

impl RunType {
    pub fn as_str(self) -> &'static str {
        match self {
            RunType::Easy => "easy",
            RunType::Tempo => "tempo",
            RunType::Interval => "interval",
            RunType::Long => "long",
            RunType::Race => "race",
            RunType::Recovery => "recovery",
        }
    }

    /// Tempo and interval sessions.
    pub fn is_intensity(self) -> bool {
        matches!(self, RunType::Tempo | RunType::Interval)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeartRate {
    pub average: Option<u16>,
    pub max: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature: Option<f64>,
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDateTime,
    /// Kilometers.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    /// Seconds per kilometer.
    pub pace: f64,
    pub run_type: RunType,
    pub recovery_score: Option<f64>,
    pub heart_rate: Option<HeartRate>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub weather: Option<Weather>,
    /// Meters.
    pub elevation_gain: Option<f64>,
    pub week_number: u32,
    pub year_number: i32,
}

/// Body of `POST /api/runs`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRun {
    pub user_id: String,
    pub date: Option<NaiveDateTime>,
    pub distance: f64,
    pub duration: f64,
    pub pace: Option<f64>,
    pub run_type: RunType,
    pub recovery_score: Option<f64>,
    pub heart_rate: Option<HeartRate>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub weather: Option<Weather>,
    pub elevation_gain: Option<f64>,
}

/// Body of `PATCH /api/runs/:id`. Week and year are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunPatch {
    pub date: Option<NaiveDateTime>,
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub pace: Option<f64>,
    pub run_type: Option<RunType>,
    pub recovery_score: Option<f64>,
    pub heart_rate: Option<HeartRate>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub weather: Option<Weather>,
    pub elevation_gain: Option<f64>,
}

impl Run {
    /// Builds a stored run from user input. `now` is used when the input has no date.
    pub fn create(input: NewRun, now: NaiveDateTime) -> Result<Run, RunError> {
        let user_id = input.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(RunError::MissingUser);
        }
        validate_distance(input.distance)?;
        validate_duration(input.duration)?;
        if let Some(score) = input.recovery_score {
            validate_recovery_score(score)?;
        }

        let date = input.date.unwrap_or(now);
        let pace = resolve_pace(input.pace, input.distance, input.duration)?;
        let (year_number, week_number) = week_of(date.date());

        Ok(Run {
            id: Uuid::new_v4().to_string(),
            user_id,
            date,
            distance: input.distance,
            duration: input.duration,
            pace,
            run_type: input.run_type,
            recovery_score: input.recovery_score,
            heart_rate: input.heart_rate,
            notes: input.notes,
            location: input.location,
            weather: input.weather,
            elevation_gain: input.elevation_gain,
            week_number,
            year_number,
        })
    }

    /// Returns the patched run. Pace follows distance and duration unless the
    /// patch sets it explicitly.
    pub fn apply_patch(&self, patch: RunPatch) -> Result<Run, RunError> {
        let mut run = self.clone();

        let moved = patch.distance.is_some() || patch.duration.is_some();
        if let Some(distance) = patch.distance {
            validate_distance(distance)?;
            run.distance = distance;
        }
        if let Some(duration) = patch.duration {
            validate_duration(duration)?;
            run.duration = duration;
        }
        if let Some(score) = patch.recovery_score {
            validate_recovery_score(score)?;
            run.recovery_score = Some(score);
        }

        run.pace = match patch.pace {
            Some(pace) => resolve_pace(Some(pace), run.distance, run.duration)?,
            None if moved => run.duration / run.distance,
            None => run.pace,
        };

        if let Some(date) = patch.date {
            run.date = date;
        }
        if let Some(run_type) = patch.run_type {
            run.run_type = run_type;
        }
        if patch.heart_rate.is_some() {
            run.heart_rate = patch.heart_rate;
        }
        if patch.notes.is_some() {
            run.notes = patch.notes;
        }
        if patch.location.is_some() {
            run.location = patch.location;
        }
        if patch.weather.is_some() {
            run.weather = patch.weather;
        }
        if patch.elevation_gain.is_some() {
            run.elevation_gain = patch.elevation_gain;
        }

        let (year_number, week_number) = week_of(run.date.date());
        run.year_number = year_number;
        run.week_number = week_number;

        Ok(run)
    }
}

/// Year and Sunday-based week number used for weekly aggregation.
///
/// Week 1 is the (possibly partial) week containing January 1st; every week
/// starts on Sunday.
pub fn week_of(date: NaiveDate) -> (i32, u32) {
    let days = date.ordinal0();
    let jan1_weekday = (date.weekday().num_days_from_sunday() + 7 - days % 7) % 7;
    let week = (days + jan1_weekday + 1).div_ceil(7);
    (date.year(), week)
}

fn resolve_pace(explicit: Option<f64>, distance: f64, duration: f64) -> Result<f64, RunError> {
    match explicit {
        Some(pace) if !pace.is_finite() || pace < 0.0 => Err(RunError::InvalidPace(pace)),
        Some(pace) if pace > 0.0 => Ok(pace),
        // zero counts as "not supplied"
        _ => Ok(duration / distance),
    }
}

fn validate_distance(distance: f64) -> Result<(), RunError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(RunError::InvalidDistance(distance));
    }
    Ok(())
}

fn validate_duration(duration: f64) -> Result<(), RunError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(RunError::InvalidDuration(duration));
    }
    Ok(())
}

fn validate_recovery_score(score: f64) -> Result<(), RunError> {
    if !(1.0..=10.0).contains(&score) {
        return Err(RunError::InvalidRecoveryScore(score));
    }
    Ok(())
}
