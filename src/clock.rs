use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime};

/// Source of the local wall-clock time the coach reasons about.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Sunday 00:00 to Saturday 23:59:59.999 around `now`.
pub fn week_bounds(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let start = week_start(now);
    let end = start + Duration::days(7) - Duration::milliseconds(1);
    (start, end)
}

pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    let back = i64::from(now.date().weekday().num_days_from_sunday());
    (now.date() - Duration::days(back)).and_time(NaiveTime::MIN)
}
