//! Working-day calendar.
//!
//! All date arithmetic in the engine runs through a calendar so that every
//! "day" means a *working day*: a weekday the calendar marks as working that
//! is not an exception (holiday) date.
//!
//! # Conventions
//! - Counting ranges are half-open `[a, b)`: `working_days_between` includes
//!   `a`, excludes `b`.
//! - The default calendar works Monday through Friday with no holidays.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A working-day calendar: a set of working weekdays plus holiday exceptions.
///
/// All operations are pure functions of the calendar and their arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Working flags indexed by weekday, Monday = 0.
    working_weekdays: [bool; 7],
    /// Exception dates that are non-working regardless of weekday.
    holidays: BTreeSet<NaiveDate>,
}

impl Calendar {
    /// Creates a calendar working the given weekdays.
    ///
    /// An empty slice falls back to the standard Monday–Friday week so that
    /// day arithmetic always terminates.
    pub fn new(working: &[Weekday]) -> Self {
        if working.is_empty() {
            return Self::standard();
        }
        let mut working_weekdays = [false; 7];
        for day in working {
            working_weekdays[day.num_days_from_monday() as usize] = true;
        }
        Self {
            working_weekdays,
            holidays: BTreeSet::new(),
        }
    }

    /// Standard Monday–Friday calendar with no holidays.
    pub fn standard() -> Self {
        Self {
            working_weekdays: [true, true, true, true, true, false, false],
            holidays: BTreeSet::new(),
        }
    }

    /// Calendar where every day of the week is a working day.
    ///
    /// Useful when the caller already works in elapsed days.
    pub fn all_days() -> Self {
        Self {
            working_weekdays: [true; 7],
            holidays: BTreeSet::new(),
        }
    }

    /// Adds a holiday exception.
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Adds several holiday exceptions.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(dates);
        self
    }

    /// Whether a date is a working day.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_weekdays[date.weekday().num_days_from_monday() as usize]
            && !self.holidays.contains(&date)
    }

    /// First working day on or after `date`.
    pub fn roll_forward(&self, date: NaiveDate) -> NaiveDate {
        let mut d = date;
        while !self.is_working_day(d) {
            d += Duration::days(1);
        }
        d
    }

    /// First working day on or before `date`.
    pub fn roll_backward(&self, date: NaiveDate) -> NaiveDate {
        let mut d = date;
        while !self.is_working_day(d) {
            d -= Duration::days(1);
        }
        d
    }

    /// The date `n` working days from `date` (signed).
    ///
    /// `date` is first rolled forward to a working day; `n = 0` returns that
    /// day, positive `n` steps forward and negative `n` steps backward one
    /// working day at a time.
    pub fn add_working_days(&self, date: NaiveDate, n: i64) -> NaiveDate {
        let mut d = self.roll_forward(date);
        if n >= 0 {
            for _ in 0..n {
                d = self.roll_forward(d + Duration::days(1));
            }
        } else {
            for _ in 0..(-n) {
                d = self.roll_backward(d - Duration::days(1));
            }
        }
        d
    }

    /// Signed count of working days in the half-open range `[a, b)`.
    ///
    /// Returns a negative count when `b < a`.
    pub fn working_days_between(&self, a: NaiveDate, b: NaiveDate) -> i64 {
        if b < a {
            return -self.working_days_between(b, a);
        }
        let mut count = 0;
        let mut d = a;
        while d < b {
            if self.is_working_day(d) {
                count += 1;
            }
            d += Duration::days(1);
        }
        count
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::standard()
    }
}
