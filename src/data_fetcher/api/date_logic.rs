//! Date parsing and the inclusive date range walked by an export run

use crate::constants::DATE_FORMAT;
use crate::error::AppError;
use chrono::{Days, NaiveDate};
use std::iter::FusedIterator;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{value}', expected YYYY-MM-DD: {e}"))
    })
}

/// Formats a date the way the API and the output file names expect it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Inclusive range of calendar dates, one per day.
///
/// The range itself holds no iteration state, so it can be walked any
/// number of times. An end date before the start date gives an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of dates in the range: `(end - start).days + 1`, or 0.
    pub fn len(&self) -> usize {
        let days = (self.end - self.start).num_days();
        if days < 0 { 0 } else { days as usize + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Starts a fresh walk from the first date.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy walk over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // Stops at the end date, or at NaiveDate::MAX where there is no successor
        self.next = if current < self.end {
            current.checked_add_days(Days::new(1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => DateRange::new(next, self.end).len(),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}
