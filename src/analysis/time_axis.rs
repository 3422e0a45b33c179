//! Numeric time axis for the extracted timestamps.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{JointLogError, Result};

/// Format of the controller's log timestamps (`2023-01-05 10:15:30.123456`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Record times as seconds since the first record
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeAxis {
    origin: Option<NaiveDateTime>,
    seconds: Vec<f64>,
}

impl TimeAxis {
    pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
            JointLogError::InvalidTimestamp {
                value: value.to_string(),
                source,
            }
        })
    }

    pub fn from_timestamps(timestamps: &[String]) -> Result<Self> {
        let parsed = timestamps
            .iter()
            .map(|t| Self::parse_timestamp(t))
            .collect::<Result<Vec<_>>>()?;

        let Some(&origin) = parsed.first() else {
            return Ok(Self::default());
        };

        let origin_micros = origin.and_utc().timestamp_micros();
        let seconds = parsed
            .iter()
            .map(|t| (t.and_utc().timestamp_micros() - origin_micros) as f64 / 1_000_000.0)
            .collect();

        Ok(Self {
            origin: Some(origin),
            seconds,
        })
    }

    pub fn origin(&self) -> Option<NaiveDateTime> {
        self.origin
    }

    pub fn seconds(&self) -> &[f64] {
        &self.seconds
    }

    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    /// (earliest, latest) offsets; logs are not required to be sorted
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.seconds.first()?;
        Some(self.seconds.iter().fold((first, first), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        }))
    }

    /// Wall-clock label (`HH:MM:SS.mmm`) for an offset on this axis
    pub fn clock_label(&self, offset_seconds: f64) -> String {
        Self::format_offset(self.origin, offset_seconds)
    }

    /// Same as [`TimeAxis::clock_label`] without borrowing the axis
    pub fn format_offset(origin: Option<NaiveDateTime>, offset_seconds: f64) -> String {
        match origin {
            Some(origin) => {
                let micros = (offset_seconds * 1_000_000.0).round() as i64;
                let at = origin + TimeDelta::microseconds(micros);
                at.format("%H:%M:%S%.3f").to_string()
            }
            None => format!("{:.3}s", offset_seconds),
        }
    }
}
