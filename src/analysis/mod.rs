//! Aggregation of extracted joint data.
//!
//! [`deviation`] holds the per-record deviation and per-joint maximum
//! computations, [`time_axis`] turns log timestamps into a numeric axis.
//! [`DeviationReport`] bundles both results for the console and chart
//! consumers.

pub mod deviation;
pub mod time_axis;

pub use deviation::{
    compute_deviation_series, compute_max_per_joint, joint_column, DeviationVector,
    JointMaxSummary,
};
pub use time_axis::TimeAxis;

use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::parsers::types::{ExtractedLog, Joint};
use crate::parsers::FollowTrajectory;

/// Everything derived from one extracted log
#[derive(Clone, Debug, Serialize)]
pub struct DeviationReport {
    /// Aligned with `series`
    pub timestamps: Vec<String>,
    pub series: Vec<DeviationVector>,
    pub summary: JointMaxSummary,
}

impl DeviationReport {
    pub fn from_log(log: &ExtractedLog) -> Result<Self> {
        let (report, computation_time) = timed_analyze(|| -> Result<Self> {
            let series = compute_deviation_series(&log.states, &log.targets)?;
            let summary = compute_max_per_joint(&series)?;
            Ok(Self {
                timestamps: log.timestamps.clone(),
                series,
                summary,
            })
        });
        let report = report?;

        tracing::info!(
            "Computed deviation for {} records in {} ms",
            report.series.len(),
            computation_time
        );

        Ok(report)
    }

    pub fn joint_series(&self, joint: Joint) -> Vec<f64> {
        joint_column(&self.series, joint)
    }

    /// The line printed to the console for each run
    pub fn summary_line(&self) -> String {
        format!("Maximum difference of each joint {}", self.summary)
    }

    pub fn time_axis(&self) -> Result<TimeAxis> {
        TimeAxis::from_timestamps(&self.timestamps)
    }
}

/// Extract a log file and build its report in one step
pub fn analyze_file(path: &Path) -> Result<DeviationReport> {
    let log = FollowTrajectory::new().parse_file(path)?;
    DeviationReport::from_log(&log)
}

/// Helper function to measure analysis execution time
pub fn timed_analyze<F, T>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis() as u64;
    (result, elapsed)
}
