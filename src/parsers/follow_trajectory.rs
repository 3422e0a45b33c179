use regex::{Captures, Regex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use strum::IntoEnumIterator;

use super::types::{AlignedRecord, ExtractedLog, Joint, JointVector, Parseable, JOINT_COUNT};
use crate::error::{JointLogError, Result};

/// Marker the controller writes on every follow-trajectory line
pub const FOLLOW_TRAJECTORY_MARKER: &str = r"task_name=follow\strajectory;";

/// Signed decimal, optionally with an exponent (`-0.5`, `3`, `2.5e-3`)
const NUMBER: &str = r"-?[0-9]?\.?[0-9]+(?:e[+-][0-9]+)?";

/// Timestamp that is followed by both a state and a target block on the same line
const TIMESTAMP_PATTERN: &str =
    r"(?<timestamp>\d{4}-\d{0,2}-\d{2}\s\d{0,2}:\d{0,2}:\d{0,2}\.[0-9]+).*state.q1.*target.q6";

/// Which of the three line checks rejected a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineMiss {
    Timestamp,
    State,
    Target,
}

/// Result of checking one line: a complete record or the first check that failed
#[derive(Clone, Debug, PartialEq)]
pub enum LineOutcome {
    Record(AlignedRecord),
    Miss(LineMiss),
}

/// Builds the pattern for one labelled block, e.g. `state.q1= … state.q6=`
fn joint_block_pattern(prefix: &str) -> String {
    let mut pattern = String::from(FOLLOW_TRAJECTORY_MARKER);
    for joint in Joint::iter() {
        pattern.push_str(&format!(
            r".*{prefix}\.{joint}=\s(?<{joint}>{NUMBER})",
            prefix = prefix,
            joint = joint,
            NUMBER = NUMBER
        ));
    }
    pattern
}

/// Extractor for `task_name=follow trajectory;` state/target lines.
///
/// Each line is checked against three independent patterns (timestamp,
/// state block, target block). Only lines matching all three become records;
/// everything else in the log is skipped.
pub struct FollowTrajectory {
    timestamp: Regex,
    state: Regex,
    target: Regex,
}

impl Default for FollowTrajectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowTrajectory {
    pub fn new() -> Self {
        Self {
            timestamp: Regex::new(TIMESTAMP_PATTERN).expect("Failed to compile timestamp regex"),
            state: Regex::new(&joint_block_pattern("state"))
                .expect("Failed to compile state regex"),
            target: Regex::new(&joint_block_pattern("target"))
                .expect("Failed to compile target regex"),
        }
    }

    /// Check a single line. Errors only when a matched field is not a valid number.
    pub fn extract_line(&self, line: &str, line_number: usize) -> Result<LineOutcome> {
        let Some(timestamp) = self.timestamp.captures(line) else {
            return Ok(LineOutcome::Miss(LineMiss::Timestamp));
        };
        let Some(state) = self.state.captures(line) else {
            return Ok(LineOutcome::Miss(LineMiss::State));
        };
        let Some(target) = self.target.captures(line) else {
            return Ok(LineOutcome::Miss(LineMiss::Target));
        };

        Ok(LineOutcome::Record(AlignedRecord {
            timestamp: timestamp["timestamp"].to_string(),
            state: Self::joint_values(&state, "state", line_number)?,
            target: Self::joint_values(&target, "target", line_number)?,
            line_number,
        }))
    }

    fn joint_values(captures: &Captures, prefix: &str, line_number: usize) -> Result<JointVector> {
        let mut values = [0.0; JOINT_COUNT];
        for joint in Joint::iter() {
            let raw = &captures[joint.as_ref()];
            values[joint.index()] =
                raw.parse::<f64>()
                    .map_err(|source| JointLogError::MalformedCapture {
                        line: line_number,
                        field: format!("{}.{}", prefix, joint),
                        value: raw.to_string(),
                        source,
                    })?;
        }
        Ok(JointVector(values))
    }

    /// Scan any buffered source line by line
    pub fn parse_reader<R: BufRead>(&self, reader: R, origin: &Path) -> Result<ExtractedLog> {
        let mut log = ExtractedLog::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| JointLogError::FileAccess {
                path: origin.to_path_buf(),
                source,
            })?;
            let line_number = index + 1;
            log.stats.lines_scanned += 1;

            match self.extract_line(&line, line_number)? {
                LineOutcome::Record(record) => log.push(record),
                LineOutcome::Miss(miss) => {
                    tracing::trace!("Line {} skipped: no {:?} match", line_number, miss);
                    match miss {
                        LineMiss::Timestamp => log.stats.missing_timestamp += 1,
                        LineMiss::State => log.stats.missing_state += 1,
                        LineMiss::Target => log.stats.missing_target += 1,
                    }
                }
            }
        }

        tracing::info!(
            "Extracted {} follow trajectory records from {} lines",
            log.len(),
            log.stats.lines_scanned
        );

        Ok(log)
    }

    /// Open and scan a log file. The file is closed when this returns.
    pub fn parse_file(&self, path: &Path) -> Result<ExtractedLog> {
        let file = File::open(path).map_err(|source| JointLogError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Reading {}", path.display());
        self.parse_reader(BufReader::new(file), path)
    }
}

impl Parseable for FollowTrajectory {
    fn parse(&self, file_contents: &str) -> Result<ExtractedLog> {
        self.parse_reader(file_contents.as_bytes(), Path::new("<memory>"))
    }
}
