use serde::Serialize;
use std::fmt;
use std::ops::Index;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::error::Result;

/// Number of robot joint axes reported by the controller
pub const JOINT_COUNT: usize = Joint::COUNT;

/// Robot joint axes in controller-reported order (shoulder first, flange last)
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Joint {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
}

impl Joint {
    /// Position of this joint inside a [`JointVector`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One value per joint, ordered q1..q6
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JointVector(pub [f64; JOINT_COUNT]);

impl JointVector {
    #[inline]
    pub fn get(&self, joint: Joint) -> f64 {
        self.0[joint.index()]
    }

    pub fn values(&self) -> &[f64; JOINT_COUNT] {
        &self.0
    }

    /// Elementwise combination of two vectors
    pub fn zip_with(&self, other: &JointVector, f: impl Fn(f64, f64) -> f64) -> JointVector {
        let mut out = [0.0; JOINT_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = f(self.0[i], other.0[i]);
        }
        JointVector(out)
    }
}

impl Index<Joint> for JointVector {
    type Output = f64;

    fn index(&self, joint: Joint) -> &f64 {
        &self.0[joint.index()]
    }
}

/// Prints as `[a, b, c, d, e, f]` using shortest round-trip float formatting
impl fmt::Display for JointVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        write!(f, "]")
    }
}

/// A single follow-trajectory line with its timestamp, state and target
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignedRecord {
    pub timestamp: String,
    pub state: JointVector,
    pub target: JointVector,
    /// 1-based line number in the source log
    pub line_number: usize,
}

/// Counters collected while scanning a log
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub lines_scanned: usize,
    pub records: usize,
    pub missing_timestamp: usize,
    pub missing_state: usize,
    pub missing_target: usize,
}

/// Extraction output: three index-aligned sequences
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExtractedLog {
    pub timestamps: Vec<String>,
    pub states: Vec<JointVector>,
    pub targets: Vec<JointVector>,
    /// Source line of each record
    pub line_numbers: Vec<usize>,
    pub stats: ExtractionStats,
}

impl ExtractedLog {
    pub fn push(&mut self, record: AlignedRecord) {
        self.timestamps.push(record.timestamp);
        self.states.push(record.state);
        self.targets.push(record.target);
        self.line_numbers.push(record.line_number);
        self.stats.records += 1;
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Rebuild the aligned records from the parallel sequences
    pub fn records(&self) -> impl Iterator<Item = AlignedRecord> + '_ {
        self.timestamps
            .iter()
            .zip(&self.states)
            .zip(&self.targets)
            .zip(&self.line_numbers)
            .map(|(((timestamp, state), target), line_number)| AlignedRecord {
                timestamp: timestamp.clone(),
                state: *state,
                target: *target,
                line_number: *line_number,
            })
    }
}

/// Trait for log file parsers
pub trait Parseable {
    fn parse(&self, data: &str) -> Result<ExtractedLog>;
}
