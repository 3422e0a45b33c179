//! Per-joint deviation series and maxima.
//!
//! The controller analysis this reproduces defines "deviation" as the
//! elementwise sum `state + target`, not their difference. Downstream reports
//! and charts rely on that definition, so it is kept as-is.

use serde::Serialize;
use std::fmt;
use strum::IntoEnumIterator;

use crate::error::{JointLogError, Result};
use crate::parsers::types::{Joint, JointVector, JOINT_COUNT};

/// Deviation values for one record, ordered q1..q6
pub type DeviationVector = JointVector;

/// Maximum deviation per joint, each axis reduced independently
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointMaxSummary {
    pub max: JointVector,
    /// Index of the record that first reached each maximum
    pub record_index: [usize; JOINT_COUNT],
}

impl JointMaxSummary {
    pub fn get(&self, joint: Joint) -> f64 {
        self.max.get(joint)
    }
}

impl fmt::Display for JointMaxSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.max, f)
    }
}

/// One deviation vector per record, `state[i] + target[i]`, in input order
pub fn compute_deviation_series(
    states: &[JointVector],
    targets: &[JointVector],
) -> Result<Vec<DeviationVector>> {
    if states.len() != targets.len() {
        return Err(JointLogError::MisalignedSeries {
            states: states.len(),
            targets: targets.len(),
        });
    }

    Ok(states
        .iter()
        .zip(targets)
        .map(|(state, target)| state.zip_with(target, |s, t| s + t))
        .collect())
}

/// Per-joint maximum over the whole series.
///
/// Ties keep the earliest record. An empty series has no maximum and is
/// reported as [`JointLogError::EmptyDataset`].
pub fn compute_max_per_joint(series: &[DeviationVector]) -> Result<JointMaxSummary> {
    let (first, rest) = series.split_first().ok_or(JointLogError::EmptyDataset)?;

    let mut max = *first;
    let mut record_index = [0usize; JOINT_COUNT];

    for (offset, deviation) in rest.iter().enumerate() {
        for joint in Joint::iter() {
            let i = joint.index();
            if deviation.0[i] > max.0[i] {
                max.0[i] = deviation.0[i];
                record_index[i] = offset + 1;
            }
        }
    }

    Ok(JointMaxSummary { max, record_index })
}

/// Time-ordered values of a single joint, for plotting
pub fn joint_column(series: &[DeviationVector], joint: Joint) -> Vec<f64> {
    series.iter().map(|d| d.get(joint)).collect()
}
