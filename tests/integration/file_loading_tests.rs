//! File loading integration tests
//!
//! Tests for end-to-end extraction and analysis of log files on disk.

use crate::common::assertions::*;
use crate::common::example_files::*;
use crate::common::float_cmp::*;
use crate::common::synthetic::*;
use crate::common::{example_file_exists, write_temp_log};
use jointlog::analysis::{analyze_file, DeviationReport};
use jointlog::parsers::types::Joint;
use jointlog::parsers::FollowTrajectory;
use jointlog::JointLogError;
use std::path::Path;

// ============================================
// Complete Cycle Tests
// ============================================

#[test]
fn test_example_log_complete_cycle() {
    if !example_file_exists(KUKA_FOLLOW_TRAJECTORY) {
        eprintln!("Skipping: {} not found", KUKA_FOLLOW_TRAJECTORY);
        return;
    }

    let log = FollowTrajectory::new()
        .parse_file(Path::new(KUKA_FOLLOW_TRAJECTORY))
        .expect("Should parse");
    assert_aligned(&log);
    assert_finite_values(&log);

    let report = DeviationReport::from_log(&log).expect("Should aggregate");
    assert_eq!(report.series.len(), log.len());
    assert_joints_approx_eq(
        report.summary.max.values(),
        &[0.9922, 0.9964, 0.9957, 0.9914, 0.9889, 0.9888],
        DEFAULT_TOLERANCE,
    );

    let axis = report.time_axis().expect("Should build time axis");
    assert_eq!(axis.len(), report.series.len());
    assert_approx_eq(axis.seconds()[29], 29.0 * 0.012, 1e-6);

    for joint in [Joint::Q1, Joint::Q6] {
        assert_eq!(report.joint_series(joint).len(), axis.len());
    }
}

#[test]
fn test_analyze_file_reference_line() {
    let file = write_temp_log(format!("{}\n", REFERENCE_LINE));
    let report = analyze_file(file.path()).expect("Should analyze");

    let line = report.summary_line();
    assert!(line.starts_with("Maximum difference of each joint [2.5, -4.0, 0.5, "));
    assert_eq!(line, format!("Maximum difference of each joint {}", report.summary.max));
    assert_joints_approx_eq(
        report.summary.max.values(),
        &[2.5, -4.0, 0.5, 6.14, -0.001, 0.0125],
        1e-12,
    );
}

// ============================================
// Error Path Tests
// ============================================

#[test]
fn test_missing_file_is_file_access_error() {
    let path = Path::new("/nonexistent/dir/kuka_robot.log");
    let err = FollowTrajectory::new().parse_file(path).unwrap_err();

    match err {
        JointLogError::FileAccess { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_empty_file() {
    let file = write_temp_log("");
    let log = FollowTrajectory::new().parse_file(file.path()).expect("Should parse");
    let result = analyze_file(file.path());

    assert!(log.timestamps.is_empty());
    assert!(log.states.is_empty());
    assert!(log.targets.is_empty());
    assert!(matches!(result, Err(JointLogError::EmptyDataset)));
}

#[test]
fn test_file_without_follow_trajectory_lines() {
    let contents = "2023-01-05 10:15:29.0 [INFO] boot\n\
        2023-01-05 10:15:29.5 [INFO] task_name=move home; state.q1= 0.0\n";
    let file = write_temp_log(contents);
    let result = analyze_file(file.path());

    assert!(matches!(result, Err(JointLogError::EmptyDataset)));
}

#[test]
fn test_invalid_utf8_is_file_access_error() {
    let file = write_temp_log([0x66, 0x6f, 0xff, 0xfe, 0x0a]);
    let result = FollowTrajectory::new().parse_file(file.path());

    assert!(matches!(result, Err(JointLogError::FileAccess { .. })));
}

#[test]
fn test_rerun_gives_identical_output() {
    let lines = vec![
        follow_line("2023-01-05 10:15:30.0", [0.5; 6], [0.25; 6]),
        "noise".to_string(),
        follow_line("2023-01-05 10:15:30.1", [0.75; 6], [0.125; 6]),
    ];
    let file = write_temp_log(log_contents(&lines));
    let parser = FollowTrajectory::new();
    let first = parser.parse_file(file.path()).unwrap();
    let second = parser.parse_file(file.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
