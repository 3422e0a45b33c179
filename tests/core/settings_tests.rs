//! Tests for analysis settings persistence
//!
//! Tests cover:
//! - Default settings values
//! - Serialization/deserialization
//! - Settings file roundtrip
//! - Log path resolution

use crate::common::write_temp_log;
use jointlog::settings::{AnalysisSettings, DEFAULT_LOG_FILENAME, DEFAULT_MAX_CHART_POINTS};
use std::path::PathBuf;

// ============================================
// Default Settings Tests
// ============================================

#[test]
fn test_settings_defaults() {
    let settings = AnalysisSettings::default();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.log_path, None);
    assert_eq!(settings.max_chart_points, DEFAULT_MAX_CHART_POINTS);
}

#[test]
fn test_default_log_path_is_next_to_executable() {
    let path = AnalysisSettings::default_log_path();
    assert!(path.ends_with(DEFAULT_LOG_FILENAME));

    let exe_dir = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    assert_eq!(path.parent(), Some(exe_dir.as_path()));
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_settings_serialize_default() {
    let json = serde_json::to_string(&AnalysisSettings::default()).unwrap();
    assert!(json.contains("version"));
    assert!(json.contains("log_path"));
    assert!(json.contains("max_chart_points"));
}

#[test]
fn test_settings_partial_json() {
    let settings: AnalysisSettings =
        serde_json::from_str(r#"{"log_path": "/srv/logs/cell1.log"}"#).unwrap();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.log_path(), PathBuf::from("/srv/logs/cell1.log"));
}

// ============================================
// File Roundtrip Tests
// ============================================

#[test]
fn test_settings_file_roundtrip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");

    let settings = AnalysisSettings {
        version: 1,
        log_path: Some(PathBuf::from("robot/cell2.log")),
        max_chart_points: 500,
    };
    std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

    let loaded = AnalysisSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_settings_invalid_json_is_error() {
    let file = write_temp_log("{ not json");
    let result = AnalysisSettings::load_from(file.path());
    assert!(result.unwrap_err().contains("Failed to parse"));
}

#[test]
fn test_settings_missing_file_is_error() {
    let result = AnalysisSettings::load_from(&PathBuf::from("/nonexistent/jointlog/settings.json"));
    assert!(result.unwrap_err().contains("Failed to read"));
}
