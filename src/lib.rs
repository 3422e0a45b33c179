//! jointlog - Joint state/target deviation analysis for robot controller logs
//!
//! This library extracts follow-trajectory state and target joint values from
//! controller text logs, aggregates them into per-joint deviation series and
//! maxima, and provides a viewer that charts each joint over time.
//!
//! ## Module Structure
//!
//! - [`parsers`] - Log line extraction (follow trajectory state/target records)
//! - [`analysis`] - Deviation series, per-joint maxima and the time axis
//! - [`error`] - Error type shared by extraction and aggregation
//! - [`settings`] - Input path configuration
//! - [`app`] - Viewer state and eframe::App implementation
//! - [`ui`] - User interface components
//!   - `summary` - Source file and per-joint maxima
//!   - `chart` - Stacked joint charts

pub mod analysis;
pub mod app;
pub mod error;
pub mod parsers;
pub mod settings;
pub mod ui;

pub use error::{JointLogError, Result};
