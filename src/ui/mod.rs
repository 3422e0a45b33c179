//! UI rendering modules for the jointlog viewer.
//!
//! - `summary` - Top bar with the source file and per-joint maxima
//! - `chart` - Stacked per-joint deviation charts and downsampling

pub mod chart;
pub mod summary;
