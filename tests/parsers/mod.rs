//! Parser integration tests
//!
//! Covers line acceptance and rejection, numeric field parsing,
//! ordering and the example controller log.
