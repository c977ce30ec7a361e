//! Domain modules organized as vertical slices.
//!
//! - `record` — wire record, display result, allow-list conversion, sub-client
//! - `view` — per-section view state containers

pub mod record;
pub mod view;
