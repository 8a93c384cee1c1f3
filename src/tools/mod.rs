//! FLX Tools module
//!
//! Host-facing tool implementations for the Food Label Extractor.

pub mod extract;
pub mod status;
