//! Food Label Extractor (FLX) Library
//!
//! Core functionality for turning OCR'd nutrition label scans into
//! normalized nutrient data.

pub mod build_info;
pub mod extract;
pub mod label;
pub mod mcp;
pub mod tools;
