//! FLX Status Tool
//!
//! Provides runtime status information about the FLX service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Label scan extraction instructions for AI assistants
pub const SCAN_INSTRUCTIONS: &str = r#"
# FLX Label Scan Extraction Instructions

This guide explains how to turn a food-label scan into clean nutrient data
using the Food Label Extractor (FLX) tools.

## Overview

FLX consumes the OCR output of a scanned nutrition label (a "scan result")
and produces a normalized nutrient list: one entry per attribute, in the
label's visual order, with units corrected against each attribute's
supported set. FLX does not run OCR itself - the host's vision pipeline
supplies the scan result JSON.

## Scan Result Shape

A scan result contains:
- `rows`: one entry per detected nutrient line. Each row has an
  `attribute` (e.g. "energy", "fat"), an optional `attribute_text`
  (the OCR text and box the attribute name was read from), and up to two
  candidate values `value1`/`value2` - one per label column.
- `header1`/`header2` (optional): the column header texts, e.g.
  "Per 100g" and "Per Serving".
- `panel_box` (optional): the bounds of the nutrition facts table. When
  absent, FLX derives bounds from the rows that carry values.

## Typical Workflow

1. Call `best_column` with the scan to see which column is most likely
   the primary one (more populated rows win; larger values break ties).
2. Call `extract_nutrients` with the scan and the chosen column (or omit
   `column` to accept the best-column default).
3. Present the returned nutrients to the user for confirmation. Every
   entry starts with `confirmed: false`.
4. When the user has already filled in some attributes by hand, pass
   their names in `ignoring` on the next extraction so they are not
   overwritten.

## Extraction Guarantees

- No duplicate attributes: the first detection of an attribute wins.
- Energy always leads the list when present and not ignored.
- Carbohydrate, fat, and protein are always present (empty placeholders
  when the scan had no value for them) unless ignored.
- A detected unit an attribute cannot carry is reset to the attribute's
  default unit. Percentage units are legal only for minerals and
  vitamins.
- Value-less rows whose text lies outside the nutrition panel are
  dropped as OCR noise; value-less rows inside it are kept as empty
  entries.

## Fallback Column Values

Set `include_fallback: true` to borrow the opposite column's value for
rows missing one in the requested column. Use this for single-column
labels that OCR occasionally splits into two, not for genuine two-column
labels - there it silently mixes per-100g and per-serving numbers.

## Parsing Raw Lines

`parse_value_text` detects every number+unit token in a raw OCR string
("Energy 1046kJ / 250 kcal" yields both values). Use it when the vision
pipeline hands you unsplit candidate lines. `list_attributes` returns the
full attribute table (group, default unit, supported units) when you need
to validate or explain unit handling.
"#;

/// Runtime status of the FLX service
#[derive(Debug, Clone, Serialize)]
pub struct FlxStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Work counters
    pub extractions_performed: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    extractions: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            extractions: 0,
        }
    }

    /// Record one completed extraction
    pub fn record_extraction(&mut self) {
        self.extractions += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> FlxStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FlxStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            extractions_performed: self.extractions,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
