//! Field scanning over a page tree
//!
//! This module provides the matching core. It includes:
//! - RowSelector: strategy trait yielding label/value candidate rows
//! - FieldScanner: walks candidates and matches configured field names
//! - ScanOutcome: matches plus walk statistics

pub mod rows;
pub mod scanner;

pub use rows::{CandidateRow, ClassMarkerRows, RowSelector, TableRows};
pub use scanner::{EarlyExit, FieldMatch, FieldScanner, ScanOutcome};
