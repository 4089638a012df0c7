//! # fieldtrack
//!
//! A Rust library for reporting which descriptive metadata fields appear on
//! digital-collection catalog pages, modeled on the tracking snippets those
//! pages historically embedded.
//!
//! ## Features
//!
//! - **Field Scanning**: Walk a page tree, match configured field names
//!   against row labels by substring, and capture the adjacent values
//! - **Pluggable Row Selection**: Class-marker and table-row strategies cover
//!   the common catalog templates
//! - **Command-Queue Reporting**: Matches become serializable analytics
//!   commands in a queue; delivery stays out of scope
//! - **Two Reporting Models**: Per-match events, or legacy custom-variable
//!   slots with a trailing pageview
//!
//! ## Library Usage
//!
//! ```rust
//! use fieldtrack::{CommandQueueReporter, Document, Tracker, TrackerConfig};
//!
//! # fn main() -> fieldtrack::Result<()> {
//! let html = r#"
//!     <div class="description_col1">Agency</div>
//!     <div class="description_col2">State Library</div>
//! "#;
//! let document = Document::parse(html);
//!
//! let config = TrackerConfig::new(vec!["Agency".to_string()]);
//! let tracker = Tracker::new(config)?;
//!
//! let mut reporter = CommandQueueReporter::new();
//! let outcome = tracker.track(&document, None, &mut reporter);
//!
//! assert_eq!(outcome.matches.len(), 1);
//! assert_eq!(reporter.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: Integrator-facing configuration and validation
//! - [`dom`]: Owned page-tree representation, built from HTML or JSON
//! - [`scan`]: Row selection strategies and the field-matching core
//! - [`report`]: Reporter trait, command model, and the in-memory queue
//! - [`tracker`]: Orchestration of setup, scan, slot flush, and pageview
//! - [`error`]: Error types and result alias

pub mod config;
pub mod dom;
pub mod error;
pub mod report;
pub mod scan;
pub mod tracker;

pub use config::{DomainConfig, SelectionConfig, TrackerConfig};
pub use dom::{Document, ElementNode};
pub use error::{Result, TrackerError};
pub use report::{Command, CommandQueueReporter, ReportMode, Reporter};
pub use scan::{EarlyExit, FieldMatch, FieldScanner, ScanOutcome};
pub use tracker::Tracker;
