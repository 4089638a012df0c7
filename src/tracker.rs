//! Orchestration of a full tracking run
//!
//! [`Tracker`] ties the pieces together: transport setup for the legacy
//! custom-variable mode, the field scan itself, slot flushing, and the
//! trailing pageview. Event mode needs none of the ceremony, so it reduces to
//! the scan.

use crate::config::TrackerConfig;
use crate::dom::Document;
use crate::error::Result;
use crate::report::{MAX_CUSTOM_VAR_SLOTS, ReportMode, Reporter};
use crate::scan::{FieldScanner, ScanOutcome};

/// Runs a configured scan against a document and drives the reporter
pub struct Tracker {
    config: TrackerConfig,
}

impl Tracker {
    /// Create a tracker, rejecting configurations the transport cannot carry
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this tracker runs with
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Run one full tracking pass over the document.
    ///
    /// In custom-variable mode the reporter sees transport setup first, then
    /// one slot write per matched field in ascending slot order, then exactly
    /// one pageview. A field matched twice keeps the later value. In event
    /// mode the scan's per-match events are all there is.
    pub fn track(
        &self,
        document: &Document,
        page_host: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> ScanOutcome {
        if self.config.mode == ReportMode::CustomVariable {
            self.setup_transport(page_host, reporter);
        }

        let outcome = FieldScanner::new(&self.config).scan(document, reporter);

        if self.config.mode == ReportMode::CustomVariable {
            self.flush_slots(&outcome, reporter);
            reporter.track_pageview();
        }

        outcome
    }

    fn setup_transport(&self, page_host: Option<&str>, reporter: &mut dyn Reporter) {
        if let Some(account) = &self.config.account {
            reporter.set_account(account);
        }
        let (Some(domains), Some(host)) = (&self.config.domains, page_host) else {
            return;
        };
        let directive = domains.resolve(host);
        match &directive.domain_name {
            Some(domain) => reporter.set_domain_name(domain),
            None => log::debug!("host {host:?} matches no configured domain"),
        }
        if directive.allow_linker {
            reporter.set_allow_linker(true);
        }
    }

    fn flush_slots(&self, outcome: &ScanOutcome, reporter: &mut dyn Reporter) {
        let mut slots: [Option<(&str, &str)>; MAX_CUSTOM_VAR_SLOTS] =
            [None; MAX_CUSTOM_VAR_SLOTS];
        for m in &outcome.matches {
            if let Some(entry) = slots.get_mut(m.slot - 1) {
                *entry = Some((m.field.as_str(), m.value.as_str()));
            }
        }
        // TODO: truncate name/value pairs that exceed the transport's
        // 128-character custom-variable limit instead of sending them as-is
        for (i, entry) in slots.iter().enumerate() {
            let Some((name, value)) = entry else { continue };
            if value.is_empty() {
                continue;
            }
            reporter.set_custom_variable(i + 1, name, value);
        }
    }
}
