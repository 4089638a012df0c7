use crate::config::TrackerConfig;
use crate::dom::Document;
use crate::report::{ReportMode, Reporter};
use crate::scan::RowSelector;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// When the scan stops walking candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyExit {
    /// Stop once every distinct target field has matched at least once
    #[default]
    DistinctFields,

    /// Stop once the number of matches reaches the target count, repeats
    /// included. Kept for parity with deployments that count this way, which
    /// can stop before a not-yet-seen field gets its chance.
    AggregateCount,
}

/// One target field matched against a candidate row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    /// The configured field name that matched
    pub field: String,

    /// Trimmed rendered text of the value node
    pub value: String,

    /// 1-based slot index, the field's position in the configured list
    pub slot: usize,
}

/// What a scan saw and produced
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Matches in candidate order
    pub matches: Vec<FieldMatch>,

    /// Candidate rows inspected before the scan ended
    pub candidates_visited: usize,

    /// Whether the scan stopped before exhausting the candidates
    pub exited_early: bool,
}

/// Walks candidate rows and matches their labels against the configured
/// target fields.
///
/// Matching is substring containment on the label's rendered text, so a target
/// of "Agency" also hits a label reading "Sponsoring Agency". A candidate
/// without a value node is skipped without aborting the walk, mirroring how a
/// structural access fault on one row never takes down the page.
pub struct FieldScanner<'a> {
    config: &'a TrackerConfig,
}

impl<'a> FieldScanner<'a> {
    /// Create a scanner over the given configuration
    pub fn new(config: &'a TrackerConfig) -> Self {
        Self { config }
    }

    /// Scan the document, reporting per-match events when the configured mode
    /// calls for them.
    ///
    /// In event mode each match emits one category/action/label event as soon
    /// as it is found. In custom-variable mode matches are only collected; the
    /// caller owns slot assignment and the trailing pageview.
    pub fn scan(&self, document: &Document, reporter: &mut dyn Reporter) -> ScanOutcome {
        let pending_total = self.config.non_empty_targets();
        if pending_total == 0 {
            return ScanOutcome::default();
        }

        let selector = self.config.row_selector();
        let candidates = selector.candidates(document);
        log::debug!(
            "scanning {} candidate rows for {} target fields",
            candidates.len(),
            pending_total
        );

        let mut outcome = ScanOutcome::default();
        let mut matched: IndexSet<usize> = IndexSet::new();
        let mut done = 0usize;

        for candidate in &candidates {
            let finished = match self.config.early_exit {
                EarlyExit::DistinctFields => matched.len() == pending_total,
                EarlyExit::AggregateCount => done == pending_total,
            };
            if finished {
                outcome.exited_early = true;
                break;
            }

            outcome.candidates_visited += 1;
            let label_text = candidate.label.rendered_text();

            for (index, field) in self.config.fields.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                if self.config.early_exit == EarlyExit::DistinctFields
                    && matched.contains(&index)
                {
                    continue;
                }
                if !label_text.contains(field.as_str()) {
                    continue;
                }

                let Some(value_node) = candidate.value else {
                    log::debug!("label {field:?} matched but the row has no value node");
                    continue;
                };
                let value = value_node.rendered_text().trim().to_string();

                if self.config.mode == ReportMode::Event {
                    reporter.event(&self.config.category, field, &value);
                }

                matched.insert(index);
                done += 1;
                outcome.matches.push(FieldMatch {
                    field: field.clone(),
                    value,
                    slot: index + 1,
                });
            }
        }

        log::info!(
            "scan matched {} of {} fields over {} candidates",
            matched.len(),
            pending_total,
            outcome.candidates_visited
        );
        outcome
    }
}
