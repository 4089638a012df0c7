//! Integrator-facing configuration
//!
//! A [`TrackerConfig`] names the metadata fields to observe, the reporting
//! model, the row-selection strategy for the page template, and the transport
//! setup (account and cookie domains) used by the legacy custom-variable mode.
//! Configs deserialize from JSON files and can also be assembled with builder
//! methods.

use crate::error::{Result, TrackerError};
use crate::report::{MAX_CUSTOM_VAR_SLOTS, ReportMode};
use crate::scan::{ClassMarkerRows, EarlyExit, RowSelector, TableRows};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Event category used when the config does not override it
pub const DEFAULT_CATEGORY: &str = "Pageview by metadata field";

/// Marker class CONTENTdm templates put on field-name cells
pub const DEFAULT_CLASS_MARKER: &str = "description_col1";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_class_marker() -> String {
    DEFAULT_CLASS_MARKER.to_string()
}

fn default_value_cell() -> usize {
    1
}

/// Row-selection strategy, chosen per page template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SelectionConfig {
    /// Label nodes carry a marker class; the value node is the label's next
    /// sibling element
    ClassMarker {
        #[serde(default = "default_class_marker")]
        class: String,
    },

    /// Rows are `<tr>` elements; label and value are the cells at fixed indices
    TableRow {
        #[serde(default)]
        label_cell: usize,
        #[serde(default = "default_value_cell")]
        value_cell: usize,
    },
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::ClassMarker { class: default_class_marker() }
    }
}

/// Cookie domains for cross-domain visitor linking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// The collections domain visitors normally arrive on
    pub primary: String,

    /// Vendor-hosted alias some visitors arrive on instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_alias: Option<String>,
}

/// Transport setup derived from the observed page host
#[derive(Debug, Clone, PartialEq)]
pub struct DomainDirective {
    /// Domain name to declare, when the host is recognized
    pub domain_name: Option<String>,

    /// Whether cross-domain linking must be enabled
    pub allow_linker: bool,
}

impl DomainConfig {
    /// Resolve which domain name to declare for the given page host.
    ///
    /// With a hosted alias configured, visitors can arrive on either domain, so
    /// linking is always enabled and the declared name follows the host. An
    /// unrecognized host declares nothing rather than mismatching the cookie
    /// domain.
    pub fn resolve(&self, host: &str) -> DomainDirective {
        match &self.hosted_alias {
            Some(alias) => {
                let domain_name = if host_matches(host, &self.primary) {
                    Some(self.primary.clone())
                } else if host_matches(host, alias) {
                    Some(alias.clone())
                } else {
                    None
                };
                DomainDirective { domain_name, allow_linker: true }
            }
            None => DomainDirective {
                domain_name: host_matches(host, &self.primary)
                    .then(|| self.primary.clone()),
                allow_linker: false,
            },
        }
    }
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.strip_suffix(domain).is_some_and(|rest| rest.ends_with('.'))
}

/// Configuration for a tracker run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Ordered target field names; empty entries mark unused slots
    pub fields: Vec<String>,

    /// Event category (event mode only)
    #[serde(default = "default_category")]
    pub category: String,

    /// Reporting model
    #[serde(default)]
    pub mode: ReportMode,

    /// Row-selection strategy
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Early-exit behavior of the scan
    #[serde(default)]
    pub early_exit: EarlyExit,

    /// Analytics account id (custom-variable mode transport setup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Cookie-domain setup (custom-variable mode transport setup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<DomainConfig>,
}

impl TrackerConfig {
    /// Create a config tracking the given fields, with defaults everywhere else
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            category: default_category(),
            mode: ReportMode::default(),
            selection: SelectionConfig::default(),
            early_exit: EarlyExit::default(),
            account: None,
            domains: None,
        }
    }

    /// Builder method: set the event category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder method: set the reporting model
    pub fn with_mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: set the row-selection strategy
    pub fn with_selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }

    /// Builder method: set the early-exit behavior
    pub fn with_early_exit(mut self, early_exit: EarlyExit) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Builder method: set the analytics account id
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Builder method: set the cookie-domain configuration
    pub fn with_domains(mut self, domains: DomainConfig) -> Self {
        self.domains = Some(domains);
        self
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| TrackerError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self =
            serde_json::from_str(&raw).map_err(|e| TrackerError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constraints the reporting transport imposes
    pub fn validate(&self) -> Result<()> {
        if self.non_empty_targets() == 0 {
            return Err(TrackerError::ConfigInvalid(
                "no non-empty target fields configured".to_string(),
            ));
        }
        if self.mode == ReportMode::CustomVariable && self.fields.len() > MAX_CUSTOM_VAR_SLOTS {
            return Err(TrackerError::ConfigInvalid(format!(
                "custom-variable mode supports at most {} slots, got {} fields",
                MAX_CUSTOM_VAR_SLOTS,
                self.fields.len()
            )));
        }
        Ok(())
    }

    /// Number of target fields that can actually match
    pub fn non_empty_targets(&self) -> usize {
        self.fields.iter().filter(|f| !f.is_empty()).count()
    }

    /// Instantiate the configured row-selection strategy
    pub fn row_selector(&self) -> Box<dyn RowSelector> {
        match &self.selection {
            SelectionConfig::ClassMarker { class } => Box::new(ClassMarkerRows::new(class.clone())),
            SelectionConfig::TableRow { label_cell, value_cell } => {
                Box::new(TableRows::new(*label_cell, *value_cell))
            }
        }
    }
}
