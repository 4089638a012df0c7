//! Reporting interface and command-queue model
//!
//! The scan never talks to a network. It calls an injected [`Reporter`], and the
//! provided implementation queues serializable [`Command`]s the way the legacy
//! analytics snippet pushed entries onto its global command array. Delivery is
//! someone else's problem.

pub mod queue;

pub use queue::CommandQueueReporter;

use serde::{Deserialize, Serialize};

/// Number of custom-variable slots the legacy transport exposes
pub const MAX_CUSTOM_VAR_SLOTS: usize = 5;

/// Reporting model selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// One category/action/label event per matched field
    #[default]
    Event,

    /// Legacy indexed custom-variable slots plus a trailing pageview
    CustomVariable,
}

/// Injected analytics sink.
///
/// Fire-and-forget: implementations accept every call and never surface
/// transport failures back to the scan.
pub trait Reporter {
    /// Record an event as a category/action/label triple
    fn event(&mut self, category: &str, action: &str, label: &str);

    /// Record a value into a custom-variable slot (1-based)
    fn set_custom_variable(&mut self, slot: usize, name: &str, value: &str);

    /// Record the page view itself
    fn track_pageview(&mut self);

    /// Declare the analytics account
    fn set_account(&mut self, account: &str);

    /// Declare the cookie domain name
    fn set_domain_name(&mut self, domain: &str);

    /// Enable or disable cross-domain linking
    fn set_allow_linker(&mut self, allow: bool);
}

/// A single queued analytics command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    SetAccount { account: String },
    SetDomainName { domain: String },
    SetAllowLinker { allow: bool },
    TrackEvent { category: String, action: String, label: String },
    SetCustomVar { slot: usize, name: String, value: String },
    TrackPageview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mode_serde_names() {
        let json = serde_json::to_string(&ReportMode::CustomVariable).unwrap();
        assert_eq!(json, "\"custom_variable\"");

        let mode: ReportMode = serde_json::from_str("\"event\"").unwrap();
        assert_eq!(mode, ReportMode::Event);
    }

    #[test]
    fn test_command_serialization_is_tagged() {
        let cmd = Command::TrackEvent {
            category: "Pageview by metadata field".to_string(),
            action: "Agency".to_string(),
            label: "State Library".to_string(),
        };

        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["command"], "track_event");
        assert_eq!(json["action"], "Agency");

        let back: Command = serde_json::from_value(json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_pageview_serializes_without_payload() {
        let json = serde_json::to_value(&Command::TrackPageview).unwrap();
        assert_eq!(json, serde_json::json!({"command": "track_pageview"}));
    }
}
