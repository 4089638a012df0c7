use crate::report::{Command, Reporter};

/// In-memory command queue implementing [`Reporter`].
///
/// Models the legacy global command array: calls append in order and are drained
/// by whoever owns the transport. Also the reporter of choice in tests, where
/// queue contents pin emission order.
#[derive(Debug, Default)]
pub struct CommandQueueReporter {
    commands: Vec<Command>,
}

impl CommandQueueReporter {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// View the queued commands in emission order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Take the queued commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, command: Command) {
        log::trace!("queueing {command:?}");
        self.commands.push(command);
    }
}

impl Reporter for CommandQueueReporter {
    fn event(&mut self, category: &str, action: &str, label: &str) {
        self.push(Command::TrackEvent {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        });
    }

    fn set_custom_variable(&mut self, slot: usize, name: &str, value: &str) {
        self.push(Command::SetCustomVar {
            slot,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn track_pageview(&mut self) {
        self.push(Command::TrackPageview);
    }

    fn set_account(&mut self, account: &str) {
        self.push(Command::SetAccount { account: account.to_string() });
    }

    fn set_domain_name(&mut self, domain: &str) {
        self.push(Command::SetDomainName { domain: domain.to_string() });
    }

    fn set_allow_linker(&mut self, allow: bool) {
        self.push(Command::SetAllowLinker { allow });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = CommandQueueReporter::new();
        queue.set_account("UA-1-1");
        queue.event("Category", "Agency", "State Library");
        queue.track_pageview();

        assert_eq!(queue.len(), 3);
        assert!(matches!(queue.commands()[0], Command::SetAccount { .. }));
        assert!(matches!(queue.commands()[1], Command::TrackEvent { .. }));
        assert_eq!(queue.commands()[2], Command::TrackPageview);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = CommandQueueReporter::new();
        queue.set_allow_linker(true);
        queue.set_custom_variable(1, "Agency", "State Library");

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }
}
