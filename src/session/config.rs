use std::time::Duration;

use crate::scenario::Scenario;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The scenario this conversation takes place in.
    pub scenario: Scenario,

    /// Window within which rapid record-button presses collapse to one.
    /// Default: 300ms
    pub debounce_window: Duration,
}

impl SessionConfig {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            debounce_window: Duration::from_millis(300),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario {
                id: 1,
                name: "Daily Conversation".to_string(),
            },
            debounce_window: Duration::from_millis(300),
        }
    }
}
