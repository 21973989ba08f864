use serde::{Deserialize, Serialize};

/// A conversation scenario the user practices in.
///
/// Scenarios are statically enumerated and selected once per chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub name: String,
}

impl Scenario {
    /// The built-in scenario catalog.
    pub fn builtin() -> Vec<Scenario> {
        vec![
            Scenario {
                id: 1,
                name: "Daily Conversation".to_string(),
            },
            Scenario {
                id: 2,
                name: "Business Talk".to_string(),
            },
            Scenario {
                id: 3,
                name: "Travel".to_string(),
            },
        ]
    }

    /// Look up a built-in scenario by id.
    pub fn find(id: u32) -> Option<Scenario> {
        Self::builtin().into_iter().find(|s| s.id == id)
    }
}
