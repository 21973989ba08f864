use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// A single chat message in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,

    /// Transcribed or generated text.
    pub text: String,

    /// Opaque playable audio reference (AI entries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    /// When this entry was appended.
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only conversation transcript.
///
/// Insertion order is display order. Entries are never edited after being
/// appended; the API exposes appends and reads only.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's transcribed speech.
    pub fn push_user(&mut self, text: String) {
        self.entries.push(TranscriptEntry {
            role: Role::User,
            text,
            audio: None,
            timestamp: Utc::now(),
        });
    }

    /// Append the AI reply, with its synthesized audio handle if available.
    pub fn push_ai(&mut self, text: String, audio: Option<String>) {
        self.entries.push(TranscriptEntry {
            role: Role::Ai,
            text,
            audio,
            timestamp: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello".to_string());
        transcript.push_ai("hi there".to_string(), Some("blob://1".to_string()));
        transcript.push_user("bye".to_string());

        let entries = transcript.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[0].text, "hello");
        assert_eq!(entries[1].role, Role::Ai);
        assert_eq!(entries[1].audio.as_deref(), Some("blob://1"));
        assert_eq!(entries[2].role, Role::User);
    }

    #[test]
    fn user_entries_carry_no_audio() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello".to_string());
        assert!(transcript.entries()[0].audio.is_none());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let mut transcript = Transcript::new();
        transcript.push_ai("hi".to_string(), None);
        let json = serde_json::to_string(&transcript.entries()[0]).unwrap();
        assert!(json.contains("\"role\":\"ai\""));
        assert!(!json.contains("audio"));
    }
}
