use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TurnError;

/// Remote conversation pipeline: three independent request/response
/// operations against the external AI service. No retry, no backoff, no
/// caching; failures surface as typed errors for the session to catch.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Transcribe recorded audio. Persists a local copy of the audio to
    /// temp storage before transmission.
    async fn speech_to_text(
        &self,
        audio: &[u8],
        scenario_id: Option<u32>,
    ) -> Result<String, TurnError>;

    /// Get the AI partner's reply to the user's utterance.
    async fn get_ai_response(&self, text: &str) -> Result<AiReply, TurnError>;

    /// Synthesize speech; returns an opaque playable audio reference.
    async fn text_to_speech(&self, text: &str) -> Result<String, TurnError>;
}

/// Response body of the AI-response endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AiReply {
    pub response: String,
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

/// HTTP adapter for the remote pipeline endpoints.
pub struct HttpChatApi {
    client: reqwest::Client,
    base_url: String,
    temp_dir: PathBuf,
}

impl HttpChatApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TurnError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            temp_dir: std::env::temp_dir(),
        })
    }

    /// Override where outgoing audio copies are persisted.
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Save a copy of the outgoing audio to temp storage. This precedes
    /// the network call; its failure aborts the whole operation.
    async fn persist_audio(&self, audio: &[u8]) -> Result<PathBuf, TurnError> {
        let file_name = format!("audio_{}.wav", Utc::now().timestamp_millis());
        let path = self.temp_dir.join(file_name);
        tokio::fs::write(&path, audio).await?;
        debug!(path = %path.display(), bytes = audio.len(), "saved outgoing audio");
        Ok(path)
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn speech_to_text(
        &self,
        audio: &[u8],
        scenario_id: Option<u32>,
    ) -> Result<String, TurnError> {
        self.persist_audio(audio).await?;

        let part = multipart::Part::bytes(audio.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")?;
        let mut form = multipart::Form::new().part("audio", part);
        if let Some(id) = scenario_id {
            form = form.text("scenarioId", id.to_string());
        }

        let text = self
            .client
            .post(self.endpoint("/api/speech-to-text"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(text)
    }

    async fn get_ai_response(&self, text: &str) -> Result<AiReply, TurnError> {
        let reply = self
            .client
            .post(self.endpoint("/api/get-ai-response"))
            .json(&TextRequest { text })
            .send()
            .await?
            .error_for_status()?
            .json::<AiReply>()
            .await?;

        Ok(reply)
    }

    async fn text_to_speech(&self, text: &str) -> Result<String, TurnError> {
        let audio_url = self
            .client
            .post(self.endpoint("/api/text-to-speech"))
            .json(&TextRequest { text })
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(audio_url)
    }
}
