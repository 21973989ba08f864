use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::SessionConfig;
use crate::api::ChatApi;
use crate::capture::{CaptureBackend, CaptureBackendFactory, MediaSource};
use crate::debounce::Debouncer;
use crate::error::TurnError;
use crate::platform::{self, HostRuntime};
use crate::scenario::Scenario;
use crate::transcript::{Transcript, TranscriptEntry};

/// Where the session currently is in a turn.
///
/// `Recording` and the three processing phases together cover one user
/// turn; every path through a turn ends back at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    Idle,
    Recording,
    Transcribing,
    Responding,
    Synthesizing,
}

impl TurnPhase {
    /// Whether the pipeline is running (recording stopped, result pending).
    pub fn is_processing(&self) -> bool {
        matches!(
            self,
            TurnPhase::Transcribing | TurnPhase::Responding | TurnPhase::Synthesizing
        )
    }
}

/// The active recording, alive from a successful start until stop.
/// At most one exists per session.
struct ActiveTurn {
    id: Uuid,
    backend: Option<Box<dyn CaptureBackend>>,
}

/// A chat session for one scenario: owns the per-turn state machine, the
/// capture backend of the active recording, and the conversation
/// transcript.
///
/// One turn: toggle starts a recording; the next toggle stops it and runs
/// the strictly-ordered pipeline (speech-to-text, AI response,
/// text-to-speech), appending the user and AI transcript entries. A
/// failure at any stage logs, leaves already-committed entries in place,
/// and returns the session to idle.
pub struct ChatSession {
    config: SessionConfig,
    host: Arc<dyn HostRuntime>,
    media: Arc<dyn MediaSource>,
    api: Arc<dyn ChatApi>,

    /// Exclusive turn driver. Held across a full toggle operation;
    /// `try_lock` makes a trigger arriving mid-transition a no-op.
    turn: tokio::sync::Mutex<ActiveTurn>,

    phase: Mutex<TurnPhase>,
    transcript: Mutex<Transcript>,
}

impl ChatSession {
    pub fn new(
        config: SessionConfig,
        host: Arc<dyn HostRuntime>,
        media: Arc<dyn MediaSource>,
        api: Arc<dyn ChatApi>,
    ) -> Self {
        info!(scenario = %config.scenario.name, "chat session created");
        Self {
            config,
            host,
            media,
            api,
            turn: tokio::sync::Mutex::new(ActiveTurn {
                id: Uuid::nil(),
                backend: None,
            }),
            phase: Mutex::new(TurnPhase::Idle),
            transcript: Mutex::new(Transcript::new()),
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.config.scenario
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> TurnPhase {
        *self.phase.lock()
    }

    pub fn is_recording(&self) -> bool {
        self.phase() == TurnPhase::Recording
    }

    /// Snapshot of the transcript so far.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().entries().to_vec()
    }

    /// The record-button toggle: starts a recording from idle, stops and
    /// processes from recording. A toggle while a turn transition or the
    /// pipeline is in flight is ignored; the phase field is the
    /// authoritative guard against a second concurrent capture session.
    pub async fn toggle(&self) -> Result<(), TurnError> {
        let Ok(mut turn) = self.turn.try_lock() else {
            warn!("record toggle ignored: turn already in flight");
            return Ok(());
        };

        match self.phase() {
            TurnPhase::Idle => self.start_recording(&mut turn).await,
            TurnPhase::Recording => self.stop_and_respond(&mut turn).await,
            other => {
                warn!(phase = ?other, "record toggle ignored");
                Ok(())
            }
        }
    }

    async fn start_recording(&self, turn: &mut ActiveTurn) -> Result<(), TurnError> {
        let source = platform::detect(self.host.as_ref()).await;
        let mut backend =
            CaptureBackendFactory::create(source, Arc::clone(&self.host), Arc::clone(&self.media));

        if let Err(e) = backend.start().await {
            error!(error = %e, source = ?source, "failed to start recording");
            self.set_phase(TurnPhase::Idle);
            return Err(e);
        }

        turn.id = Uuid::new_v4();
        turn.backend = Some(backend);
        self.set_phase(TurnPhase::Recording);
        info!(turn = %turn.id, source = ?source, "recording started");
        Ok(())
    }

    async fn stop_and_respond(&self, turn: &mut ActiveTurn) -> Result<(), TurnError> {
        let Some(mut backend) = turn.backend.take() else {
            self.set_phase(TurnPhase::Idle);
            return Err(TurnError::NotRecording);
        };

        self.set_phase(TurnPhase::Transcribing);
        let result = self.run_pipeline(turn.id, backend.as_mut()).await;
        self.set_phase(TurnPhase::Idle);

        if let Err(e) = &result {
            error!(turn = %turn.id, error = %e, "turn failed");
        }
        result
    }

    /// The strictly-ordered pipeline for one turn. No stage begins before
    /// the previous one's result is available; no stage retries. Appends
    /// already committed (the user entry) stay if a later stage fails.
    async fn run_pipeline(
        &self,
        turn_id: Uuid,
        backend: &mut dyn CaptureBackend,
    ) -> Result<(), TurnError> {
        let audio = backend.stop().await?;
        info!(turn = %turn_id, bytes = audio.len(), "capture complete");

        let user_text = self
            .api
            .speech_to_text(&audio, Some(self.config.scenario.id))
            .await?;
        self.transcript.lock().push_user(user_text.clone());
        info!(turn = %turn_id, chars = user_text.len(), "speech transcribed");

        self.set_phase(TurnPhase::Responding);
        let reply = self.api.get_ai_response(&user_text).await?;

        self.set_phase(TurnPhase::Synthesizing);
        let audio_url = self.api.text_to_speech(&reply.response).await?;

        self.transcript.lock().push_ai(reply.response, Some(audio_url));
        info!(turn = %turn_id, "turn complete");
        Ok(())
    }

    fn set_phase(&self, next: TurnPhase) {
        let mut phase = self.phase.lock();
        if *phase != next {
            debug!(from = ?*phase, to = ?next, "phase");
        }
        *phase = next;
    }
}

/// The presentation layer's record button: a debounced front for
/// [`ChatSession::toggle`]. Rapid presses within the session's debounce
/// window collapse to the last one, so a burst of clicks produces exactly
/// one start-or-stop action.
pub struct RecordTrigger {
    session: Arc<ChatSession>,
    debouncer: Debouncer,
}

impl RecordTrigger {
    pub fn new(session: Arc<ChatSession>) -> Self {
        let debouncer = Debouncer::new(session.config().debounce_window);
        Self { session, debouncer }
    }

    /// Register a press of the record button.
    pub fn press(&self) {
        let session = Arc::clone(&self.session);
        self.debouncer.trigger(async move {
            if let Err(e) = session.toggle().await {
                error!(error = %e, "record toggle failed");
            }
        });
    }
}
