use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::TurnError;
use crate::platform::HostRuntime;

use super::backend::{CaptureBackend, CaptureSource};

/// Capture variant that delegates recording to the native host runtime.
///
/// The host owns the audio device; `start` is fire-and-forget. On stop the
/// host finalizes its recording into temp storage and returns the file
/// path, which we read back into memory. That file handoff is the explicit
/// audio-return contract for the native path.
pub struct NativeCapture {
    host: Arc<dyn HostRuntime>,
    started: bool,
}

impl NativeCapture {
    pub fn new(host: Arc<dyn HostRuntime>) -> Self {
        Self {
            host,
            started: false,
        }
    }
}

#[async_trait]
impl CaptureBackend for NativeCapture {
    async fn start(&mut self) -> Result<(), TurnError> {
        self.host.start_recording().await?;
        self.started = true;
        debug!("host recording started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<Vec<u8>, TurnError> {
        if !self.started {
            return Err(TurnError::NotRecording);
        }
        self.started = false;

        let path = self.host.stop_recording().await?;
        let audio = tokio::fs::read(&path).await?;
        debug!(path = %path.display(), bytes = audio.len(), "host recording read back");
        Ok(audio)
    }

    fn source(&self) -> CaptureSource {
        CaptureSource::Native
    }
}
