use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::TurnError;

use super::backend::{CaptureBackend, CaptureSource};

/// The webview's media-recording primitive.
///
/// `open` requests microphone access and starts streaming captured chunks
/// over the returned channel; denial surfaces as `PermissionDenied` and a
/// missing device as `DeviceUnavailable`. `close` stops the stream; the
/// channel closes after the final chunk has been delivered.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn open(&self) -> Result<mpsc::Receiver<Vec<u8>>, TurnError>;
    async fn close(&self) -> Result<(), TurnError>;
}

/// Capture variant backed by the webview media API.
///
/// Chunks are buffered in arrival order and concatenated into one blob at
/// stop. The chunk channel is created fresh for every recording, so the
/// accumulator of one turn is never reused by the next.
pub struct BrowserCapture {
    media: Arc<dyn MediaSource>,
    chunks: Option<mpsc::Receiver<Vec<u8>>>,
}

impl BrowserCapture {
    pub fn new(media: Arc<dyn MediaSource>) -> Self {
        Self {
            media,
            chunks: None,
        }
    }
}

#[async_trait]
impl CaptureBackend for BrowserCapture {
    async fn start(&mut self) -> Result<(), TurnError> {
        let rx = self.media.open().await?;
        self.chunks = Some(rx);
        debug!("media stream opened");
        Ok(())
    }

    async fn stop(&mut self) -> Result<Vec<u8>, TurnError> {
        let mut rx = self.chunks.take().ok_or(TurnError::NotRecording)?;

        self.media.close().await?;

        let mut audio = Vec::new();
        let mut chunk_count = 0usize;
        while let Some(chunk) = rx.recv().await {
            audio.extend_from_slice(&chunk);
            chunk_count += 1;
        }

        debug!(chunks = chunk_count, bytes = audio.len(), "media stream drained");
        Ok(audio)
    }

    fn source(&self) -> CaptureSource {
        CaptureSource::Browser
    }
}
