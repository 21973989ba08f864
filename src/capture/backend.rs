use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TurnError;
use crate::platform::HostRuntime;

use super::browser::{BrowserCapture, MediaSource};
use super::native::NativeCapture;

/// Which capture variant a recording uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureSource {
    /// The native host runtime records on our behalf.
    Native,
    /// The embedding webview's media API records in-process.
    Browser,
}

/// Audio capture backend trait.
///
/// Variants:
/// - Native: delegates start/stop to the host runtime's command surface
/// - Browser: buffers media-stream chunks delivered over a channel
///
/// A backend instance is a single recording session: created at start,
/// consumed at stop. `stop` returns the complete captured audio as one
/// opaque byte blob.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Start capturing audio.
    async fn start(&mut self) -> Result<(), TurnError>;

    /// Stop capturing and return the recorded bytes.
    async fn stop(&mut self) -> Result<Vec<u8>, TurnError>;

    /// Which variant this backend is, for logging.
    fn source(&self) -> CaptureSource;
}

/// Capture backend factory.
pub struct CaptureBackendFactory;

impl CaptureBackendFactory {
    /// Create the backend for the detected capture source.
    pub fn create(
        source: CaptureSource,
        host: Arc<dyn HostRuntime>,
        media: Arc<dyn MediaSource>,
    ) -> Box<dyn CaptureBackend> {
        match source {
            CaptureSource::Native => Box::new(NativeCapture::new(host)),
            CaptureSource::Browser => Box::new(BrowserCapture::new(media)),
        }
    }
}
