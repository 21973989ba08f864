use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::capture::CaptureSource;
use crate::error::TurnError;

/// Command surface of the native host runtime the app may be embedded in.
///
/// The host owns the audio device: `start_recording` is fire-and-forget,
/// and `stop_recording` hands back the path of the finalized recording in
/// temp storage. Embedders outside a host runtime implement `platform` as
/// a failure and the capture layer degrades to the browser variant.
#[async_trait]
pub trait HostRuntime: Send + Sync {
    /// Host platform identity (e.g. "macos"). Absent or unidentifiable
    /// hosts fail here or report "unknown".
    async fn platform(&self) -> Result<String, TurnError>;

    /// Begin capturing on the host's audio device.
    async fn start_recording(&self) -> Result<(), TurnError>;

    /// Stop capturing; returns the path of the recorded audio file.
    async fn stop_recording(&self) -> Result<PathBuf, TurnError>;
}

/// Resolve which capture variant to use for the next recording.
///
/// Never fails: any probe error, an empty identity, or the "unknown"
/// sentinel all degrade to browser capture. Probes fresh on every call.
pub async fn detect(host: &dyn HostRuntime) -> CaptureSource {
    match host.platform().await {
        Ok(name) if !name.is_empty() && name != "unknown" => {
            debug!(platform = %name, "host runtime present, using native capture");
            CaptureSource::Native
        }
        Ok(_) => {
            debug!("host reported no platform identity, using browser capture");
            CaptureSource::Browser
        }
        Err(e) => {
            debug!(error = %e, "host runtime probe failed, using browser capture");
            CaptureSource::Browser
        }
    }
}
