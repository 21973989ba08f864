use thiserror::Error;

/// Failure taxonomy for a conversation turn.
///
/// Every fallible step in the capture/dispatch pipeline surfaces one of
/// these variants; the session catches them at the turn boundary, logs,
/// and returns the state machine to idle.
#[derive(Debug, Error)]
pub enum TurnError {
    /// Microphone access was refused by the user or platform.
    #[error("microphone permission denied")]
    PermissionDenied,

    /// No usable audio capture device is present.
    #[error("no audio capture device available")]
    DeviceUnavailable,

    /// A host-runtime command failed or the host is not present.
    #[error("host runtime unavailable: {0}")]
    HostUnavailable(String),

    /// Stop was requested but no recording is in progress.
    #[error("no recording in progress")]
    NotRecording,

    /// A remote pipeline request failed (transport error or non-success status).
    #[error("remote pipeline request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A temp-storage read or write failed.
    #[error("temp storage failed: {0}")]
    Storage(#[from] std::io::Error),
}
