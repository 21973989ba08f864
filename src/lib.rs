pub mod api;
pub mod capture;
pub mod config;
pub mod debounce;
pub mod error;
pub mod platform;
pub mod scenario;
pub mod session;
pub mod transcript;

pub use api::{AiReply, ChatApi, HttpChatApi};
pub use capture::{
    BrowserCapture, CaptureBackend, CaptureBackendFactory, CaptureSource, MediaSource,
    NativeCapture,
};
pub use config::Config;
pub use debounce::Debouncer;
pub use error::TurnError;
pub use platform::{detect, HostRuntime};
pub use scenario::Scenario;
pub use session::{ChatSession, RecordTrigger, SessionConfig, TurnPhase};
pub use transcript::{Role, Transcript, TranscriptEntry};
