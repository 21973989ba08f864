pub mod backend;
pub mod browser;
pub mod native;

pub use backend::{CaptureBackend, CaptureBackendFactory, CaptureSource};
pub use browser::{BrowserCapture, MediaSource};
pub use native::NativeCapture;
