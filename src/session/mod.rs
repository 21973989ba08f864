pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::{ChatSession, RecordTrigger, TurnPhase};
