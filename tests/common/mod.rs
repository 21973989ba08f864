// Mock collaborators for the capture/session tests: a host runtime, a
// webview media source, and a scripted remote pipeline.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use talkturn::{AiReply, ChatApi, HostRuntime, MediaSource, TurnError};

/// Host runtime mock. `platform_name: None` makes every probe fail, the
/// way a plain browser session has no host to talk to.
pub struct MockHost {
    platform_name: Option<String>,
    recording_path: Mutex<Option<PathBuf>>,
    pub start_calls: AtomicUsize,
    pub stop_calls: AtomicUsize,
}

impl MockHost {
    pub fn absent() -> Self {
        Self {
            platform_name: None,
            recording_path: Mutex::new(None),
            start_calls: AtomicUsize::new(0),
            stop_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_platform(name: &str) -> Self {
        Self {
            platform_name: Some(name.to_string()),
            recording_path: Mutex::new(None),
            start_calls: AtomicUsize::new(0),
            stop_calls: AtomicUsize::new(0),
        }
    }

    /// Set the file `stop_recording` will hand back.
    pub fn set_recording(&self, path: PathBuf) {
        *self.recording_path.lock().unwrap() = Some(path);
    }
}

#[async_trait]
impl HostRuntime for MockHost {
    async fn platform(&self) -> Result<String, TurnError> {
        match &self.platform_name {
            Some(name) => Ok(name.clone()),
            None => Err(TurnError::HostUnavailable("no host".to_string())),
        }
    }

    async fn start_recording(&self) -> Result<(), TurnError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        if self.platform_name.is_none() {
            return Err(TurnError::HostUnavailable("no host".to_string()));
        }
        Ok(())
    }

    async fn stop_recording(&self) -> Result<PathBuf, TurnError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.recording_path
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| TurnError::HostUnavailable("no recording".to_string()))
    }
}

/// Media source mock that delivers a fixed set of chunks in order.
pub struct MockMedia {
    chunks: Vec<Vec<u8>>,
    deny_permission: bool,
    no_device: bool,
    pub open_calls: AtomicUsize,
    pub close_calls: AtomicUsize,
}

impl MockMedia {
    pub fn with_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks,
            deny_permission: false,
            no_device: false,
            open_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            chunks: Vec::new(),
            deny_permission: true,
            no_device: false,
            open_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
        }
    }

    pub fn without_device() -> Self {
        Self {
            chunks: Vec::new(),
            deny_permission: false,
            no_device: true,
            open_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MediaSource for MockMedia {
    async fn open(&self) -> Result<mpsc::Receiver<Vec<u8>>, TurnError> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        if self.deny_permission {
            return Err(TurnError::PermissionDenied);
        }
        if self.no_device {
            return Err(TurnError::DeviceUnavailable);
        }

        let (tx, rx) = mpsc::channel(self.chunks.len().max(1));
        for chunk in &self.chunks {
            tx.send(chunk.clone()).await.expect("channel has capacity");
        }
        Ok(rx)
    }

    async fn close(&self) -> Result<(), TurnError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Scripted remote pipeline. Each operation pops the next scripted result;
/// the `calls` log records invocation order across operations.
pub struct MockApi {
    stt: Mutex<VecDeque<Result<String, TurnError>>>,
    ai: Mutex<VecDeque<Result<AiReply, TurnError>>>,
    tts: Mutex<VecDeque<Result<String, TurnError>>>,
    stt_delay: Mutex<Option<Duration>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            stt: Mutex::new(VecDeque::new()),
            ai: Mutex::new(VecDeque::new()),
            tts: Mutex::new(VecDeque::new()),
            stt_delay: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All three stages succeed with the given results.
    pub fn happy(stt: &str, ai: &str, tts: &str) -> Self {
        let api = Self::new();
        api.script_stt(Ok(stt.to_string()));
        api.script_ai(Ok(AiReply {
            response: ai.to_string(),
        }));
        api.script_tts(Ok(tts.to_string()));
        api
    }

    pub fn script_stt(&self, result: Result<String, TurnError>) {
        self.stt.lock().unwrap().push_back(result);
    }

    pub fn script_ai(&self, result: Result<AiReply, TurnError>) {
        self.ai.lock().unwrap().push_back(result);
    }

    pub fn script_tts(&self, result: Result<String, TurnError>) {
        self.tts.lock().unwrap().push_back(result);
    }

    /// Make the speech-to-text stage hang for `delay` before answering.
    pub fn delay_stt(&self, delay: Duration) {
        *self.stt_delay.lock().unwrap() = Some(delay);
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Simulate a stage failure without a live endpoint.
    pub fn stage_failure(message: &str) -> TurnError {
        TurnError::Storage(std::io::Error::other(message.to_string()))
    }
}

#[async_trait]
impl ChatApi for MockApi {
    async fn speech_to_text(
        &self,
        _audio: &[u8],
        scenario_id: Option<u32>,
    ) -> Result<String, TurnError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("stt:{}", scenario_id.map_or(0, |id| id)));
        let delay = *self.stt_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.stt.lock().unwrap().pop_front().expect("unscripted stt call")
    }

    async fn get_ai_response(&self, text: &str) -> Result<AiReply, TurnError> {
        self.calls.lock().unwrap().push(format!("ai:{text}"));
        self.ai.lock().unwrap().pop_front().expect("unscripted ai call")
    }

    async fn text_to_speech(&self, text: &str) -> Result<String, TurnError> {
        self.calls.lock().unwrap().push(format!("tts:{text}"));
        self.tts.lock().unwrap().pop_front().expect("unscripted tts call")
    }
}
