//! Edge-triggered narration
//!
//! The display message is re-resolved on every cycle, but it is only handed
//! to speech synthesis when it changes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default mascot voice
pub const DEFAULT_SPEAKER: u32 = 3;

/// Whether the synthesizer may serve cached audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    #[default]
    Use,
    Bypass,
}

/// Queue priority on the speech backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationPriority {
    Low,
    #[default]
    Normal,
    High,
}

/// One request to the speech dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationRequest {
    pub text: String,
    pub speaker: u32,
    #[serde(default)]
    pub priority: NarrationPriority,
    pub cache: CachePolicy,
}

/// Receiver of narration requests
pub trait NarrationSink {
    fn narrate(&mut self, request: NarrationRequest);
}

impl<F> NarrationSink for F
where
    F: FnMut(NarrationRequest),
{
    fn narrate(&mut self, request: NarrationRequest) {
        self(request)
    }
}

/// Forwards a message to its sink only when it differs from the last one.
///
/// `observe` takes `&mut self`, so one narrator cannot be evaluated
/// re-entrantly.
pub struct Narrator<S> {
    sink: S,
    speaker: u32,
    cache: CachePolicy,
    last_message: Option<String>,
}

impl<S: NarrationSink> Narrator<S> {
    /// Create a narrator with the default voice
    pub fn new(sink: S) -> Self {
        Self::with_voice(sink, DEFAULT_SPEAKER, CachePolicy::default())
    }

    /// Create a narrator with an explicit voice and cache policy
    pub fn with_voice(sink: S, speaker: u32, cache: CachePolicy) -> Self {
        Self {
            sink,
            speaker,
            cache,
            last_message: None,
        }
    }

    /// Feed this cycle's message; returns true when narration fired
    pub fn observe(&mut self, message: &str) -> bool {
        if self.last_message.as_deref() == Some(message) {
            debug!("Narration skipped: message unchanged");
            return false;
        }
        self.last_message = Some(message.to_string());

        let text = message.trim();
        if text.is_empty() {
            debug!("Narration skipped: empty message");
            return false;
        }

        info!("Narrating (speaker {}): {}", self.speaker, text);
        self.sink.narrate(NarrationRequest {
            text: text.to_string(),
            speaker: self.speaker,
            priority: NarrationPriority::Normal,
            cache: self.cache,
        });
        true
    }

    /// Last message seen
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Forget the last message so the next one narrates again
    pub fn reset(&mut self) {
        self.last_message = None;
    }

    /// Sink reference
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the narrator and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
