//! Narration dispatch over a tokio channel
//!
//! The session pushes requests synchronously; a background task hands them
//! to the speech backend as `voice_synthesize` payloads.

use expression::{NarrationRequest, NarrationSink};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Sink feeding the dispatcher channel
pub struct ChannelSink {
    sender: mpsc::Sender<NarrationRequest>,
}

impl NarrationSink for ChannelSink {
    fn narrate(&mut self, request: NarrationRequest) {
        if let Err(e) = self.sender.try_send(request) {
            warn!("Narration request dropped: {}", e);
        }
    }
}

/// Create a bounded narration channel
pub fn channel(capacity: usize) -> (ChannelSink, mpsc::Receiver<NarrationRequest>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (ChannelSink { sender }, receiver)
}

/// Drain requests until every sink is dropped; resolves to the number handled
pub fn spawn_dispatcher(mut receiver: mpsc::Receiver<NarrationRequest>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut dispatched = 0;
        while let Some(request) = receiver.recv().await {
            match serde_json::to_string(&request) {
                Ok(payload) => info!("voice_synthesize {}", payload),
                Err(e) => warn!("Unserializable narration request: {}", e),
            }
            dispatched += 1;
        }
        dispatched
    })
}
