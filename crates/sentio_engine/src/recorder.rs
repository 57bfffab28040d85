//! Persistence seam for recognized states.
//!
//! The engine hands every recognized state to an [`EmotionRecorder`]. A host
//! wires this to whatever store it has; failures are reported back but never
//! break recognition.

use sentio_core::EmotionRecord;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("recorder is closed")]
    Closed,
    #[error("recorder queue is full")]
    Full,
    #[error("recorder backend failed: {0}")]
    Backend(String),
}

pub trait EmotionRecorder: Send + Sync {
    fn record(&self, record: &EmotionRecord) -> Result<(), RecordError>;
}

/// Drops everything. Default when no store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl EmotionRecorder for NoopRecorder {
    fn record(&self, _record: &EmotionRecord) -> Result<(), RecordError> {
        Ok(())
    }
}

/// Forwards records into a bounded tokio channel without blocking the caller.
#[derive(Debug, Clone)]
pub struct ChannelRecorder {
    tx: mpsc::Sender<EmotionRecord>,
}

impl ChannelRecorder {
    pub fn new(tx: mpsc::Sender<EmotionRecord>) -> Self {
        Self { tx }
    }

    /// Recorder plus the receiving end for a drain task.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<EmotionRecord>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self::new(tx), rx)
    }
}

impl EmotionRecorder for ChannelRecorder {
    fn record(&self, record: &EmotionRecord) -> Result<(), RecordError> {
        self.tx.try_send(record.clone()).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => RecordError::Full,
            mpsc::error::TrySendError::Closed(_) => RecordError::Closed,
        })
    }
}
