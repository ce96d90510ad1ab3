use std::sync::mpsc;

use roster_core::{Record, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {status}: {reason}")]
    Rejected { status: u16, reason: String },
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl StoreError {
    /// True when the server answered with a non-success status.
    pub fn is_rejected(&self) -> bool {
        matches!(self, StoreError::Rejected { .. })
    }
}

/// Completion of one store request, tagged with the id it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Listed {
        request: RequestId,
        result: Result<Vec<Record>, StoreError>,
    },
    Created {
        request: RequestId,
        result: Result<Record, StoreError>,
    },
    Deleted {
        request: RequestId,
        result: Result<(), StoreError>,
    },
}

impl EngineEvent {
    pub fn request(&self) -> RequestId {
        match self {
            EngineEvent::Listed { request, .. }
            | EngineEvent::Created { request, .. }
            | EngineEvent::Deleted { request, .. } => *request,
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}
