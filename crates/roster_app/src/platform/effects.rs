use std::sync::{mpsc, Arc};

use roster_core::{Effect, Msg, RequestFailure};
use roster_engine::{EngineEvent, EngineHandle, EventSink, StoreError, StoreSettings};
use roster_logging::{roster_debug, roster_info};

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: StoreSettings,
        msg_tx: mpsc::Sender<Msg>,
        wake: impl Fn() + Send + Sync + 'static,
    ) -> Result<Self, StoreError> {
        roster_info!("Record store at {}", settings.collection_url()?);
        let sink = MsgSink {
            msg_tx,
            wake: Box::new(wake),
        };
        let engine = EngineHandle::with_settings(settings, Arc::new(sink))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAll { request } => {
                    roster_debug!("FetchAll request={}", request);
                    self.engine.list(request);
                }
                Effect::CreateRecord { request, record } => {
                    roster_debug!("CreateRecord request={}", request);
                    self.engine.create(request, record);
                }
                Effect::DeleteRecords { request, ids } => {
                    roster_debug!("DeleteRecords request={} ids={}", request, ids.len());
                    self.engine.delete(request, ids);
                }
            }
        }
    }
}

struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
    wake: Box<dyn Fn() + Send + Sync>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if self.msg_tx.send(map_event(event)).is_ok() {
            (self.wake)();
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Listed { request, result } => Msg::ListFinished {
            request,
            result: result.map_err(map_failure),
        },
        EngineEvent::Created { request, result } => Msg::CreateFinished {
            request,
            result: result.map_err(map_failure),
        },
        EngineEvent::Deleted { request, result } => Msg::DeleteFinished {
            request,
            result: result.map_err(map_failure),
        },
    }
}

/// Rejections keep their status; everything else is a transport failure.
fn map_failure(err: StoreError) -> RequestFailure {
    match err {
        StoreError::Rejected { status, reason } => RequestFailure::Rejected { status, reason },
        other => RequestFailure::Transport {
            message: other.to_string(),
        },
    }
}
