use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use roster_core::{NewRecord, RecordId, RequestId};
use roster_logging::{roster_debug, roster_warn};

use crate::store::{RecordStore, ReqwestRecordStore, StoreSettings};
use crate::{EngineEvent, EventSink, StoreError};

enum EngineCommand {
    List {
        request: RequestId,
    },
    Create {
        request: RequestId,
        record: NewRecord,
    },
    Delete {
        request: RequestId,
        ids: Vec<RecordId>,
    },
}

/// Runs store requests on a background tokio runtime and reports each
/// completion to an [`EventSink`].
///
/// Dropping the handle stops the worker thread; requests still in flight are
/// abandoned without an event.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(store: Arc<dyn RecordStore>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("roster-engine")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("roster-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let store = store.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = handle_command(store.as_ref(), command).await;
                        roster_debug!("Request {} finished", event.request());
                        sink.emit(event);
                    });
                }
                roster_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    /// Builds a handle backed by [`ReqwestRecordStore`].
    pub fn with_settings(
        settings: StoreSettings,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, StoreError> {
        let store = ReqwestRecordStore::new(settings)?;
        Self::new(Arc::new(store), sink).map_err(|err| StoreError::Network(err.to_string()))
    }

    pub fn list(&self, request: RequestId) {
        self.send(EngineCommand::List { request });
    }

    pub fn create(&self, request: RequestId, record: NewRecord) {
        self.send(EngineCommand::Create { request, record });
    }

    pub fn delete(&self, request: RequestId, ids: Vec<RecordId>) {
        self.send(EngineCommand::Delete { request, ids });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            roster_warn!("Engine worker is gone; request dropped");
        }
    }
}

async fn handle_command(store: &dyn RecordStore, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::List { request } => EngineEvent::Listed {
            request,
            result: store.list().await,
        },
        EngineCommand::Create { request, record } => EngineEvent::Created {
            request,
            result: store.create(&record).await,
        },
        EngineCommand::Delete { request, ids } => EngineEvent::Deleted {
            request,
            result: store.delete(&ids).await,
        },
    }
}
