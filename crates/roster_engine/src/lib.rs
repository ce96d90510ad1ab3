//! Roster engine: record store client and effect execution.
mod engine;
mod store;
mod types;

pub use engine::EngineHandle;
pub use store::{RecordStore, ReqwestRecordStore, StoreSettings, DEFAULT_COLLECTION_PATH};
pub use types::{ChannelEventSink, EngineEvent, EventSink, StoreError};
