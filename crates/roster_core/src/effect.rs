use crate::{NewRecord, RecordId, RequestId};

/// Requests the shell must issue against the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAll {
        request: RequestId,
    },
    CreateRecord {
        request: RequestId,
        record: NewRecord,
    },
    DeleteRecords {
        request: RequestId,
        ids: Vec<RecordId>,
    },
}

impl Effect {
    pub fn request(&self) -> RequestId {
        match self {
            Effect::FetchAll { request }
            | Effect::CreateRecord { request, .. }
            | Effect::DeleteRecords { request, .. } => *request,
        }
    }
}
