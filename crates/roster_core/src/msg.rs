use crate::{Field, Record, RecordId, RequestFailure, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was shown for the first time.
    Mounted,
    /// User typed into one of the form inputs.
    FieldEdited { field: Field, value: String },
    /// User clicked Save.
    SaveClicked,
    /// User clicked the checkbox of a row.
    RowToggled(RecordId),
    /// User clicked the Delete button below the table.
    DeleteClicked,
    /// User clicked Send.
    SendClicked,
    /// User clicked the Update button of a row.
    RowUpdateClicked(RecordId),
    /// User clicked the Delete button of a row.
    RowDeleteClicked(RecordId),
    /// User acknowledged the blocking notice.
    NoticeDismissed,
    /// Backend answered the fetch-all request.
    ListFinished {
        request: RequestId,
        result: Result<Vec<Record>, RequestFailure>,
    },
    /// Backend answered a create request.
    CreateFinished {
        request: RequestId,
        result: Result<Record, RequestFailure>,
    },
    /// Backend answered a delete request.
    DeleteFinished {
        request: RequestId,
        result: Result<(), RequestFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
