//! Roster core: pure state machine and view-model helpers for the record manager view.
mod draft;
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use draft::{DraftForm, Field};
pub use effect::Effect;
pub use msg::Msg;
pub use record::{NewRecord, Record, RecordId};
pub use state::{
    AppState, LoadState, Notice, NoticeKind, RequestFailure, RequestId, Selection,
    MSG_DELETE_FAILED, MSG_FILL_ALL_FIELDS, MSG_SAVE_FAILED, MSG_SAVE_TRANSPORT,
};
pub use update::update;
pub use view_model::{AppViewModel, Availability, Control, RecordRowView};
