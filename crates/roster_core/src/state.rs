use std::fmt;

use crate::view_model::{AppViewModel, Control, RecordRowView};
use crate::{DraftForm, Record, RecordId};

/// Token attached to every issued request so late answers can be matched.
pub type RequestId = u64;

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const MSG_SAVE_FAILED: &str = "Failed to save user";
pub const MSG_SAVE_TRANSPORT: &str = "Failed to save user. Please check console for more details.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete user(s)";

/// Why a request to the record store did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The server answered with a non-success status.
    Rejected { status: u16, reason: String },
    /// The request never completed or its body could not be read.
    Transport { message: String },
}

impl RequestFailure {
    pub fn is_rejected(&self) -> bool {
        matches!(self, RequestFailure::Rejected { .. })
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Rejected { status, reason } if reason.is_empty() => {
                write!(f, "server rejected request with status {status}")
            }
            RequestFailure::Rejected { status, reason } => {
                write!(f, "server rejected request with status {status}: {reason}")
            }
            RequestFailure::Transport { message } => write!(f, "transport error: {message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Rejected,
    Transport,
}

/// Blocking, user-visible message. Input is ignored until it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Ids marked for batch deletion, kept in the order they were first ticked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: Vec<RecordId>,
}

impl Selection {
    /// Adds `id` if absent, removes it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingDelete {
    pub(crate) request: RequestId,
    /// Ids sent with the request; the commit removes exactly these.
    pub(crate) ids: Vec<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    listing: Vec<Record>,
    draft: DraftForm,
    selection: Selection,
    notice: Option<Notice>,
    load: LoadState,
    load_request: Option<RequestId>,
    pending_create: Option<RequestId>,
    pending_delete: Option<PendingDelete>,
    last_request: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .listing
            .iter()
            .map(|record| RecordRowView {
                id: record.id.clone(),
                id_label: record.id.to_string(),
                name: record.name.clone(),
                phone_number: record.phone_number.clone(),
                email: record.email.clone(),
                hobbies: record.hobbies.clone(),
                selected: self.selection.contains(&record.id),
                update: Control::RowUpdate.availability(),
                delete: Control::RowDelete.availability(),
            })
            .collect();

        AppViewModel {
            draft: self.draft.clone(),
            rows,
            selected_count: self.selection.len(),
            notice: self.notice.clone(),
            load: self.load,
            saving: self.pending_create.is_some(),
            deleting: self.pending_delete.is_some(),
            send: Control::Send.availability(),
        }
    }

    pub fn listing(&self) -> &[Record] {
        &self.listing
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_creating(&self) -> bool {
        self.pending_create.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Returns whether anything visible changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }

    pub(crate) fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notice(&mut self) -> bool {
        let had_notice = self.notice.take().is_some();
        if had_notice {
            self.mark_dirty();
        }
        had_notice
    }

    pub(crate) fn draft_mut(&mut self) -> &mut DraftForm {
        self.mark_dirty();
        &mut self.draft
    }

    pub(crate) fn toggle_selected(&mut self, id: RecordId) -> Option<bool> {
        if !self.listing.iter().any(|record| record.id == id) {
            return None;
        }
        self.mark_dirty();
        Some(self.selection.toggle(id))
    }

    pub(crate) fn begin_load(&mut self, request: RequestId) {
        self.load = LoadState::Pending;
        self.load_request = Some(request);
        self.mark_dirty();
    }

    /// Ends the outstanding load if `request` matches it.
    pub(crate) fn take_load(&mut self, request: RequestId) -> bool {
        if self.load_request == Some(request) {
            self.load_request = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn finish_load(&mut self, records: Option<Vec<Record>>) {
        match records {
            Some(records) => {
                self.listing = records;
                self.selection.clear();
                self.load = LoadState::Loaded;
            }
            None => self.load = LoadState::Failed,
        }
        self.mark_dirty();
    }

    pub(crate) fn begin_create(&mut self, request: RequestId) {
        self.pending_create = Some(request);
        self.mark_dirty();
    }

    /// Ends the outstanding create if `request` matches it.
    pub(crate) fn take_create(&mut self, request: RequestId) -> bool {
        if self.pending_create == Some(request) {
            self.pending_create = None;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn append_record(&mut self, record: Record) {
        self.listing.push(record);
        self.mark_dirty();
    }

    /// Records the in-flight delete and returns the ids to send.
    pub(crate) fn begin_delete(&mut self, request: RequestId) -> Vec<RecordId> {
        let ids = self.selection.ids().to_vec();
        self.pending_delete = Some(PendingDelete {
            request,
            ids: ids.clone(),
        });
        self.mark_dirty();
        ids
    }

    /// Ends the outstanding delete if `request` matches it.
    pub(crate) fn take_delete(&mut self, request: RequestId) -> Option<PendingDelete> {
        match &self.pending_delete {
            Some(pending) if pending.request == request => {
                self.mark_dirty();
                self.pending_delete.take()
            }
            _ => None,
        }
    }

    pub(crate) fn commit_delete(&mut self, pending: PendingDelete) {
        // Filter the listing as it is now: a load or create may have landed
        // while the delete was outstanding.
        self.listing.retain(|record| !pending.ids.contains(&record.id));
        self.selection.clear();
        self.mark_dirty();
    }
}
