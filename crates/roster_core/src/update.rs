use roster_logging::{roster_debug, roster_error, roster_info, roster_warn};

use crate::{
    AppState, Control, Effect, LoadState, Msg, Notice, NoticeKind, Record, RecordId,
    RequestFailure, RequestId, MSG_DELETE_FAILED, MSG_FILL_ALL_FIELDS, MSG_SAVE_FAILED,
    MSG_SAVE_TRANSPORT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // A notice blocks the form until it is acknowledged; answers from the
    // backend still land.
    if state.notice().is_some() && is_user_input(&msg) {
        roster_debug!("Ignoring {:?} while a notice is open", msg);
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted => {
            if state.load_state() != LoadState::NotStarted {
                return (state, Vec::new());
            }
            let request = state.next_request();
            state.begin_load(request);
            vec![Effect::FetchAll { request }]
        }
        Msg::FieldEdited { field, value } => {
            state.draft_mut().set(field, value);
            Vec::new()
        }
        Msg::SaveClicked => save(&mut state),
        Msg::RowToggled(id) => {
            if state.toggle_selected(id.clone()).is_none() {
                roster_debug!("Ignoring selection toggle for unknown record {}", id);
            }
            Vec::new()
        }
        Msg::DeleteClicked => delete(&mut state),
        Msg::SendClicked => not_implemented(Control::Send, None),
        Msg::RowUpdateClicked(id) => not_implemented(Control::RowUpdate, Some(&id)),
        Msg::RowDeleteClicked(id) => not_implemented(Control::RowDelete, Some(&id)),
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::ListFinished { request, result } => {
            list_finished(&mut state, request, result);
            Vec::new()
        }
        Msg::CreateFinished { request, result } => {
            create_finished(&mut state, request, result);
            Vec::new()
        }
        Msg::DeleteFinished { request, result } => {
            delete_finished(&mut state, request, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_user_input(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::FieldEdited { .. }
            | Msg::SaveClicked
            | Msg::RowToggled(_)
            | Msg::DeleteClicked
            | Msg::SendClicked
            | Msg::RowUpdateClicked(_)
            | Msg::RowDeleteClicked(_)
    )
}

fn save(state: &mut AppState) -> Vec<Effect> {
    if state.is_creating() {
        roster_debug!("Save ignored: a create request is already in flight");
        return Vec::new();
    }
    if !state.draft().is_complete() {
        state.show_notice(Notice::new(NoticeKind::Validation, MSG_FILL_ALL_FIELDS));
        return Vec::new();
    }

    let request = state.next_request();
    state.begin_create(request);
    vec![Effect::CreateRecord {
        request,
        record: state.draft().to_payload(),
    }]
}

fn delete(state: &mut AppState) -> Vec<Effect> {
    if state.is_deleting() {
        roster_debug!("Delete ignored: a delete request is already in flight");
        return Vec::new();
    }
    if state.selection().is_empty() {
        roster_debug!("Delete ignored: nothing selected");
        return Vec::new();
    }

    let request = state.next_request();
    let ids = state.begin_delete(request);
    vec![Effect::DeleteRecords { request, ids }]
}

fn not_implemented(control: Control, row: Option<&RecordId>) -> Vec<Effect> {
    match row {
        Some(id) => roster_debug!("{:?} on record {} is not implemented", control, id),
        None => roster_debug!("{:?} is not implemented", control),
    }
    Vec::new()
}

fn list_finished(
    state: &mut AppState,
    request: RequestId,
    result: Result<Vec<Record>, RequestFailure>,
) {
    if !state.take_load(request) {
        roster_warn!("Discarding stale list response for request {}", request);
        return;
    }
    match result {
        Ok(records) => {
            roster_info!("Loaded {} user(s)", records.len());
            state.finish_load(Some(records));
        }
        Err(failure) => {
            // Load failures go to the log only.
            roster_error!("Failed to fetch users: {}", failure);
            state.finish_load(None);
        }
    }
}

fn create_finished(state: &mut AppState, request: RequestId, result: Result<Record, RequestFailure>) {
    if !state.take_create(request) {
        roster_warn!("Discarding stale create response for request {}", request);
        return;
    }
    match result {
        Ok(record) => {
            roster_info!("Created user {}", record.id);
            state.append_record(record);
            state.draft_mut().clear();
        }
        Err(failure @ RequestFailure::Rejected { .. }) => {
            roster_error!("Server error: {}", failure);
            state.show_notice(Notice::new(NoticeKind::Rejected, MSG_SAVE_FAILED));
        }
        Err(failure @ RequestFailure::Transport { .. }) => {
            roster_error!("Error: {}", failure);
            state.show_notice(Notice::new(NoticeKind::Transport, MSG_SAVE_TRANSPORT));
        }
    }
}

fn delete_finished(state: &mut AppState, request: RequestId, result: Result<(), RequestFailure>) {
    let Some(pending) = state.take_delete(request) else {
        roster_warn!("Discarding stale delete response for request {}", request);
        return;
    };
    match result {
        Ok(()) => {
            let before = state.listing().len();
            state.commit_delete(pending);
            roster_info!(
                "Deleted {} user(s)",
                before.saturating_sub(state.listing().len())
            );
        }
        Err(failure @ RequestFailure::Rejected { .. }) => {
            roster_warn!("Delete rejected: {}", failure);
            state.show_notice(Notice::new(NoticeKind::Rejected, MSG_DELETE_FAILED));
        }
        Err(failure @ RequestFailure::Transport { .. }) => {
            // Transport failures on delete go to the log only.
            roster_error!("Error: {}", failure);
        }
    }
}
