use std::sync::Once;

use roster_core::{
    update, AppState, Effect, Field, LoadState, Msg, NewRecord, NoticeKind, Record, RecordId,
    RequestFailure, MSG_FILL_ALL_FIELDS, MSG_SAVE_FAILED, MSG_SAVE_TRANSPORT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roster_logging::initialize_for_tests);
}

fn record(id: i64, name: &str) -> Record {
    Record {
        id: RecordId::from(id),
        name: name.to_string(),
        phone_number: format!("555-{id}"),
        email: format!("{}@x.com", name.to_lowercase()),
        hobbies: "reading".to_string(),
    }
}

fn loaded(records: Vec<Record>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let request = effects[0].request();
    let (state, _) = update(
        state,
        Msg::ListFinished {
            request,
            result: Ok(records),
        },
    );
    state
}

fn fill(state: AppState, name: &str, phone: &str, email: &str, hobbies: &str) -> AppState {
    let values = [name, phone, email, hobbies];
    Field::ALL
        .iter()
        .zip(values)
        .fold(state, |state, (field, value)| {
            update(
                state,
                Msg::FieldEdited {
                    field: *field,
                    value: value.to_string(),
                },
            )
            .0
        })
}

fn save(state: AppState) -> (AppState, u64, NewRecord) {
    let (state, effects) = update(state, Msg::SaveClicked);
    match effects.as_slice() {
        [Effect::CreateRecord { request, record }] => (state, *request, record.clone()),
        other => panic!("expected a single create effect, got {other:?}"),
    }
}

#[test]
fn mount_fetches_once() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    assert!(matches!(effects.as_slice(), [Effect::FetchAll { .. }]));
    assert_eq!(state.load_state(), LoadState::Pending);

    let (_state, effects) = update(state, Msg::Mounted);
    assert!(effects.is_empty());
}

#[test]
fn initial_load_keeps_server_order() {
    init_logging();
    let state = loaded(vec![record(3, "C"), record(1, "A"), record(2, "B")]);

    let ids: Vec<_> = state.view().rows.iter().map(|row| row.id_label.clone()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(state.load_state(), LoadState::Loaded);
}

#[test]
fn failed_load_is_logged_not_shown() {
    init_logging();
    for failure in [
        RequestFailure::Rejected {
            status: 500,
            reason: "Internal Server Error".to_string(),
        },
        RequestFailure::Transport {
            message: "connection refused".to_string(),
        },
    ] {
        let (state, effects) = update(AppState::new(), Msg::Mounted);
        let (state, effects) = update(
            state,
            Msg::ListFinished {
                request: effects[0].request(),
                result: Err(failure),
            },
        );
        assert!(effects.is_empty());
        assert!(state.listing().is_empty());
        assert!(state.notice().is_none());
        assert_eq!(state.load_state(), LoadState::Failed);
    }
}

#[test]
fn field_edit_changes_only_draft() {
    init_logging();
    let state = loaded(vec![record(1, "A")]);
    let listing_before = state.listing().to_vec();

    let (mut state, effects) = update(
        state,
        Msg::FieldEdited {
            field: Field::PhoneNumber,
            value: "12".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.draft().get(Field::PhoneNumber), "12");
    assert_eq!(state.draft().get(Field::Name), "");
    assert_eq!(state.listing(), listing_before.as_slice());
    assert!(state.consume_dirty());
}

#[test]
fn incomplete_draft_never_issues_a_request() {
    init_logging();
    let complete = ["A", "1", "a@x.com", "chess"];
    for missing in 0..complete.len() {
        let mut values = complete;
        values[missing] = "";
        let state = fill(
            loaded(vec![record(1, "A")]),
            values[0],
            values[1],
            values[2],
            values[3],
        );
        let listing_before = state.listing().to_vec();

        let (state, effects) = update(state, Msg::SaveClicked);

        assert!(effects.is_empty(), "field {missing} empty");
        assert_eq!(state.listing(), listing_before.as_slice());
        let notice = state.notice().expect("validation notice");
        assert_eq!(notice.kind, NoticeKind::Validation);
        assert_eq!(notice.message, MSG_FILL_ALL_FIELDS);
        assert!(!state.is_creating());
    }
}

#[test]
fn successful_create_appends_and_resets_draft() {
    init_logging();
    let state = fill(loaded(vec![record(1, "Z")]), "A", "1", "a@x.com", "chess");
    let (state, request, payload) = save(state);
    assert_eq!(
        payload,
        NewRecord {
            name: "A".to_string(),
            phone_number: "1".to_string(),
            email: "a@x.com".to_string(),
            hobbies: "chess".to_string(),
        }
    );
    // Nothing is inserted before the server confirms.
    assert_eq!(state.listing().len(), 1);
    assert!(state.view().saving);

    let created = Record {
        id: RecordId::from(7),
        name: "A".to_string(),
        phone_number: "1".to_string(),
        email: "a@x.com".to_string(),
        hobbies: "chess".to_string(),
    };
    let (state, effects) = update(
        state,
        Msg::CreateFinished {
            request,
            result: Ok(created.clone()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.listing(), &[record(1, "Z"), created.clone()]);
    assert_eq!(state.listing()[1].payload(), payload);
    for field in Field::ALL {
        assert_eq!(state.draft().get(field), "");
    }
    assert!(!state.is_creating());
    assert!(state.notice().is_none());
}

#[test]
fn rejected_create_leaves_listing_and_draft_untouched() {
    init_logging();
    let state = fill(loaded(vec![record(1, "Z")]), "A", "1", "a@x.com", "chess");
    let listing_before = state.listing().to_vec();
    let draft_before = state.draft().clone();
    let (state, request, _) = save(state);

    let (state, _) = update(
        state,
        Msg::CreateFinished {
            request,
            result: Err(RequestFailure::Rejected {
                status: 400,
                reason: "Bad Request".to_string(),
            }),
        },
    );

    assert_eq!(state.listing(), listing_before.as_slice());
    assert_eq!(state.draft(), &draft_before);
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Rejected);
    assert_eq!(notice.message, MSG_SAVE_FAILED);
}

#[test]
fn transport_failure_on_create_shows_generic_notice() {
    init_logging();
    let state = fill(loaded(Vec::new()), "A", "1", "a@x.com", "chess");
    let draft_before = state.draft().clone();
    let (state, request, _) = save(state);

    let (state, _) = update(
        state,
        Msg::CreateFinished {
            request,
            result: Err(RequestFailure::Transport {
                message: "connection reset".to_string(),
            }),
        },
    );

    assert!(state.listing().is_empty());
    assert_eq!(state.draft(), &draft_before);
    assert_eq!(state.notice().map(|n| n.message.as_str()), Some(MSG_SAVE_TRANSPORT));
    assert!(!state.is_creating());
}

#[test]
fn notice_blocks_input_until_dismissed() {
    init_logging();
    let (state, _) = update(loaded(vec![record(1, "A")]), Msg::SaveClicked);
    assert!(state.notice().is_some());
    assert!(!state.view().accepts_input());

    let (state, effects) = update(
        state,
        Msg::FieldEdited {
            field: Field::Name,
            value: "ignored".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.draft().get(Field::Name), "");

    let (state, _) = update(state, Msg::RowToggled(RecordId::from(1)));
    assert!(state.selection().is_empty());

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert!(state.notice().is_none());

    let (state, _) = update(state, Msg::RowToggled(RecordId::from(1)));
    assert_eq!(state.selection().ids(), &[RecordId::from(1)]);
}

#[test]
fn toggle_selects_ids_flipped_an_odd_number_of_times() {
    init_logging();
    let records: Vec<_> = (1..=4).map(|id| record(id, "N")).collect();
    let toggles = [1, 2, 1, 3, 3, 3, 4, 2, 1];

    let state = toggles.iter().fold(loaded(records), |state, id| {
        update(state, Msg::RowToggled(RecordId::from(*id))).0
    });

    let mut expected = Vec::new();
    for id in 1..=4 {
        let count = toggles.iter().filter(|toggled| **toggled == id).count();
        if count % 2 == 1 {
            expected.push(RecordId::from(id));
        }
    }
    let mut selected = state.selection().ids().to_vec();
    selected.sort_by_key(|id| id.to_string());
    assert_eq!(selected, expected);

    let flagged: Vec<_> = state
        .view()
        .rows
        .iter()
        .filter(|row| row.selected)
        .map(|row| row.id.clone())
        .collect();
    assert_eq!(flagged, expected);
}

#[test]
fn toggling_unknown_id_is_ignored() {
    init_logging();
    let state = loaded(vec![record(1, "A")]);

    let (mut state, effects) = update(state, Msg::RowToggled(RecordId::from(99)));

    assert!(effects.is_empty());
    assert!(state.selection().is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn string_ids_are_supported() {
    init_logging();
    let mut row = record(0, "A");
    row.id = RecordId::from("64b7f0c2");
    let state = loaded(vec![row]);

    let (state, _) = update(state, Msg::RowToggled(RecordId::from("64b7f0c2")));
    assert_eq!(state.view().selected_count, 1);
    assert_eq!(state.view().rows[0].id_label, "64b7f0c2");
}
