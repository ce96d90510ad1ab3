use eframe::egui;
use roster_core::{AppViewModel, Availability, Control, Field, LoadState, Msg, RecordRowView};

use super::constants::*;

/// The creation form: four inputs and Save.
pub fn form(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.heading(HEADING_FORM);
    ui.horizontal_wrapped(|ui| {
        for field in Field::ALL {
            let mut value = view.draft.get(field).to_owned();
            let edit = egui::TextEdit::singleline(&mut value)
                .hint_text(field.label())
                .desired_width(INPUT_WIDTH);
            if ui.add(edit).changed() {
                msgs.push(Msg::FieldEdited { field, value });
            }
        }
        if control_button(ui, Control::Save, !view.saving).clicked() {
            msgs.push(Msg::SaveClicked);
        }
        if view.saving {
            ui.spinner();
        }
    });
}

/// The listing table followed by the batch buttons.
pub fn table(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        ui.heading(HEADING_TABLE);
        if view.load == LoadState::Pending {
            ui.spinner();
        }
    });

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - BUTTON_ROW_HEIGHT).max(MIN_TABLE_HEIGHT))
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("records")
                .striped(true)
                .num_columns(7)
                .spacing(GRID_SPACING)
                .show(ui, |ui| {
                    header_row(ui);
                    for row in &view.rows {
                        record_row(ui, row, msgs);
                    }
                });
        });

    ui.separator();
    ui.horizontal(|ui| {
        let can_delete = !view.deleting && view.selected_count > 0;
        if control_button(ui, Control::Delete, can_delete).clicked() {
            msgs.push(Msg::DeleteClicked);
        }
        if view.deleting {
            ui.spinner();
        }
        if control_button(ui, Control::Send, true).clicked() {
            msgs.push(Msg::SendClicked);
        }
    });
}

fn header_row(ui: &mut egui::Ui) {
    ui.strong(COLUMN_SELECT);
    ui.strong(COLUMN_ID);
    for field in Field::ALL {
        ui.strong(field.label());
    }
    ui.strong(COLUMN_ACTIONS);
    ui.end_row();
}

fn record_row(ui: &mut egui::Ui, row: &RecordRowView, msgs: &mut Vec<Msg>) {
    let mut checked = row.selected;
    if ui.checkbox(&mut checked, "").changed() {
        msgs.push(Msg::RowToggled(row.id.clone()));
    }
    ui.label(&row.id_label);
    ui.label(&row.name);
    ui.label(&row.phone_number);
    ui.label(&row.email);
    ui.label(&row.hobbies);
    ui.horizontal(|ui| {
        if control_button(ui, Control::RowUpdate, true).clicked() {
            msgs.push(Msg::RowUpdateClicked(row.id.clone()));
        }
        if control_button(ui, Control::RowDelete, true).clicked() {
            msgs.push(Msg::RowDeleteClicked(row.id.clone()));
        }
    });
    ui.end_row();
}

/// Renders a button; inert controls are always disabled and say so on hover.
fn control_button(ui: &mut egui::Ui, control: Control, enabled: bool) -> egui::Response {
    let button = egui::Button::new(control.label());
    match control.availability() {
        Availability::Wired => ui.add_enabled(enabled, button),
        Availability::NotImplemented => ui
            .add_enabled(false, button)
            .on_disabled_hover_text(NOT_IMPLEMENTED_HINT),
    }
}
