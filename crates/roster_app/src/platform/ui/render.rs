use eframe::egui;
use roster_core::{AppViewModel, Msg};

use super::constants::*;
use super::layout;

/// Draws one frame and returns the messages produced by user interaction.
pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(view.accepts_input(), |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(HEADING_TITLE);
            });
            ui.add_space(8.0);
            layout::form(ui, view, &mut msgs);
            ui.add_space(16.0);
            layout::table(ui, view, &mut msgs);
        });
    });

    if let Some(notice) = &view.notice {
        egui::Window::new(NOTICE_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(8.0);
                // Focused, the button also takes Enter as a click.
                let ok = ui.button("OK");
                ok.request_focus();
                if ok.clicked() {
                    msgs.push(Msg::NoticeDismissed);
                }
            });
    }

    msgs
}
