use std::sync::mpsc;

use anyhow::Context as _;
use eframe::egui;
use roster_core::{update, AppState, AppViewModel, Msg};
use roster_engine::{StoreError, StoreSettings};
use roster_logging::roster_info;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::{logging, ui};

type DynError = Box<dyn std::error::Error + Send + Sync>;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load_default()?;
    logging::initialize(config.log_destination, config.log_level());

    let settings = config.store_settings();
    // Fail before opening a window when the endpoint cannot work.
    settings
        .collection_url()
        .context("invalid api_url in configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::constants::WINDOW_TITLE)
            .with_inner_size(ui::constants::WINDOW_SIZE),
        ..Default::default()
    };

    roster_info!("Starting roster_app");
    eframe::run_native(
        "roster_app",
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, DynError> {
            let app = RosterApp::new(cc.egui_ctx.clone(), settings)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("window event loop failed: {err}"))
}

struct RosterApp {
    state: AppState,
    view: AppViewModel,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl RosterApp {
    fn new(ctx: egui::Context, settings: StoreSettings) -> Result<Self, StoreError> {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let effects = EffectRunner::new(settings, msg_tx, move || ctx.request_repaint())?;

        let state = AppState::new();
        let view = state.view();
        let mut app = Self {
            state,
            view,
            msg_rx,
            effects,
        };
        app.dispatch_msg(Msg::Mounted);
        Ok(app)
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        if state.consume_dirty() {
            self.view = view;
        }
        self.state = state;
        self.effects.enqueue(effects);
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();
        let msgs = ui::render::render(ctx, &self.view);
        if !msgs.is_empty() {
            // The new view is only drawn on the next frame.
            ctx.request_repaint();
        }
        for msg in msgs {
            self.dispatch_msg(msg);
        }
    }
}
