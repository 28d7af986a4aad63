//! Main egui application — owns the session controller and renders it.

use std::rc::Rc;

use egui::{self, CentralPanel};

use cognita_core::event_bus::EventBus;
use cognita_core::SessionController;
use cognita_platform::HttpChatService;
use cognita_types::config::ClientConfig;
use cognita_ui::panels::chat;
use cognita_ui::state::UiState;
use cognita_ui::theme;

pub struct CognitaApp {
    ui_state: UiState,
    controller: SessionController,
    event_bus: EventBus,
    first_frame: bool,
}

impl CognitaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::from_env().unwrap_or_else(|e| {
            log::error!("{}; using defaults", e);
            ClientConfig::default()
        });
        log::info!("Chat endpoint: {}", config.chat_url());

        let event_bus = EventBus::new();
        let chat = Rc::new(HttpChatService::new(&config));
        let controller = SessionController::new(chat, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            controller,
            event_bus,
            first_frame: true,
        }
    }

    /// Hand the input to the controller; the turn runs on the JS event loop.
    fn dispatch_message(&mut self, text: String, ctx: &egui::Context) {
        match self.controller.submit(&text) {
            Ok(turn) => {
                self.ui_state.on_submit_accepted();
                ctx.request_repaint();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    turn.resolve().await;
                    ctx.request_repaint();
                });
            }
            Err(rejection) => {
                log::debug!("Submission rejected: {:?}", rejection);
            }
        }
    }
}

impl eframe::App for CognitaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }
        self.ui_state.sync(self.controller.view());

        if self.controller.is_pending() {
            ctx.request_repaint();
        }

        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            submitted = chat::chat_panel(ui, &mut self.ui_state);
        });

        if let Some(text) = submitted {
            self.dispatch_message(text, ctx);
        }
    }
}
