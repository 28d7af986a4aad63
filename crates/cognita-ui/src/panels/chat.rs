//! Chat panel — header, transcript, loading indicator, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Stroke, Vec2};
use cognita_types::message::{Message, Role, MAX_CONTENT_CHARS};
use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns the raw input when the user submits it.
///
/// The input field is left untouched; the caller clears it through
/// `UiState::on_submit_accepted` once the controller accepts the text.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, state);
                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 64.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.messages.is_empty() {
                            welcome(ui);
                        }

                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(12.0);
                        }

                        if state.is_busy() {
                            thinking_indicator(ui);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask me anything...")
                        .char_limit(MAX_CONTENT_CHARS)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(16.0));

                    let response = ui.add(input);

                    let send_enabled = state.can_send();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("↑").color(TEXT_PRIMARY).strong())
                            .fill(if send_enabled { USER_BORDER } else { BG_SURFACE })
                            .corner_radius(BUTTON_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = ui.input(|i| {
                        is_plain_enter(i.key_pressed(egui::Key::Enter), i.modifiers)
                    });

                    if (response.lost_focus() && enter && send_enabled) || send_btn.clicked() {
                        submitted = Some(state.input_text.clone());
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

/// Enter submits only when no modifier is held.
pub fn is_plain_enter(pressed: bool, modifiers: egui::Modifiers) -> bool {
    pressed && modifiers.is_none()
}

fn header(ui: &mut egui::Ui, state: &UiState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new("Cognita").color(ACCENT).strong().size(28.0));
            ui.label(
                RichText::new("AI-Powered Chat Assistant")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let status_color = if state.is_busy() { WARNING } else { SUCCESS };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
            ui.label(RichText::new("●").color(status_color).small());
        });
    });
}

fn welcome(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Welcome to Cognita")
                .color(TEXT_PRIMARY)
                .size(22.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Your AI-powered assistant is ready to help. \
                 Ask me anything and I'll do my best to assist you.",
            )
            .color(TEXT_SECONDARY),
        );
    });
}

fn thinking_indicator(ui: &mut egui::Ui) {
    bubble(ui, ASSISTANT_BUBBLE, ASSISTANT_BORDER, |ui| {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().color(ACCENT));
            ui.label(RichText::new("AI is thinking...").color(TEXT_SECONDARY).small());
        });
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (avatar, avatar_color, fill, border, align) = match message.role {
        Role::User => ("U", USER_BORDER, USER_BUBBLE, USER_BORDER, Align::Max),
        Role::Assistant => ("AI", ACCENT_ALT, ASSISTANT_BUBBLE, ASSISTANT_BORDER, Align::Min),
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        bubble(ui, fill, border, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(avatar).color(avatar_color).strong());
                ui.label(
                    RichText::new(message.time_label())
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY).size(15.0));
        });
    });
}

fn bubble(ui: &mut egui::Ui, fill: egui::Color32, border: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let max_width = ui.available_width() * 0.8;
    egui::Frame::default()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            add_contents(ui);
        });
}
