//! Modal prompts: a two-choice confirmation for destructive actions and a
//! single-button alert for validation errors and notices.

use egui::{Color32, Context, RichText};

use crate::models::counter::CounterId;

const DESTRUCTIVE_FILL: Color32 = Color32::from_rgb(180, 60, 60);

/// Actions that need the user's confirmation first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete a counter by ID
    DeleteCounter {
        counter_id: CounterId,
        counter_title: String,
    },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteCounter { .. } => "Delete Countdown",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteCounter { counter_title, .. } => {
                format!(
                    "Are you sure you want to delete the countdown \"{}\"?\n\nThis action cannot be undone.",
                    counter_title
                )
            }
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteCounter { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open (or was never opened)
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending_action = None;
    }

    /// Take the pending action, closing the dialog
    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }

    /// Render the dialog. On `Confirmed` the action is left in place for the
    /// caller to [`take_action`](Self::take_action); on `Cancelled` it is dropped.
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(24.0).color(Color32::from_rgb(220, 150, 50)));
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button = egui::Button::new(
                            RichText::new(action.confirm_text()).color(Color32::WHITE),
                        )
                        .fill(DESTRUCTIVE_FILL);

                        if ui.add(confirm_button).clicked() {
                            result = ConfirmResult::Confirmed;
                        }

                        ui.add_space(10.0);

                        if ui.button("Cancel").clicked() {
                            result = ConfirmResult::Cancelled;
                        }
                    });
                });

                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Cancelled {
            self.pending_action = None;
        }

        result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub level: AlertLevel,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: AlertLevel::Info,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: AlertLevel::Error,
        }
    }
}

/// Blocking alert with a single "OK" action.
#[derive(Debug, Default)]
pub struct AlertState {
    current: Option<Alert>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(alert) = &self.current else {
            return;
        };

        let mut dismissed = false;
        let (icon, icon_color) = match alert.level {
            AlertLevel::Info => ("ℹ", Color32::from_rgb(69, 140, 220)),
            AlertLevel::Error => ("✗", Color32::from_rgb(200, 60, 60)),
        };

        egui::Window::new(alert.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.set_max_width(360.0);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(22.0).color(icon_color));
                    ui.vertical(|ui| {
                        ui.label(alert.message.as_str());
                    });
                });
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
            dismissed = true;
        }

        if dismissed {
            self.dismiss();
        }
    }
}
