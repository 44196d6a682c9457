mod card_rendering;
mod refresh;

use card_rendering::CardUiAction;
pub use refresh::RefreshTicker;

use chrono::{DateTime, Local};
use egui::RichText;

use crate::models::counter::CounterId;
use crate::services::countdown::CountdownService;
use crate::ui_egui::theme::ScreenTheme;

const CARD_GAP: f32 = 12.0;

/// Card interaction forwarded to the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Edit(CounterId),
    Delete(CounterId),
}

/// Render every counter, or the empty-state placeholder.
pub fn render_counter_list(
    ui: &mut egui::Ui,
    service: &CountdownService,
    now: DateTime<Local>,
    theme: &ScreenTheme,
) -> Option<ListAction> {
    if service.is_empty() {
        render_empty_state(ui, theme);
        return None;
    }

    let mut action = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (counter, time_left) in service.snapshots(now) {
                ui.push_id(counter.id.as_str(), |ui| {
                    match card_rendering::render_counter_card(ui, counter, &time_left, theme) {
                        CardUiAction::Edit => action = Some(ListAction::Edit(counter.id.clone())),
                        CardUiAction::Delete => {
                            action = Some(ListAction::Delete(counter.id.clone()))
                        }
                        CardUiAction::None => {}
                    }
                });
                ui.add_space(CARD_GAP);
            }
        });
    action
}

fn render_empty_state(ui: &mut egui::Ui, theme: &ScreenTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("⏳").size(56.0).color(theme.text_secondary));
        ui.add_space(8.0);
        ui.label(RichText::new("No countdowns yet").size(20.0).strong());
        ui.label(
            RichText::new("Press ➕ to add your first countdown").color(theme.text_secondary),
        );
    });
}
