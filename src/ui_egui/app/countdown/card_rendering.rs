//! Rendering of a single counter card.

use egui::{Color32, RichText};

use crate::models::counter::Counter;
use crate::services::countdown::{header_gradient, TimeLeft};
use crate::ui_egui::theme::{rgba_to_color32, ScreenTheme};

const CARD_ROUNDING: f32 = 12.0;
const HEADER_HEIGHT: f32 = 44.0;
const UNIT_SPACING: f32 = 6.0;

/// Action from rendering a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardUiAction {
    None,
    Edit,
    Delete,
}

/// Hover text with the full remaining time and target.
pub fn format_card_tooltip(counter: &Counter, time_left: &TimeLeft) -> String {
    let mut lines = vec![
        format!("⏱ {}", time_left.format_compact()),
        format!("🎯 Target: {}", counter.target_date.format("%d %b %Y %H:%M")),
    ];
    if let Some(body) = counter.description_text() {
        lines.push(String::new());
        lines.push(format!("📝 {}", body));
    }
    lines.join("\n")
}

/// The four readouts in display order.
pub fn unit_readouts(time_left: &TimeLeft) -> [(String, &'static str); 4] {
    [
        (time_left.days.to_string(), "Days"),
        (format!("{:02}", time_left.hours), "Hours"),
        (format!("{:02}", time_left.minutes), "Minutes"),
        (format!("{:02}", time_left.seconds), "Seconds"),
    ]
}

/// Fill `rect` with a top-to-bottom gradient between two colours.
fn paint_vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: Color32, bottom: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

pub fn render_counter_card(
    ui: &mut egui::Ui,
    counter: &Counter,
    time_left: &TimeLeft,
    theme: &ScreenTheme,
) -> CardUiAction {
    let mut action = CardUiAction::None;
    let accent = rgba_to_color32(counter.color);
    let (top, bottom) = header_gradient(counter.color);
    let header_fg = rgba_to_color32(counter.color.readable_text_color());

    let frame = egui::Frame::none()
        .fill(theme.card_background)
        .rounding(CARD_ROUNDING)
        .stroke(egui::Stroke::new(1.0, theme.card_border));

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Gradient header with icon, title and actions
        let (header_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), HEADER_HEIGHT),
            egui::Sense::hover(),
        );
        paint_vertical_gradient(
            ui.painter(),
            header_rect,
            rgba_to_color32(top),
            rgba_to_color32(bottom),
        );

        let mut header_ui = ui.child_ui(
            header_rect.shrink2(egui::vec2(12.0, 6.0)),
            egui::Layout::left_to_right(egui::Align::Center),
            None,
        );
        header_ui.label(RichText::new("⏰").size(20.0).color(header_fg));
        header_ui.add(
            egui::Label::new(
                RichText::new(&counter.title)
                    .size(18.0)
                    .strong()
                    .color(header_fg),
            )
            .truncate(),
        );
        header_ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(RichText::new("🗑").color(header_fg)).frame(false))
                .on_hover_text("Delete countdown")
                .clicked()
            {
                action = CardUiAction::Delete;
            }
            if ui
                .add(egui::Button::new(RichText::new("✏").color(header_fg)).frame(false))
                .on_hover_text("Edit countdown")
                .clicked()
            {
                action = CardUiAction::Edit;
            }
        });

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                if let Some(description) = counter.description_text() {
                    ui.label(RichText::new(description).color(theme.text_secondary));
                    ui.add_space(6.0);
                }

                if time_left.is_over {
                    render_expired_badge(ui, theme);
                } else {
                    render_unit_readouts(ui, time_left, accent, theme);
                }

                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "📅 {}",
                        counter.target_date.format("%a, %d %b %Y %H:%M")
                    ))
                    .small()
                    .color(theme.text_secondary),
                );
            });
    });

    inner
        .response
        .on_hover_text(format_card_tooltip(counter, time_left));

    action
}

fn render_unit_readouts(ui: &mut egui::Ui, time_left: &TimeLeft, accent: Color32, theme: &ScreenTheme) {
    ui.columns(4, |columns| {
        for (column, (value, label)) in columns.iter_mut().zip(unit_readouts(time_left)) {
            egui::Frame::none()
                .fill(theme.unit_background)
                .rounding(8.0)
                .inner_margin(egui::Margin::symmetric(4.0, UNIT_SPACING))
                .show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(value).size(26.0).strong().color(accent));
                        ui.label(RichText::new(label).small().color(theme.text_secondary));
                    });
                });
        }
    });
}

fn render_expired_badge(ui: &mut egui::Ui, theme: &ScreenTheme) {
    ui.vertical_centered(|ui| {
        egui::Frame::none()
            .fill(theme.expired_background)
            .rounding(16.0)
            .inner_margin(egui::Margin::symmetric(16.0, 8.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("⌛ Time's up!")
                        .size(20.0)
                        .strong()
                        .color(theme.expired_text),
                );
            });
    });
}
