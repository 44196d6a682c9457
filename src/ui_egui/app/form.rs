//! Shared create/edit modal for counters.
//!
//! One set of fields serves both modes; `selected` tells them apart.

use chrono::{DateTime, Local};
use egui::{Color32, RichText};

use crate::models::counter::{Counter, CounterDraft, CounterId};
use crate::ui_egui::theme::ScreenTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    Create,
    Edit(&'a CounterId),
}

#[derive(Debug, Clone)]
pub struct CounterFormState {
    open: bool,
    pub title: String,
    pub description: String,
    pub target_date: DateTime<Local>,
    /// Counter being edited; `None` means the form creates a new one
    selected: Option<CounterId>,
}

impl CounterFormState {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            open: false,
            title: String::new(),
            description: String::new(),
            target_date: now,
            selected: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> FormMode<'_> {
        match &self.selected {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn selected(&self) -> Option<&CounterId> {
        self.selected.as_ref()
    }

    pub fn open_for_create(&mut self, now: DateTime<Local>) {
        self.reset(now);
        self.open = true;
    }

    pub fn open_for_edit(&mut self, counter: &Counter) {
        self.title = counter.title.clone();
        self.description = counter.description.clone();
        self.target_date = counter.target_date;
        self.selected = Some(counter.id.clone());
        self.open = true;
    }

    /// Close the modal and clear every field.
    pub fn close(&mut self, now: DateTime<Local>) {
        self.reset(now);
        self.open = false;
    }

    pub fn draft(&self) -> CounterDraft {
        CounterDraft::new(self.title.clone(), self.description.clone(), self.target_date)
    }

    fn reset(&mut self, now: DateTime<Local>) {
        self.title.clear();
        self.description.clear();
        self.target_date = now;
        self.selected = None;
    }
}

/// What the user did with the form this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
    PickDate,
}

pub fn render_counter_form(
    ctx: &egui::Context,
    form: &mut CounterFormState,
    theme: &ScreenTheme,
) -> FormAction {
    if !form.is_open() {
        return FormAction::None;
    }

    let mut action = FormAction::None;
    let heading = match form.mode() {
        FormMode::Create => "➕ New Countdown",
        FormMode::Edit(_) => "✏ Edit Countdown",
    };
    let submit_label = match form.mode() {
        FormMode::Create => "Create",
        FormMode::Edit(_) => "Save",
    };

    egui::Window::new(heading)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.set_max_width(400.0);

            ui.label(RichText::new("Title").strong());
            ui.add(
                egui::TextEdit::singleline(&mut form.title)
                    .hint_text("e.g. Final Exams")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("Description").strong());
            ui.add(
                egui::TextEdit::multiline(&mut form.description)
                    .hint_text("Optional details")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("Target date").strong());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(form.target_date.format("%a, %d %b %Y %H:%M").to_string())
                        .color(theme.text_secondary),
                );
                if ui.button("📅 Pick date").clicked() {
                    action = FormAction::PickDate;
                }
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let submit = egui::Button::new(RichText::new(submit_label).color(Color32::WHITE))
                        .fill(Color32::from_rgb(69, 183, 209));
                    if ui.add(submit).clicked() {
                        action = FormAction::Submit;
                    }

                    ui.add_space(10.0);

                    if ui.button("Cancel").clicked() {
                        action = FormAction::Cancel;
                    }
                });
            });

            ui.add_space(5.0);
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::RgbaColor;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap()
    }

    fn counter() -> Counter {
        Counter {
            id: CounterId::from("2"),
            title: "Summer Vacation".into(),
            description: "Beach".into(),
            target_date: now() + Duration::days(40),
            color: RgbaColor::opaque(0x4E, 0xCD, 0xC4),
        }
    }

    #[test]
    fn create_mode_starts_blank() {
        let mut form = CounterFormState::new(now());
        form.title = "leftover".into();
        form.open_for_create(now());

        assert!(form.is_open());
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.target_date, now());
    }

    #[test]
    fn edit_mode_copies_counter_fields() {
        let mut form = CounterFormState::new(now());
        let counter = counter();
        form.open_for_edit(&counter);

        assert_eq!(form.mode(), FormMode::Edit(&counter.id));
        assert_eq!(form.draft(), CounterDraft::from_counter(&counter));
    }

    #[test]
    fn close_clears_selection_and_fields() {
        let mut form = CounterFormState::new(now());
        form.open_for_edit(&counter());
        let later = now() + Duration::minutes(5);
        form.close(later);

        assert!(!form.is_open());
        assert_eq!(form.selected(), None);
        assert!(form.title.is_empty());
        assert_eq!(form.target_date, later);
    }
}
