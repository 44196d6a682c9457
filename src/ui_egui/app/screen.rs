//! The countdown list screen: counter list, create/edit modal and prompts.
//!
//! All state sits in [`CountdownScreen`] and is changed only through the
//! handlers below, which the egui frame calls in response to user input.
//! Rendering lives in [`CountdownScreen::show`].

use chrono::{DateTime, Local};
use egui::{Color32, RichText};

use super::confirm::{Alert, AlertState, ConfirmAction, ConfirmDialogState, ConfirmResult};
use super::countdown::{render_counter_list, ListAction};
use super::date_picker::{DatePick, DatePicker};
use super::form::{render_counter_form, CounterFormState, FormAction, FormMode};
use super::toast::ToastManager;
use crate::models::counter::CounterId;
use crate::services::countdown::{CountdownError, CountdownService};
use crate::ui_egui::theme::ScreenTheme;

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(CounterId),
    Updated(CounterId),
    /// Validation failed; an alert is showing and nothing changed
    Rejected(CountdownError),
}

pub struct CountdownScreen {
    service: CountdownService,
    form: CounterFormState,
    confirm: ConfirmDialogState,
    alert: AlertState,
    toasts: ToastManager,
    date_picker: Box<dyn DatePicker>,
}

impl CountdownScreen {
    pub fn new(
        service: CountdownService,
        date_picker: Box<dyn DatePicker>,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            service,
            form: CounterFormState::new(now),
            confirm: ConfirmDialogState::new(),
            alert: AlertState::new(),
            toasts: ToastManager::new(),
            date_picker,
        }
    }

    pub fn service(&self) -> &CountdownService {
        &self.service
    }

    pub fn form(&self) -> &CounterFormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CounterFormState {
        &mut self.form
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn confirm(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// True while any modal is covering the list.
    pub fn is_modal_open(&self) -> bool {
        self.form.is_open() || self.confirm.is_open() || self.alert.is_open()
    }

    pub fn open_create(&mut self, now: DateTime<Local>) {
        self.form.open_for_create(now);
    }

    /// Open the form pre-filled with the counter's fields. Returns `false`
    /// when the id is unknown.
    pub fn open_edit(&mut self, id: &CounterId) -> bool {
        let Some(counter) = self.service.get(id) else {
            log::warn!("Cannot edit countdown {}: not found", id);
            return false;
        };
        self.form.open_for_edit(counter);
        true
    }

    pub fn cancel_form(&mut self, now: DateTime<Local>) {
        self.form.close(now);
    }

    /// Create or update depending on the form mode. A blank title raises a
    /// blocking alert and keeps the form open with its values.
    pub fn submit_form(&mut self, now: DateTime<Local>) -> SubmitOutcome {
        let draft = self.form.draft();
        let (verb, result) = match self.form.mode() {
            FormMode::Create => (
                "Created",
                self.service.create(&draft, now).map(SubmitOutcome::Created),
            ),
            FormMode::Edit(id) => {
                let id = id.clone();
                (
                    "Saved",
                    self.service
                        .update(&id, &draft)
                        .map(|()| SubmitOutcome::Updated(id)),
                )
            }
        };

        match result {
            Ok(outcome) => {
                self.toasts
                    .success(format!("{} \"{}\"", verb, draft.title.trim()));
                self.form.close(now);
                outcome
            }
            Err(err) => {
                let title = match err {
                    CountdownError::BlankTitle => "Missing title",
                    CountdownError::NotFound(_) => "Countdown not found",
                };
                self.alert.show(Alert::error(title, err.to_string()));
                if matches!(err, CountdownError::NotFound(_)) {
                    self.form.close(now);
                }
                SubmitOutcome::Rejected(err)
            }
        }
    }

    /// Ask the date collaborator for a new target.
    pub fn pick_date(&mut self) {
        match self.date_picker.pick(self.form.target_date) {
            DatePick::Selected(date) => self.form.target_date = date,
            DatePick::Unavailable(message) => self.alert.show(Alert::info("Pick a date", message)),
            DatePick::Cancelled => {}
        }
    }

    pub fn request_delete(&mut self, id: &CounterId) {
        let Some(counter) = self.service.get(id) else {
            log::warn!("Cannot delete countdown {}: not found", id);
            return;
        };
        self.confirm.request(ConfirmAction::DeleteCounter {
            counter_id: counter.id.clone(),
            counter_title: counter.title.clone(),
        });
    }

    /// Apply the user's answer to a pending delete prompt.
    pub fn resolve_confirm(&mut self, result: ConfirmResult) {
        match result {
            ConfirmResult::Confirmed => {
                if let Some(action) = self.confirm.take_action() {
                    self.execute_confirmed_action(action);
                }
            }
            ConfirmResult::Cancelled => self.confirm.cancel(),
            ConfirmResult::Pending => {}
        }
    }

    fn execute_confirmed_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteCounter {
                counter_id,
                counter_title,
            } => {
                if self.service.delete(&counter_id).is_ok() {
                    self.toasts.success(format!("Deleted \"{}\"", counter_title));
                }
            }
        }
    }

    /// Draw the whole screen for one frame and dispatch the resulting events.
    pub fn show(&mut self, ctx: &egui::Context, theme: &ScreenTheme, now: DateTime<Local>) {
        let modal_open = self.is_modal_open();

        egui::TopBottomPanel::top("countdown_header")
            .frame(
                egui::Frame::none()
                    .fill(theme.app_background)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("My Countdowns").size(24.0).strong());
                        ui.label(
                            RichText::new(format!("{} active", self.service.len()))
                                .color(theme.text_secondary),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let add = egui::Button::new(
                            RichText::new("➕ New").size(16.0).color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(69, 183, 209))
                        .rounding(18.0);
                        if ui.add_enabled(!modal_open, add).clicked() {
                            self.open_create(now);
                        }
                    });
                });
            });

        let list_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    render_counter_list(ui, &self.service, now, theme)
                })
                .inner
            })
            .inner;

        match list_action {
            Some(ListAction::Edit(id)) => {
                self.open_edit(&id);
            }
            Some(ListAction::Delete(id)) => self.request_delete(&id),
            None => {}
        }

        // Alerts sit above the form so validation errors block it
        if self.alert.is_open() {
            self.alert.render(ctx);
        } else {
            match render_counter_form(ctx, &mut self.form, theme) {
                FormAction::Submit => {
                    self.submit_form(now);
                }
                FormAction::Cancel => self.cancel_form(now),
                FormAction::PickDate => self.pick_date(),
                FormAction::None => {}
            }
        }

        let result = self.confirm.render(ctx);
        self.resolve_confirm(result);

        self.toasts.render(ctx, theme.is_dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::countdown::{default_counters, is_palette_color};
    use crate::ui_egui::app::date_picker::PlaceholderDatePicker;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap()
    }

    struct ScriptedPicker(DateTime<Local>);

    impl DatePicker for ScriptedPicker {
        fn pick(&mut self, _current: DateTime<Local>) -> DatePick {
            DatePick::Selected(self.0)
        }
    }

    fn screen_with(picker: Box<dyn DatePicker>) -> CountdownScreen {
        let service =
            CountdownService::from_counters(default_counters(now()), StdRng::seed_from_u64(11));
        CountdownScreen::new(service, picker, now())
    }

    fn screen() -> CountdownScreen {
        screen_with(Box::new(PlaceholderDatePicker))
    }

    #[test]
    fn blank_title_shows_alert_and_keeps_form() {
        let mut screen = screen();
        let before = screen.service().counters().to_vec();
        screen.open_create(now());
        screen.form_mut().title = "   ".into();

        let outcome = screen.submit_form(now());

        assert_eq!(outcome, SubmitOutcome::Rejected(CountdownError::BlankTitle));
        assert!(screen.alert().is_open());
        assert!(screen.form().is_open());
        assert_eq!(screen.service().counters(), before.as_slice());
    }

    #[test]
    fn create_prepends_and_closes_form() {
        let mut screen = screen();
        let before = screen.service().counters().to_vec();
        let target = now() + Duration::days(3);
        screen.open_create(now());
        screen.form_mut().title = "Exam A".into();
        screen.form_mut().description = "Hall B".into();
        screen.form_mut().target_date = target;

        let SubmitOutcome::Created(id) = screen.submit_form(now()) else {
            panic!("expected creation");
        };

        let counters = screen.service().counters();
        assert_eq!(counters.len(), before.len() + 1);
        assert_eq!(counters[0].id, id);
        assert_eq!(counters[0].description, "Hall B");
        assert_eq!(counters[0].target_date, target);
        assert!(is_palette_color(counters[0].color));
        assert_eq!(&counters[1..], before.as_slice());
        assert!(!screen.form().is_open());
        assert!(screen.form().title.is_empty());
        assert_eq!(screen.toasts().toasts().len(), 1);
        assert_eq!(screen.toasts().toasts()[0].message, "Created \"Exam A\"");
    }

    #[test]
    fn edit_round_trip_preserves_id_and_color() {
        let mut screen = screen();
        let original = screen.service().counters()[1].clone();
        assert!(screen.open_edit(&original.id));
        assert_eq!(screen.form().title, original.title);

        screen.form_mut().title = "Renamed".into();
        let outcome = screen.submit_form(now());

        assert_eq!(outcome, SubmitOutcome::Updated(original.id.clone()));
        let edited = &screen.service().counters()[1];
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.color, original.color);
        assert_eq!(edited.title, "Renamed");
        assert_eq!(screen.form().selected(), None);
        assert_eq!(screen.toasts().toasts()[0].message, "Saved \"Renamed\"");
    }

    #[test]
    fn cancelled_delete_is_a_no_op() {
        let mut screen = screen();
        let id = screen.service().counters()[0].id.clone();
        screen.request_delete(&id);
        assert!(screen.confirm().is_open());

        screen.resolve_confirm(ConfirmResult::Cancelled);

        assert!(!screen.confirm().is_open());
        assert_eq!(screen.service().len(), 2);
    }

    #[test]
    fn confirmed_delete_removes_counter() {
        let mut screen = screen();
        let first = screen.service().counters()[0].id.clone();
        let second = screen.service().counters()[1].id.clone();
        screen.request_delete(&first);

        screen.resolve_confirm(ConfirmResult::Confirmed);

        let remaining: Vec<_> = screen.service().counters().iter().map(|c| c.id.clone()).collect();
        assert_eq!(remaining, vec![second]);
    }

    #[test]
    fn placeholder_picker_raises_info_alert() {
        let mut screen = screen();
        screen.open_create(now());
        let before = screen.form().target_date;

        screen.pick_date();

        assert!(screen.alert().is_open());
        assert_eq!(screen.form().target_date, before);
    }

    #[test]
    fn scripted_picker_sets_target() {
        let chosen = now() + Duration::days(100);
        let mut screen = screen_with(Box::new(ScriptedPicker(chosen)));
        screen.open_create(now());

        screen.pick_date();

        assert!(!screen.alert().is_open());
        assert_eq!(screen.form().target_date, chosen);
    }

    #[test]
    fn editing_unknown_id_does_not_open_form() {
        let mut screen = screen();
        assert!(!screen.open_edit(&CounterId::from("missing")));
        assert!(!screen.form().is_open());
    }
}
