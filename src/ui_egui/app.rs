pub mod confirm;
pub mod countdown;
pub mod date_picker;
pub mod form;
mod lifecycle;
pub mod screen;
pub mod toast;

use self::countdown::RefreshTicker;
use crate::ui_egui::theme::ScreenTheme;
use crate::utils::clock::Clock;

pub use self::date_picker::{DatePick, DatePicker, PlaceholderDatePicker};
pub use self::screen::{CountdownScreen, SubmitOutcome};

pub struct CountdownApp {
    /// Counter list, form and prompts
    screen: CountdownScreen,
    /// Currently applied theme colors
    theme: ScreenTheme,
    /// Live-refresh cadence, started on creation and cancelled on exit
    ticker: RefreshTicker,
    clock: Box<dyn Clock>,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}
