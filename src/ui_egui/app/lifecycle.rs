use std::time::{Duration, Instant};

use super::countdown::RefreshTicker;
use super::date_picker::PlaceholderDatePicker;
use super::screen::CountdownScreen;
use super::CountdownApp;
use crate::models::config::{AppConfig, CountersConfig, DisplayConfig};
use crate::services::countdown::CountdownService;
use crate::ui_egui::theme::ScreenTheme;
use crate::utils::clock::{Clock, SystemClock};

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let screen = build_screen(&config.counters, clock.as_ref());

        let theme = ScreenTheme::for_preference(config.display.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let ticker = build_ticker(&config.display, Instant::now());

        Self {
            screen,
            theme,
            ticker,
            clock,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        let now = self.clock.now();
        self.screen.show(ctx, &self.theme, now);
        self.ticker.drive(ctx);
    }

    pub(super) fn handle_exit(&mut self) {
        self.ticker.cancel();
        log::info!(
            "Exiting with {} countdown(s) in memory",
            self.screen.service().len()
        );
    }
}

/// Build the screen, seeding the built-in counters when configured to.
pub(super) fn build_screen(counters: &CountersConfig, clock: &dyn Clock) -> CountdownScreen {
    let now = clock.now();
    let service = if counters.seed_defaults {
        CountdownService::with_default_counters(now)
    } else {
        CountdownService::new()
    };
    CountdownScreen::new(service, Box::new(PlaceholderDatePicker), now)
}

/// Ticker at the configured cadence, already started when live refresh is on.
pub(super) fn build_ticker(display: &DisplayConfig, now: Instant) -> RefreshTicker {
    let interval = Duration::from_millis(display.clamped_refresh_interval_ms());
    let mut ticker = RefreshTicker::new(interval);
    if display.live_refresh {
        ticker.start(now);
        log::info!("Live refresh every {} ms", interval.as_millis());
    } else {
        log::info!("Live refresh disabled; countdowns update on interaction");
    }
    ticker
}
