use std::time::{Duration, Instant};

/// Periodic repaint cadence owned by the countdown view.
///
/// Started when the app is created and cancelled on exit. While running it
/// asks egui for a repaint every `interval` so the readouts tick; once
/// cancelled, the screen only repaints on input or state changes.
#[derive(Debug, Clone)]
pub struct RefreshTicker {
    interval: Duration,
    running: bool,
    last_tick: Option<Instant>,
}

impl RefreshTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_tick = Some(now);
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Whether a full interval has elapsed since the last tick.
    pub fn due(&self, now: Instant) -> bool {
        match (self.running, self.last_tick) {
            (true, Some(last)) => now.saturating_duration_since(last) >= self.interval,
            _ => false,
        }
    }

    pub fn mark_tick(&mut self, now: Instant) {
        if self.running {
            self.last_tick = Some(now);
        }
    }

    /// Time until the next tick, or `None` when cancelled.
    pub fn next_delay(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        Some(self.interval.saturating_sub(elapsed))
    }

    /// Advance the ticker and schedule the next repaint.
    pub fn drive(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.due(now) {
            self.mark_tick(now);
        }
        if let Some(delay) = self.next_delay(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
