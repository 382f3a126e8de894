use crate::constants::{
    DELAY_OFFSCREEN_MS, DELAY_STEADY_MS, DELAY_WARMUP_MS, SCROLL_WINDOW_MS,
};
use std::cell::Cell;

/// Effect lifecycle phases. Host-element and configuration checks happen
/// before an instance exists, so a constructed effect always starts at
/// `Initializing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Active,
    Suspended,
    Destroyed,
}

/// Per-tick frame acceptance gate with a drift-correcting timestamp.
///
/// A tick is accepted only when the element is visible, the scroll window is
/// quiet (unless the effect has not finished post-init), and enough time has
/// elapsed; `force` bypasses the elapsed-time check but never the
/// visibility check. The reference timestamp advances by the elapsed time
/// modulo the interval rather than snapping to now, so acceptance cadence
/// does not accumulate drift.
#[derive(Clone, Copy, Debug)]
pub struct TickGate {
    then_ms: f64,
    interval_ms: f64,
}

impl TickGate {
    pub fn new(now_ms: f64, interval_ms: f64) -> Self {
        Self {
            then_ms: now_ms,
            interval_ms,
        }
    }

    pub fn accept(
        &mut self,
        now_ms: f64,
        visible: bool,
        scrolling: bool,
        post_init: bool,
        force: bool,
    ) -> bool {
        let delta = now_ms - self.then_ms;
        let accepted =
            visible && (!scrolling || !post_init) && (force || delta > self.interval_ms);
        self.then_ms = now_ms - delta % self.interval_ms;
        accepted
    }
}

/// Delay until the next scheduled wake-up: slow while off-screen, steady
/// once initialized, immediate during the initializing window.
pub fn next_delay_ms(visible: bool, post_init: bool) -> f64 {
    if !visible {
        DELAY_OFFSCREEN_MS
    } else if post_init {
        DELAY_STEADY_MS
    } else {
        DELAY_WARMUP_MS
    }
}

/// A debounced "user is actively scrolling" window.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollWindow {
    until_ms: f64,
}

impl ScrollWindow {
    pub fn bump(&mut self, now_ms: f64) {
        self.until_ms = now_ms + SCROLL_WINDOW_MS;
    }

    pub fn active(&self, now_ms: f64) -> bool {
        now_ms < self.until_ms
    }
}

thread_local! {
    // Process-wide scroll signal, deliberately shared: one writer (the
    // scroll listener), many readers (every effect instance's gate).
    static SCROLL: Cell<f64> = const { Cell::new(0.0) };
}

pub fn note_scroll(now_ms: f64) {
    SCROLL.with(|s| s.set(now_ms + SCROLL_WINDOW_MS));
}

pub fn is_scrolling(now_ms: f64) -> bool {
    SCROLL.with(|s| now_ms < s.get())
}
