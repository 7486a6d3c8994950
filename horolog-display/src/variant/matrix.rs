//! Scrolling dot-matrix variant
//!
//! The main time sits centered on the panel; everything longer (date
//! and temperature summary, status messages) scrolls across. Status
//! overlays therefore have no fixed hold time; they end when the scroll
//! runs off the panel.

use core::fmt::Write;

use heapless::String;
use horolog_core::{ClockSource, InfoStep, LastShown, Renderer, StatusMessage};

use crate::scroll::{ScrollEvent, ScrollRenderer};
use crate::sink::MatrixSink;

/// Milliseconds per scroll pixel
const SCROLL_RATE_MS: u64 = 50;

/// Ambient brightness divisor for the LED matrix
const BRIGHTNESS_DIV: u8 = 8;
const INTENSITY_MAX: u8 = 15;

/// Renderer for the dot-matrix clock
pub struct MatrixVariant<S: MatrixSink> {
    sink: S,
    scroll: ScrollRenderer,
}

impl<S: MatrixSink> MatrixVariant<S> {
    pub fn new(sink: S) -> Self {
        let scroll = ScrollRenderer::new(sink.width());
        Self { sink, scroll }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Whether a scrolled view is still moving
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_active()
    }

    fn start_scroll(&mut self, text: &str, now_ms: u64) {
        let width = self.sink.text_width(text);
        self.scroll.start(text, width, SCROLL_RATE_MS, now_ms);
    }

    fn draw_centered(&mut self, text: &str) {
        let x = (self.sink.width() - self.sink.text_width(text)) / 2;
        self.sink.draw_text(x, text);
    }
}

impl<S: MatrixSink> Renderer for MatrixVariant<S> {
    fn render_main(
        &mut self,
        _now_ms: u64,
        clock: &dyn ClockSource,
        last: Option<&LastShown>,
        force: bool,
    ) -> Option<LastShown> {
        let sample = clock.sample();
        let pm = sample.hour >= 12;
        let shown = LastShown {
            hour: sample.hour,
            minute: sample.minute,
            dots: pm as u8,
        };

        if !force && last == Some(&shown) {
            return None;
        }

        let h = match sample.hour {
            0 => 12,
            13..=23 => sample.hour - 12,
            _ => sample.hour,
        };
        let mut text: String<8> = String::new();
        let _ = write!(text, "{}:{:02}", h, sample.minute);

        self.scroll.cancel();
        self.draw_centered(text.as_str());
        Some(shown)
    }

    fn render_status(&mut self, now_ms: u64, msg: StatusMessage) {
        let text = match msg {
            StatusMessage::NetConfig => {
                "Configure WiFi: join the clock's hotspot, or press [select] to retry."
            }
            StatusMessage::Startup => "Horolog v1.0",
            StatusMessage::Connecting => "Connecting...",
            StatusMessage::NetFail => "Network failed, press [select] to retry.",
            StatusMessage::UpdateFail => "Time or weather update failed, press [select] to retry.",
            StatusMessage::AskRestart => "Restart? (long press for yes)",
            StatusMessage::AskResetNetwork => "Reset network? (long press for yes)",
            StatusMessage::VerifyResetNetwork => "Are you sure? (long press for yes)",
            _ => "Unknown status",
        };
        self.start_scroll(text, now_ms);
    }

    fn render_info(&mut self, now_ms: u64, step: InfoStep, clock: &dyn ClockSource) {
        // The whole secondary view goes out as one scrolled line; the
        // remaining steps have nothing left to add
        if step != InfoStep::Date {
            return;
        }

        let sample = clock.sample();
        let mut text: String<96> = String::new();
        let ampm = if sample.hour >= 12 { "PM" } else { "AM" };
        let _ = write!(
            text,
            "{} {} {} {}  Cur:{} Hi:{} Lo:{}",
            sample.weekday_name(),
            sample.month_name(),
            sample.pretty_day(),
            ampm,
            clock.current_temp(),
            clock.high_temp(),
            clock.low_temp(),
        );
        self.start_scroll(text.as_str(), now_ms);
    }

    fn set_brightness(&mut self, raw: u8) {
        let level = (raw / BRIGHTNESS_DIV).min(INTENSITY_MAX);
        self.sink.set_intensity(level);
    }

    fn status_hold_ms(&self) -> Option<u64> {
        // Scrolled overlays end when the text has passed, reported via
        // service()
        None
    }

    fn service(&mut self, now_ms: u64) -> bool {
        match self.scroll.poll(now_ms) {
            ScrollEvent::Frame => {
                let x = -self.scroll.offset();
                self.sink.draw_text(x, self.scroll.text());
                false
            }
            ScrollEvent::Completed => true,
            ScrollEvent::Idle => false,
        }
    }
}
