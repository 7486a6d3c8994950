//! Quad-digit seven-segment variant
//!
//! Time on the main view with a colon and a PM dot; date and
//! temperatures as four-character codes in the secondary cycle; status
//! overlays from the fixed code table.

use horolog_core::{ClockSource, InfoStep, LastShown, Renderer, StatusMessage};

use crate::segment::{self, TempKind, FALLBACK, PM_DOT};
use crate::sink::QuadDigitSink;

/// Ambient brightness divisor; anything above 15 native is glaring
const BRIGHTNESS_DIV: u8 = 2;
const INTENSITY_MAX: u8 = 31;

/// Renderer for the quad-digit clock
pub struct QuadDigitVariant<S: QuadDigitSink> {
    sink: S,
}

impl<S: QuadDigitSink> QuadDigitVariant<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Validate and write four characters to the display.
    ///
    /// A wrong-width string is replaced by [`FALLBACK`] and logged;
    /// this path never fails.
    fn show_chars(&mut self, chars: &str, dots: u8, colon: bool) {
        if chars.len() != 4 {
            #[cfg(feature = "defmt")]
            defmt::warn!("invalid display string: {=str}", chars);
            self.sink.show(FALLBACK, false, false);
            return;
        }
        self.sink.show(chars, dots != 0, colon);
    }
}

impl<S: QuadDigitSink> Renderer for QuadDigitVariant<S> {
    fn render_main(
        &mut self,
        _now_ms: u64,
        clock: &dyn ClockSource,
        last: Option<&LastShown>,
        force: bool,
    ) -> Option<LastShown> {
        let sample = clock.sample();
        let field = segment::format_time(sample.hour, sample.minute);
        let shown = LastShown {
            hour: sample.hour,
            minute: sample.minute,
            dots: if field.pm { PM_DOT } else { 0 },
        };

        if !force && last == Some(&shown) {
            return None;
        }

        self.show_chars(field.text.as_str(), shown.dots, true);
        Some(shown)
    }

    fn render_status(&mut self, _now_ms: u64, msg: StatusMessage) {
        self.show_chars(segment::status_code(msg), 0, false);
    }

    fn render_info(&mut self, _now_ms: u64, step: InfoStep, clock: &dyn ClockSource) {
        match step {
            InfoStep::Date => {
                let sample = clock.sample();
                let text = segment::format_date(sample.month, sample.day);
                self.show_chars(text.as_str(), 0, false);
            }
            InfoStep::CurTemp => {
                let text = segment::format_temp(TempKind::Current, clock.current_temp());
                self.show_chars(text.as_str(), 0, false);
            }
            InfoStep::LowTemp => {
                let text = segment::format_temp(TempKind::Low, clock.low_temp());
                self.show_chars(text.as_str(), 0, false);
            }
            InfoStep::HighTemp => {
                let text = segment::format_temp(TempKind::High, clock.high_temp());
                self.show_chars(text.as_str(), 0, false);
            }
        }
    }

    fn set_brightness(&mut self, raw: u8) {
        let level = (raw / BRIGHTNESS_DIV).min(INTENSITY_MAX);
        self.sink.set_intensity(level);
    }
}
