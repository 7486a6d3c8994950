//! Word board variant
//!
//! The main view spells out the time and the day's weather together;
//! the board redraws as a whole from a freshly built mask. The board
//! has no numerals, so the secondary info cycle re-renders the main
//! phrase instead of temperatures.

use horolog_core::{ClockSource, InfoStep, LastShown, Renderer, StatusMessage, WeatherTemp};

use crate::sink::BoardSink;
use crate::wordboard::{encode_status, encode_time, encode_weather, LitMask, TokenSet};

/// Ambient brightness divisor for the board LEDs
const BRIGHTNESS_DIV: u8 = 8;
const INTENSITY_MAX: u8 = 31;

/// Renderer for the word-board clock
pub struct WordBoardVariant<S: BoardSink> {
    sink: S,
}

impl<S: BoardSink> WordBoardVariant<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Full time + weather phrase for the current reading.
    fn main_tokens(clock: &dyn ClockSource) -> TokenSet {
        let sample = clock.sample();
        let mut tokens = encode_time(sample.minutes_since_midnight());
        let weather = encode_weather(
            clock.condition(),
            WeatherTemp::from_degrees(clock.current_temp()),
        );
        for token in weather {
            let _ = tokens.push(token);
        }
        tokens
    }

    fn draw_tokens(&mut self, tokens: &TokenSet) {
        let mask = LitMask::from_tokens(tokens);
        self.sink.draw(&mask);
    }
}

impl<S: BoardSink> Renderer for WordBoardVariant<S> {
    fn render_main(
        &mut self,
        _now_ms: u64,
        clock: &dyn ClockSource,
        last: Option<&LastShown>,
        force: bool,
    ) -> Option<LastShown> {
        let sample = clock.sample();
        let shown = LastShown {
            hour: sample.hour,
            minute: sample.minute,
            dots: 0,
        };

        // Weather changes ride the next minute tick; the phrase cannot
        // change without the minute changing
        if !force && last == Some(&shown) {
            return None;
        }

        let tokens = Self::main_tokens(clock);
        self.draw_tokens(&tokens);
        Some(shown)
    }

    fn render_status(&mut self, _now_ms: u64, msg: StatusMessage) {
        let tokens = encode_status(msg);
        self.draw_tokens(&tokens);
    }

    fn render_info(&mut self, _now_ms: u64, _step: InfoStep, clock: &dyn ClockSource) {
        // No numerals on the board; the info cycle shows the full
        // phrase again
        let tokens = Self::main_tokens(clock);
        self.draw_tokens(&tokens);
    }

    fn set_brightness(&mut self, raw: u8) {
        let level = (raw / BRIGHTNESS_DIV).min(INTENSITY_MAX);
        self.sink.set_intensity(level);
    }
}
