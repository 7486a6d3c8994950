//! Terminal simulator for the Horolog display engine
//!
//! Runs the real phase driver and renderers against stdout sinks with a
//! synthetic, fast-forwarded clock. Two modes:
//!
//! - `wordboard` (default): sweep the day and print the board phrase
//!   every five simulated minutes.
//! - `quad`: a short session on the quad-digit clock with a button
//!   click and a status message, showing the secondary cycle timing.

use std::env;

use horolog_core::{
    ButtonAction, ButtonEvent, ClockSource, DisplayPhaseDriver, StatusMessage, WeatherCondition,
};
use horolog_display::wordboard::LitMask;
use horolog_display::{BoardSink, QuadDigitSink, QuadDigitVariant, WordBoardVariant};

/// Synthetic clock the loop can step
struct SimClock {
    epoch: u64,
    temp: i16,
    cond: WeatherCondition,
}

impl ClockSource for SimClock {
    fn current_time(&self) -> u64 {
        self.epoch
    }
    fn current_temp(&self) -> i16 {
        self.temp
    }
    fn low_temp(&self) -> i16 {
        self.temp - 10
    }
    fn high_temp(&self) -> i16 {
        self.temp + 9
    }
    fn condition(&self) -> WeatherCondition {
        self.cond
    }
}

/// Prints the quad display like `12:05.` (dot marks PM)
struct TerminalQuad;

impl QuadDigitSink for TerminalQuad {
    fn show(&mut self, chars: &str, dot: bool, colon: bool) {
        let (left, right) = chars.split_at(2);
        let sep = if colon { ":" } else { " " };
        let pm = if dot { "." } else { "" };
        println!("  [{left}{sep}{right}{pm}]");
    }

    fn set_intensity(&mut self, level: u8) {
        println!("  (intensity {level})");
    }
}

/// Prints the word board as a 16x16 grid of blocks
struct TerminalBoard;

impl BoardSink for TerminalBoard {
    fn draw(&mut self, mask: &LitMask) {
        for row in 0..16usize {
            let line: String = (0..16usize)
                .map(|col| if mask.is_lit(row * 16 + col) { '#' } else { '.' })
                .collect();
            println!("  {line}");
        }
        println!();
    }

    fn set_intensity(&mut self, _level: u8) {}
}

fn run_wordboard() {
    let mut driver = DisplayPhaseDriver::new(WordBoardVariant::new(TerminalBoard), 0);
    let mut clock = SimClock {
        epoch: 0,
        temp: 55,
        cond: WeatherCondition::PartlyCloudy,
    };

    // One render per five simulated minutes, 22:00 through 23:00
    for step in 0u64..13 {
        let minutes = 22 * 60 + step * 5;
        clock.epoch = minutes * 60;
        let h = minutes / 60;
        let m = minutes % 60;
        println!("--- {h:02}:{m:02} ---");
        driver.tick(step * 1000, &clock);
    }
}

fn run_quad() {
    let mut driver = DisplayPhaseDriver::new(QuadDigitVariant::new(TerminalQuad), 0);
    let clock = SimClock {
        epoch: 19 * 3600 + 45 * 60,
        temp: 72,
        cond: WeatherCondition::Clear,
    };

    driver.set_brightness(100);

    println!("main view:");
    driver.tick(0, &clock);

    println!("click -> secondary cycle:");
    driver.handle_button(
        ButtonEvent {
            button: 0,
            action: ButtonAction::Click,
        },
        100,
        &clock,
    );
    for now in (500u64..=9000).step_by(500) {
        driver.tick(now, &clock);
    }

    println!("status message:");
    driver.show_message(StatusMessage::Connecting, 10_000);
    for now in (10_500u64..=13_000).step_by(500) {
        driver.tick(now, &clock);
    }
}

fn main() {
    let mode = env::args().nth(1).unwrap_or_else(|| "wordboard".into());
    match mode.as_str() {
        "quad" => run_quad(),
        _ => run_wordboard(),
    }
}
