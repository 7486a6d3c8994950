//! Quantization of time and weather into board phrases
//!
//! Time is quantized to five-minute buckets; the remainder lights the
//! corner dots. Past the half hour the phrase flips to "<n> to <next
//! hour>". Noon and midnight have their own words and drop both
//! "o'clock" and the time-of-day phrase.

use heapless::Vec;
use horolog_core::{StatusMessage, WeatherCondition, WeatherTemp};

use super::table::{PhraseToken, BOARD_CELLS};

/// Upper bound on tokens selected in one pass (time + weather combined)
pub const MAX_TOKENS: usize = 20;

/// Ordered set of tokens selected for one render pass
pub type TokenSet = Vec<PhraseToken, MAX_TOKENS>;

/// Corner dots in lighting priority order; minute remainder `r` lights
/// the first `r` of these
const DOT_ORDER: [PhraseToken; 4] = [
    PhraseToken::ULDot,
    PhraseToken::URDot,
    PhraseToken::LRDot,
    PhraseToken::LLDot,
];

const HOUR_WORDS: [PhraseToken; 11] = [
    PhraseToken::OneHour,
    PhraseToken::TwoHour,
    PhraseToken::ThreeHour,
    PhraseToken::FourHour,
    PhraseToken::FiveHour,
    PhraseToken::SixHour,
    PhraseToken::SevenHour,
    PhraseToken::EightHour,
    PhraseToken::NineHour,
    PhraseToken::TenHour,
    PhraseToken::ElevenHour,
];

/// Encode a time of day as board phrases.
///
/// `minutes_since_midnight` must be in `[0, 1440)`; out-of-range input
/// is folded back into the day.
pub fn encode_time(minutes_since_midnight: u16) -> TokenSet {
    let minutes = minutes_since_midnight % 1440;
    let mut tokens = TokenSet::new();

    let _ = tokens.push(PhraseToken::Its);

    // Minute dots: cumulative prefix, one per minute past the bucket
    let r = usize::from(minutes % 5);
    for dot in &DOT_ORDER[..r] {
        let _ = tokens.push(*dot);
    }

    let hour = minutes / 60;
    let bucket = (minutes % 60) / 5;

    // Past the half hour the time reads against the upcoming hour
    let mut hour_to_display = hour;
    if bucket > 6 {
        hour_to_display += 1;
    }

    // Catches literal noon/midnight and 23:35+ rounding up to hour 24
    let is_twelve = matches!(hour_to_display % 24, 0 | 12);

    // Time of day; noon and midnight speak for themselves
    if !is_twelve {
        if hour_to_display >= 20 {
            let _ = tokens.push(PhraseToken::At);
            let _ = tokens.push(PhraseToken::Night);
        } else {
            let _ = tokens.push(PhraseToken::In);
            let _ = tokens.push(PhraseToken::The);
            let _ = tokens.push(if hour_to_display <= 11 {
                PhraseToken::Morning
            } else if hour_to_display <= 16 {
                PhraseToken::Afternoon
            } else {
                PhraseToken::Evening
            });
        }
    }

    // Hour word
    match hour_to_display % 12 {
        h @ 1..=11 => {
            let _ = tokens.push(HOUR_WORDS[usize::from(h) - 1]);
        }
        _ => {
            let _ = tokens.push(if hour_to_display == 0 || hour_to_display == 24 {
                PhraseToken::Midnight
            } else {
                PhraseToken::Noon
            });
        }
    }

    // Minute phrase. Both this check and the hour rounding above compare
    // the original bucket against 6; they are deliberately independent.
    if bucket == 0 {
        if !is_twelve {
            let _ = tokens.push(PhraseToken::OClock);
        }
    } else {
        let m = if bucket <= 6 {
            let _ = tokens.push(PhraseToken::Past);
            bucket
        } else {
            let _ = tokens.push(PhraseToken::To);
            12 - bucket
        };
        match m {
            1 => {
                let _ = tokens.push(PhraseToken::FiveMinute);
            }
            2 => {
                let _ = tokens.push(PhraseToken::TenMinute);
            }
            3 => {
                let _ = tokens.push(PhraseToken::A);
                let _ = tokens.push(PhraseToken::Quarter);
            }
            4 => {
                let _ = tokens.push(PhraseToken::TwentyMinute);
            }
            5 => {
                let _ = tokens.push(PhraseToken::TwentyMinute);
                let _ = tokens.push(PhraseToken::FiveMinute);
            }
            _ => {
                let _ = tokens.push(PhraseToken::Half);
            }
        }
    }

    tokens
}

/// Encode a weather reading as board phrases ("it'll be ... and ...").
pub fn encode_weather(cond: WeatherCondition, temp: WeatherTemp) -> TokenSet {
    let mut tokens = TokenSet::new();

    let _ = tokens.push(PhraseToken::Itll);
    let _ = tokens.push(PhraseToken::Be);

    match cond {
        WeatherCondition::Clear => {
            let _ = tokens.push(PhraseToken::Clear);
        }
        WeatherCondition::Windy => {
            let _ = tokens.push(PhraseToken::Windy);
        }
        WeatherCondition::Cloudy => {
            let _ = tokens.push(PhraseToken::Cloudy);
        }
        WeatherCondition::PartlyCloudy => {
            let _ = tokens.push(PhraseToken::Partly);
            let _ = tokens.push(PhraseToken::Cloudy);
        }
        WeatherCondition::Rainy => {
            let _ = tokens.push(PhraseToken::Rainy);
        }
        WeatherCondition::Snowy => {
            let _ = tokens.push(PhraseToken::Snowy);
        }
    }

    let _ = tokens.push(PhraseToken::And);

    let _ = tokens.push(match temp {
        WeatherTemp::Cold => PhraseToken::Cold,
        WeatherTemp::Cool => PhraseToken::Cool,
        WeatherTemp::Warm => PhraseToken::Warm,
        WeatherTemp::Hot => PhraseToken::Hot,
    });

    tokens
}

/// Encode a status overlay from the board's fixed vocabulary.
///
/// The board has no free text; each message lights the closest words it
/// carries. Codes the board cannot express light all four corner dots.
pub fn encode_status(msg: StatusMessage) -> TokenSet {
    let mut tokens = TokenSet::new();
    match msg {
        StatusMessage::NetConfig => {
            let _ = tokens.push(PhraseToken::Connect);
            let _ = tokens.push(PhraseToken::ConnTo);
            let _ = tokens.push(PhraseToken::Hotspot);
        }
        StatusMessage::Startup => {
            let _ = tokens.push(PhraseToken::Its);
        }
        StatusMessage::Connecting => {
            let _ = tokens.push(PhraseToken::Connecting);
        }
        StatusMessage::NetFail | StatusMessage::UpdateFail | StatusMessage::AskResetNetwork => {
            let _ = tokens.push(PhraseToken::Reset);
            let _ = tokens.push(PhraseToken::Network);
        }
        StatusMessage::AskRestart => {
            let _ = tokens.push(PhraseToken::Restart);
        }
        StatusMessage::VerifyResetNetwork => {
            let _ = tokens.push(PhraseToken::Restart);
            let _ = tokens.push(PhraseToken::Reset);
            let _ = tokens.push(PhraseToken::Network);
        }
        _ => {
            for dot in DOT_ORDER {
                let _ = tokens.push(dot);
            }
        }
    }
    tokens
}

/// Lit/unlit state for every board cell, rebuilt from scratch each pass
///
/// A cell is lit iff it belongs to the range of some selected token;
/// unlit cells are drawn opaque over the backing artwork.
#[derive(Clone, PartialEq, Eq)]
pub struct LitMask([bool; BOARD_CELLS]);

impl LitMask {
    pub fn new() -> Self {
        Self([false; BOARD_CELLS])
    }

    /// Build a mask from a token set; pure function of its input.
    pub fn from_tokens(tokens: &[PhraseToken]) -> Self {
        let mut mask = Self::new();
        for token in tokens {
            mask.light(*token);
        }
        mask
    }

    /// Light every cell in the token's range.
    pub fn light(&mut self, token: PhraseToken) {
        let r = token.range();
        let start = usize::from(r.start);
        for cell in &mut self.0[start..start + usize::from(r.count)] {
            *cell = true;
        }
    }

    pub fn is_lit(&self, cell: usize) -> bool {
        self.0.get(cell).copied().unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }

    /// Cells as a flat slice, row-major
    pub fn cells(&self) -> &[bool; BOARD_CELLS] {
        &self.0
    }
}

impl Default for LitMask {
    fn default() -> Self {
        Self::new()
    }
}
