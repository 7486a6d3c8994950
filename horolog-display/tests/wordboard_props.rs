//! Property tests for the word board encoder and segment formatter

use horolog_display::segment;
use horolog_display::wordboard::{encode_time, PhraseToken};
use proptest::prelude::*;

const DOTS: [PhraseToken; 4] = [
    PhraseToken::ULDot,
    PhraseToken::URDot,
    PhraseToken::LRDot,
    PhraseToken::LLDot,
];

const HOUR_WORDS: [PhraseToken; 13] = [
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
    PhraseToken::Noon,
    PhraseToken::Midnight,
];

proptest! {
    /// Every minute of the day selects exactly one hour word.
    #[test]
    fn exactly_one_hour_token(minutes in 0u16..1440) {
        let tokens = encode_time(minutes);
        let hours = tokens
            .iter()
            .filter(|t| HOUR_WORDS.contains(t))
            .count();
        prop_assert_eq!(hours, 1);
    }

    /// "Past" and "to" never appear together.
    #[test]
    fn past_and_to_are_exclusive(minutes in 0u16..1440) {
        let tokens = encode_time(minutes);
        let past = tokens.contains(&PhraseToken::Past);
        let to = tokens.contains(&PhraseToken::To);
        prop_assert!(!(past && to));
    }

    /// Noon and midnight never take "o'clock".
    #[test]
    fn twelve_never_oclock(minutes in 0u16..1440) {
        let tokens = encode_time(minutes);
        if tokens.contains(&PhraseToken::Noon) || tokens.contains(&PhraseToken::Midnight) {
            prop_assert!(!tokens.contains(&PhraseToken::OClock));
        }
    }

    /// Off the five-minute mark there is always either a past/to phrase
    /// or nothing minute-wise at twelve; on the mark, o'clock appears
    /// exactly when not twelve.
    #[test]
    fn minute_phrase_matches_bucket(minutes in 0u16..1440) {
        let tokens = encode_time(minutes);
        let bucket = (minutes % 60) / 5;
        let past_or_to =
            tokens.contains(&PhraseToken::Past) || tokens.contains(&PhraseToken::To);
        if bucket == 0 {
            prop_assert!(!past_or_to);
        } else {
            prop_assert!(past_or_to);
        }
    }

    /// Dot selection is monotonic in the minute remainder: each step's
    /// dot set contains the previous one.
    #[test]
    fn dots_grow_monotonically(base in 0u16..287) {
        // Walk one five-minute bucket
        let start = base * 5;
        let mut previous: Vec<PhraseToken> = Vec::new();
        for r in 0..5 {
            let tokens = encode_time(start + r);
            let lit: Vec<PhraseToken> = DOTS
                .iter()
                .copied()
                .filter(|d| tokens.contains(d))
                .collect();
            prop_assert_eq!(lit.len(), r as usize);
            for dot in &previous {
                prop_assert!(lit.contains(dot));
            }
            previous = lit;
        }
    }

    /// "It's" opens every phrase.
    #[test]
    fn its_always_first(minutes in 0u16..1440) {
        let tokens = encode_time(minutes);
        prop_assert_eq!(tokens.first(), Some(&PhraseToken::Its));
    }

    /// The segment time field is always exactly four characters.
    #[test]
    fn time_field_is_four_chars(hour in 0u8..24, minute in 0u8..60) {
        let field = segment::format_time(hour, minute);
        prop_assert_eq!(field.text.len(), 4);
        prop_assert_eq!(field.pm, hour >= 12);
    }

    /// The date field is always exactly four characters.
    #[test]
    fn date_field_is_four_chars(month in 1u8..13, day in 1u8..32) {
        prop_assert_eq!(segment::format_date(month, day).len(), 4);
    }
}
