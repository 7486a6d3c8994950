//! Static token-to-cells table for the 16x16 word board
//!
//! Cell indices run left to right, top to bottom. The table mirrors the
//! board artwork and never changes at runtime; `range` is const and
//! allocation-free.

/// Total cells on the board
pub const BOARD_CELLS: usize = 256;

/// A contiguous run of board cells lit by one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardRange {
    /// First cell index
    pub start: u8,
    /// Number of cells (1-13)
    pub count: u8,
}

/// Every word, dot, and punctuation unit the board can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhraseToken {
    // Corner dots for the minutes between five-minute marks
    ULDot,
    URDot,
    LLDot,
    LRDot,

    Its,
    Half,
    A,
    Quarter,
    TwentyMinute,
    FiveMinute,
    TenMinute,

    Past,
    To,

    OneHour,
    TwoHour,
    ThreeHour,
    FourHour,
    FiveHour,
    SixHour,
    SevenHour,
    EightHour,
    NineHour,
    TenHour,
    ElevenHour,
    Noon,
    Midnight,

    OClock,
    At,
    Night,
    In,
    The,
    Morning,
    Afternoon,
    Evening,

    Itll,
    Be,
    Clear,
    Windy,
    Partly,
    Cloudy,
    Rainy,
    Snowy,
    And,
    Cold,
    Cool,
    Warm,
    Hot,

    // Status vocabulary for provisioning overlays
    Connect,
    Connecting,
    ConnTo,
    Restart,
    Hotspot,
    Reset,
    Network,
}

impl PhraseToken {
    /// Cells this token lights on the board.
    pub const fn range(self) -> BoardRange {
        let (start, count) = match self {
            PhraseToken::ULDot => (0, 1),
            PhraseToken::URDot => (15, 1),
            PhraseToken::LLDot => (240, 1),
            PhraseToken::LRDot => (255, 1),
            PhraseToken::Its => (1, 4),
            PhraseToken::A => (6, 1),
            PhraseToken::Quarter => (8, 7),
            PhraseToken::Half => (32, 4),
            PhraseToken::Past => (37, 4),
            PhraseToken::To => (40, 2),
            PhraseToken::FiveMinute => (23, 4),
            PhraseToken::TenMinute => (27, 3),
            PhraseToken::TwentyMinute => (16, 6),
            PhraseToken::OneHour => (48, 3),
            PhraseToken::TwoHour => (51, 3),
            PhraseToken::ThreeHour => (54, 5),
            PhraseToken::FourHour => (43, 4),
            PhraseToken::FiveHour => (64, 4),
            PhraseToken::SixHour => (92, 3),
            PhraseToken::SevenHour => (59, 5),
            PhraseToken::EightHour => (67, 5),
            PhraseToken::NineHour => (88, 4),
            PhraseToken::TenHour => (86, 3),
            PhraseToken::ElevenHour => (80, 6),
            PhraseToken::Noon => (119, 4),
            PhraseToken::Midnight => (72, 8),
            PhraseToken::OClock => (96, 7),
            PhraseToken::At => (112, 2),
            PhraseToken::Night => (122, 5),
            PhraseToken::In => (104, 2),
            PhraseToken::The => (107, 3),
            PhraseToken::Morning => (128, 7),
            PhraseToken::Afternoon => (114, 9),
            PhraseToken::Evening => (135, 7),
            PhraseToken::Itll => (144, 5),
            PhraseToken::Be => (150, 2),
            PhraseToken::Clear => (167, 5),
            PhraseToken::Windy => (153, 5),
            PhraseToken::Partly => (160, 6),
            PhraseToken::Cloudy => (181, 6),
            PhraseToken::Rainy => (171, 5),
            PhraseToken::Snowy => (176, 5),
            PhraseToken::And => (188, 3),
            PhraseToken::Cold => (192, 4),
            PhraseToken::Cool => (196, 4),
            PhraseToken::Warm => (200, 4),
            PhraseToken::Hot => (204, 3),
            PhraseToken::Connect => (208, 7),
            PhraseToken::Connecting => (208, 13),
            PhraseToken::ConnTo => (221, 2),
            PhraseToken::Restart => (224, 8),
            PhraseToken::Hotspot => (232, 7),
            PhraseToken::Reset => (241, 5),
            PhraseToken::Network => (247, 8),
        };
        BoardRange { start, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TOKENS: [PhraseToken; 54] = [
        PhraseToken::ULDot,
        PhraseToken::URDot,
        PhraseToken::LLDot,
        PhraseToken::LRDot,
        PhraseToken::Its,
        PhraseToken::Half,
        PhraseToken::A,
        PhraseToken::Quarter,
        PhraseToken::TwentyMinute,
        PhraseToken::FiveMinute,
        PhraseToken::TenMinute,
        PhraseToken::Past,
        PhraseToken::To,
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
        PhraseToken::OClock,
        PhraseToken::At,
        PhraseToken::Night,
        PhraseToken::In,
        PhraseToken::The,
        PhraseToken::Morning,
        PhraseToken::Afternoon,
        PhraseToken::Evening,
        PhraseToken::Itll,
        PhraseToken::Be,
        PhraseToken::Clear,
        PhraseToken::Windy,
        PhraseToken::Partly,
        PhraseToken::Cloudy,
        PhraseToken::Rainy,
        PhraseToken::Snowy,
        PhraseToken::And,
        PhraseToken::Cold,
        PhraseToken::Cool,
        PhraseToken::Warm,
        PhraseToken::Hot,
        PhraseToken::Connect,
        PhraseToken::Connecting,
        PhraseToken::ConnTo,
        PhraseToken::Restart,
        PhraseToken::Hotspot,
        PhraseToken::Reset,
        PhraseToken::Network,
    ];

    #[test]
    fn test_ranges_stay_on_board() {
        for token in ALL_TOKENS {
            let r = token.range();
            assert!(r.count >= 1 && r.count <= 13, "{:?}", token);
            assert!(
                usize::from(r.start) + usize::from(r.count) <= BOARD_CELLS,
                "{:?} overruns the board",
                token
            );
        }
    }

    #[test]
    fn test_corner_dots() {
        assert_eq!(PhraseToken::ULDot.range(), BoardRange { start: 0, count: 1 });
        assert_eq!(PhraseToken::URDot.range(), BoardRange { start: 15, count: 1 });
        assert_eq!(PhraseToken::LLDot.range(), BoardRange { start: 240, count: 1 });
        assert_eq!(PhraseToken::LRDot.range(), BoardRange { start: 255, count: 1 });
    }
}
