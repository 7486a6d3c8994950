//! Word board time/weather encoder
//!
//! The board is a fixed 16x16 grid of letters. Each displayable word
//! (or corner dot) occupies a contiguous run of cells; showing a phrase
//! means lighting the union of its words' runs over the static artwork.
//!
//! `table` holds the token-to-cells mapping; `encode` turns a
//! time-of-day and weather reading into the token set and the lit mask.

mod encode;
mod table;

pub use encode::{encode_status, encode_time, encode_weather, LitMask, TokenSet, MAX_TOKENS};
pub use table::{BoardRange, PhraseToken, BOARD_CELLS};
