//! Renderer back ends for the Horolog clocks
//!
//! Three display variants share the phase driver in `horolog-core`:
//!
//! - **Quad digit** — a four-character seven-segment display with a
//!   colon and per-digit decimal points (time as `" 7:45"`, info views
//!   as fixed four-character codes).
//! - **Matrix** — a 32x8 dot-matrix panel; the main time is centered,
//!   longer views scroll across.
//! - **Word board** — a fixed 16x16 letter board where time and weather
//!   are lit as natural-language phrases.
//!
//! Each variant implements [`horolog_core::Renderer`] over a sink trait
//! describing the physical (or simulated) device; bus drivers live
//! behind those sinks.

#![no_std]
#![deny(unsafe_code)]

pub mod scroll;
pub mod segment;
pub mod sink;
pub mod variant;
pub mod wordboard;

pub use scroll::{ScrollEvent, ScrollRenderer};
pub use sink::{BoardSink, MatrixSink, QuadDigitSink};
pub use variant::{MatrixVariant, QuadDigitVariant, WordBoardVariant};
pub use wordboard::{BoardRange, LitMask, PhraseToken, TokenSet};
