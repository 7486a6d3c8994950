//! Board-agnostic display engine for the Horolog clocks
//!
//! This crate contains all presentation logic that does not depend on a
//! specific display:
//!
//! - Civil time derivation from epoch seconds
//! - Weather condition/temperature classification
//! - Cooperative single-shot timer queue
//! - The display phase state machine and its driver
//! - Clock source and renderer traits
//!
//! The renderer back ends themselves (seven-segment, dot matrix, word
//! board) live in `horolog-display`; hardware buses and network polling
//! live outside both crates.

#![no_std]
#![deny(unsafe_code)]

pub mod message;
pub mod phase;
pub mod time;
pub mod timer;
pub mod traits;
pub mod weather;

pub use message::StatusMessage;
pub use phase::{ButtonAction, ButtonEvent, DisplayPhaseDriver, Event, Phase};
pub use time::TimeSample;
pub use timer::{Handle, TimerQueue};
pub use traits::{ClockSource, InfoStep, LastShown, Renderer};
pub use weather::{WeatherCondition, WeatherTemp};
