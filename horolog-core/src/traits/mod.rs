//! Abstraction traits between the engine and its collaborators

mod clock;
mod render;

pub use clock::ClockSource;
pub use render::{InfoStep, LastShown, Renderer, STATUS_HOLD_MS};
