//! Display phase state machine and its driver

mod driver;
mod events;
mod machine;

pub use driver::{DisplayPhaseDriver, INFO_STEP_MS, SECONDARY_WINDOW_MS};
pub use events::{ButtonAction, ButtonEvent, Event};
pub use machine::Phase;
