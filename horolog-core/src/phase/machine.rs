//! Phase transition table
//!
//! What is on the display is a function of the current phase and an
//! event. The table is total: every (phase, event) pair maps to exactly
//! one next phase, defaulting to "stay put".

use super::events::Event;
use crate::traits::InfoStep;

/// Active member of the display state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Default view: the current time
    Main,
    /// Secondary cycle entered; first info step not yet shown
    Secondary,
    /// Showing the calendar date
    InfoDate,
    /// Showing the current temperature
    InfoCurTemp,
    /// Showing the forecast low
    InfoLowTemp,
    /// Showing the forecast high
    InfoHighTemp,
    /// Info chain exhausted; waiting out the secondary window
    InfoDone,
}

impl Phase {
    /// Process an event and return the next phase.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            // A click (re)starts the secondary cycle from any phase
            (_, Select) => Secondary,

            // Info chain advances one step per timer firing and parks
            // at InfoDone
            (Secondary, InfoElapsed) => InfoDate,
            (InfoDate, InfoElapsed) => InfoCurTemp,
            (InfoCurTemp, InfoElapsed) => InfoLowTemp,
            (InfoLowTemp, InfoElapsed) => InfoHighTemp,
            (InfoHighTemp, InfoElapsed) => InfoDone,
            (InfoDone, InfoElapsed) => InfoDone,

            // A status overlay preempts whatever is up; the overlay
            // itself is not a phase, so the machine parks at Main
            (_, StatusShown) => Main,

            // Both return paths lead home no matter how far the chain got
            (_, SecondaryTimeout) => Main,
            (_, StatusDone) => Main,

            // Default: stay in current phase
            _ => self,
        }
    }

    /// The info step rendered in this phase, if any
    pub fn info_step(self) -> Option<InfoStep> {
        match self {
            Phase::InfoDate => Some(InfoStep::Date),
            Phase::InfoCurTemp => Some(InfoStep::CurTemp),
            Phase::InfoLowTemp => Some(InfoStep::LowTemp),
            Phase::InfoHighTemp => Some(InfoStep::HighTemp),
            _ => None,
        }
    }

    /// Whether this phase belongs to the secondary info cycle
    pub fn in_secondary(self) -> bool {
        !matches!(self, Phase::Main)
    }
}
