//! Events that drive display phase transitions

/// Events consumed by the phase transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Select button clicked
    Select,
    /// Info-step timer elapsed; advance the secondary chain
    InfoElapsed,
    /// Secondary window expired; back to the main view
    SecondaryTimeout,
    /// A status overlay preempted the display
    StatusShown,
    /// Status overlay hold finished; back to the main view
    StatusDone,
}

impl Event {
    /// Whether this event came from a timer rather than the user
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            Event::InfoElapsed | Event::SecondaryTimeout | Event::StatusDone
        )
    }
}

/// Physical button actions, as reported by the external button manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    Click,
    /// Reserved for the network-reset flow, which lives outside this
    /// subsystem; the driver ignores it
    LongPress,
}

/// A button action tagged with the button that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: u8,
    pub action: ButtonAction,
}
