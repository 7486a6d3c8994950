//! Transient status messages shown over the main view
//!
//! These originate from the excluded network/provisioning layer; the
//! display engine only decides how to present them. The enum is
//! non-exhaustive so every renderer keeps a fallback arm for codes it
//! does not recognize (they render a generic error, never fail).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status codes that may preempt the main or secondary view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum StatusMessage {
    /// Captive portal is up, waiting for Wi-Fi credentials
    NetConfig,
    /// Firmware banner at power-on
    Startup,
    /// Joining the configured network
    Connecting,
    /// Network join failed
    NetFail,
    /// Time or weather fetch failed
    UpdateFail,
    /// Confirm restart
    AskRestart,
    /// Confirm network reset
    AskResetNetwork,
    /// Second confirmation for network reset
    VerifyResetNetwork,
}
