//! Renderer trait
//!
//! One renderer per clock variant, selected once at construction. The
//! phase driver decides *what* to show and *when*; renderers decide
//! *how* it appears on their display.

use crate::message::StatusMessage;
use crate::traits::ClockSource;

/// Default hold time for a static status overlay, in milliseconds
pub const STATUS_HOLD_MS: u64 = 2000;

/// Fields of the last successfully drawn main view
///
/// The driver keeps this between ticks so an unchanged time never hits
/// the display bus twice. Values are the raw 24-hour sample plus the
/// renderer's indicator bits (PM dot and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LastShown {
    pub hour: u8,
    pub minute: u8,
    pub dots: u8,
}

/// One step of the secondary info cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InfoStep {
    Date,
    CurTemp,
    LowTemp,
    HighTemp,
}

/// Display back end capability set
pub trait Renderer {
    /// Draw the main time view.
    ///
    /// `last` holds what is currently on the display; the renderer skips
    /// the draw when nothing changed and `force` is not set. Returns the
    /// newly shown fields when a draw happened, None when suppressed.
    fn render_main(
        &mut self,
        now_ms: u64,
        clock: &dyn ClockSource,
        last: Option<&LastShown>,
        force: bool,
    ) -> Option<LastShown>;

    /// Draw a transient status overlay. Unknown codes render a generic
    /// error; this never fails.
    fn render_status(&mut self, now_ms: u64, msg: StatusMessage);

    /// Draw one step of the secondary info cycle.
    fn render_info(&mut self, now_ms: u64, step: InfoStep, clock: &dyn ClockSource);

    /// Map raw ambient brightness (0-255) to the display's native range.
    /// Out-of-range input is clamped, never an error.
    fn set_brightness(&mut self, raw: u8);

    /// How long a status overlay stays up before the driver returns to
    /// the main view. None means the renderer animates the overlay and
    /// reports completion through `service` instead.
    fn status_hold_ms(&self) -> Option<u64> {
        Some(STATUS_HOLD_MS)
    }

    /// Advance any running animation. Returns true when an animation
    /// finished on this call; the driver then returns to the main view.
    fn service(&mut self, now_ms: u64) -> bool {
        let _ = now_ms;
        false
    }
}
