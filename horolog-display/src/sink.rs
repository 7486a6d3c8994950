//! Display sink traits
//!
//! One trait per physical display form. Implementations wrap the actual
//! bus driver (or a simulator); writes are synchronous fire-and-forget
//! and are never retried. Intensity setters take the display's native
//! range; the variants do the ambient-to-native mapping.

use crate::wordboard::LitMask;

/// Four-character seven-segment display with colon and per-digit dots
pub trait QuadDigitSink {
    /// Show exactly four characters. `dot` lights the rightmost
    /// digit's decimal point (the PM indicator); `colon` lights the
    /// center colon.
    fn show(&mut self, chars: &str, dot: bool, colon: bool);

    /// Native intensity, 0-31.
    fn set_intensity(&mut self, level: u8);
}

/// Narrow dot-matrix panel addressed in pixels
pub trait MatrixSink {
    /// Panel width in pixels.
    fn width(&self) -> i32;

    /// Measured pixel width of `text` in the panel font.
    fn text_width(&self, text: &str) -> i32;

    /// Clear the panel and draw `text` with its left edge at `x`
    /// (may be negative or past the right edge).
    fn draw_text(&mut self, x: i32, text: &str);

    /// Native intensity, 0-15.
    fn set_intensity(&mut self, level: u8);
}

/// 256-cell word board, redrawn whole every frame
pub trait BoardSink {
    /// Redraw the board; unlit cells cover the artwork, lit cells show
    /// through.
    fn draw(&mut self, mask: &LitMask);

    /// Native intensity, 0-31.
    fn set_intensity(&mut self, level: u8);
}
