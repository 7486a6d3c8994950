//! Scrolling text animation for narrow matrix panels
//!
//! The text starts fully off-screen to the right and moves left one
//! pixel per frame until its whole measured width has passed. Frame
//! cadence comes from the timer period, not from the offset. Completion
//! is reported exactly once through the returned [`ScrollEvent`];
//! restarting with a new string discards any pending completion.

use heapless::String;

/// Longest string a scroll can carry
pub const SCROLL_TEXT_MAX: usize = 128;

/// Outcome of one scroll poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollEvent {
    /// Not running, or the next frame is not due yet
    Idle,
    /// Advanced one pixel; redraw at the current offset
    Frame,
    /// The full text has passed; fired once per start
    Completed,
}

/// Animates a string across a fixed-width display
#[derive(Debug)]
pub struct ScrollRenderer {
    text: String<SCROLL_TEXT_MAX>,
    offset: i32,
    text_width: i32,
    display_width: i32,
    rate_ms: u64,
    next_frame_at: u64,
    active: bool,
}

impl ScrollRenderer {
    pub fn new(display_width: i32) -> Self {
        Self {
            text: String::new(),
            offset: 0,
            text_width: 0,
            display_width,
            rate_ms: 0,
            next_frame_at: 0,
            active: false,
        }
    }

    /// Begin scrolling `text`, replacing any scroll in progress.
    ///
    /// `text_width` is the measured pixel width in the panel font. A
    /// pending completion from the previous scroll is discarded, not
    /// delivered.
    pub fn start(&mut self, text: &str, text_width: i32, rate_ms: u64, now_ms: u64) {
        self.text.clear();
        let mut take = text.len().min(SCROLL_TEXT_MAX);
        while !text.is_char_boundary(take) {
            take -= 1;
        }
        let _ = self.text.push_str(&text[..take]);
        self.text_width = text_width;
        self.offset = -self.display_width;
        self.rate_ms = rate_ms.max(1);
        self.next_frame_at = now_ms + self.rate_ms;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop without delivering a completion.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Text currently scrolling
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current scroll offset; the text's left edge sits at `-offset()`.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Advance one frame if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> ScrollEvent {
        if !self.active || now_ms < self.next_frame_at {
            return ScrollEvent::Idle;
        }
        self.next_frame_at += self.rate_ms;

        if self.offset >= self.text_width {
            self.active = false;
            return ScrollEvent::Completed;
        }
        self.offset += 1;
        ScrollEvent::Frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_offscreen() {
        let mut s = ScrollRenderer::new(32);
        s.start("hello", 30, 50, 0);
        assert_eq!(s.offset(), -32);
        assert!(s.is_active());
    }

    #[test]
    fn test_frames_follow_rate() {
        let mut s = ScrollRenderer::new(32);
        s.start("hello", 30, 50, 0);

        assert_eq!(s.poll(49), ScrollEvent::Idle);
        assert_eq!(s.poll(50), ScrollEvent::Frame);
        assert_eq!(s.offset(), -31);
        // Same instant, next frame not due
        assert_eq!(s.poll(50), ScrollEvent::Idle);
        assert_eq!(s.poll(100), ScrollEvent::Frame);
        assert_eq!(s.offset(), -30);
    }

    #[test]
    fn test_completion_fires_once_at_text_width() {
        let mut s = ScrollRenderer::new(4);
        s.start("ab", 3, 10, 0);

        let mut completions = 0;
        let mut now = 0;
        for _ in 0..200 {
            now += 10;
            match s.poll(now) {
                ScrollEvent::Completed => {
                    completions += 1;
                    // Never before the full width has passed
                    assert!(s.offset() >= 3);
                }
                ScrollEvent::Frame => assert!(s.offset() <= 3),
                ScrollEvent::Idle => {}
            }
        }
        assert_eq!(completions, 1);
        assert!(!s.is_active());
    }

    #[test]
    fn test_restart_resets_and_discards_completion() {
        let mut s = ScrollRenderer::new(4);
        s.start("ab", 3, 10, 0);
        let _ = s.poll(10);
        let _ = s.poll(20);

        // Restart mid-flight
        s.start("cdef", 20, 10, 25);
        assert_eq!(s.offset(), -4);
        assert_eq!(s.text(), "cdef");

        // Old completion never surfaces; the new scroll finishes on its
        // own schedule
        let mut completions = 0;
        let mut now = 25;
        for _ in 0..100 {
            now += 10;
            if s.poll(now) == ScrollEvent::Completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_cancel_is_silent() {
        let mut s = ScrollRenderer::new(4);
        s.start("ab", 3, 10, 0);
        s.cancel();
        assert_eq!(s.poll(1000), ScrollEvent::Idle);
    }
}
