//! Display phase driver
//!
//! Owns the phase state machine, the last-shown memo, and the timers
//! that pace the secondary cycle and status overlays. The host loop
//! calls [`DisplayPhaseDriver::tick`] every iteration; button events and
//! status messages arrive through their own entry points. All work runs
//! synchronously on the caller's thread.

use super::events::{ButtonAction, ButtonEvent, Event};
use super::machine::Phase;
use crate::message::StatusMessage;
use crate::timer::{Handle, TimerQueue};
use crate::traits::{ClockSource, LastShown, Renderer};

/// Delay between secondary info steps
pub const INFO_STEP_MS: u64 = 2000;

/// Total secondary window before forcing return to the main view
pub const SECONDARY_WINDOW_MS: u64 = 8000;

/// Tokens matched back to actions when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum TimerToken {
    /// Advance the info chain
    InfoStep,
    /// Secondary window expired
    SecondaryDone,
    /// Status overlay hold finished
    StatusDone,
}

/// Timer-driven phase state machine shared by all clock variants
pub struct DisplayPhaseDriver<R: Renderer> {
    renderer: R,
    phase: Phase,
    last_shown: Option<LastShown>,
    force_redraw: bool,
    overlay_active: bool,
    timers: TimerQueue<TimerToken, 4>,
    info_timer: Option<Handle>,
    done_timer: Option<Handle>,
    select_button: u8,
}

impl<R: Renderer> DisplayPhaseDriver<R> {
    /// Create a driver in the Main phase with a forced first draw.
    pub fn new(renderer: R, select_button: u8) -> Self {
        Self {
            renderer,
            phase: Phase::Main,
            last_shown: None,
            force_redraw: true,
            overlay_active: false,
            timers: TimerQueue::new(),
            info_timer: None,
            done_timer: None,
            select_button,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Forward ambient brightness to the renderer.
    pub fn set_brightness(&mut self, raw: u8) {
        self.renderer.set_brightness(raw);
    }

    /// One host-loop iteration: fire due timers, advance animations, and
    /// redraw the main view when it is the active phase.
    pub fn tick(&mut self, now_ms: u64, clock: &dyn ClockSource) {
        while let Some(token) = self.timers.poll_expired(now_ms) {
            self.dispatch_timer(token, now_ms, clock);
        }

        if self.renderer.service(now_ms) {
            // A scrolled view just finished; nothing left to hold for
            self.return_to_main();
        }

        if self.phase == Phase::Main && !self.overlay_active {
            let force = core::mem::take(&mut self.force_redraw);
            if let Some(shown) =
                self.renderer
                    .render_main(now_ms, clock, self.last_shown.as_ref(), force)
            {
                self.last_shown = Some(shown);
            }
        }
    }

    /// React to a button event. Only clicks on the configured select
    /// button do anything.
    pub fn handle_button(&mut self, event: ButtonEvent, now_ms: u64, clock: &dyn ClockSource) {
        if event.button != self.select_button {
            return;
        }
        match event.action {
            ButtonAction::Click => self.start_secondary(now_ms, clock),
            // Long press belongs to the network-reset flow outside this
            // subsystem
            ButtonAction::LongPress => {}
        }
    }

    /// Show a status overlay immediately, preempting whatever is up.
    pub fn show_message(&mut self, msg: StatusMessage, now_ms: u64) {
        self.cancel_timers();
        self.phase = self.phase.transition(Event::StatusShown);
        self.overlay_active = true;
        self.renderer.render_status(now_ms, msg);

        if let Some(hold_ms) = self.renderer.status_hold_ms() {
            self.done_timer = self.timers.schedule_once(now_ms, hold_ms, TimerToken::StatusDone);
        }
        // else: the renderer animates the overlay and completion arrives
        // through service()
    }

    /// Enter (or restart) the secondary info cycle.
    fn start_secondary(&mut self, now_ms: u64, clock: &dyn ClockSource) {
        self.cancel_timers();
        self.overlay_active = false;
        self.phase = self.phase.transition(Event::Select);
        self.done_timer =
            self.timers
                .schedule_once(now_ms, SECONDARY_WINDOW_MS, TimerToken::SecondaryDone);
        self.advance_info(now_ms, clock);
    }

    /// Advance the info chain one step and render it.
    fn advance_info(&mut self, now_ms: u64, clock: &dyn ClockSource) {
        self.phase = self.phase.transition(Event::InfoElapsed);
        if let Some(step) = self.phase.info_step() {
            self.renderer.render_info(now_ms, step, clock);
            self.info_timer = self
                .timers
                .schedule_once(now_ms, INFO_STEP_MS, TimerToken::InfoStep);
        }
        // InfoDone: the chain halts here; the secondary timer brings us
        // back to Main
    }

    fn dispatch_timer(&mut self, token: TimerToken, now_ms: u64, clock: &dyn ClockSource) {
        match token {
            TimerToken::InfoStep => {
                self.info_timer = None;
                self.advance_info(now_ms, clock);
            }
            TimerToken::SecondaryDone => {
                self.done_timer = None;
                self.return_to_main();
            }
            TimerToken::StatusDone => {
                self.done_timer = None;
                self.return_to_main();
            }
        }
    }

    /// Return to the main phase with a forced redraw.
    fn return_to_main(&mut self) {
        self.cancel_timers();
        self.overlay_active = false;
        self.phase = self.phase.transition(Event::SecondaryTimeout);
        self.force_redraw = true;
    }

    fn cancel_timers(&mut self) {
        if let Some(h) = self.info_timer.take() {
            self.timers.cancel(h);
        }
        if let Some(h) = self.done_timer.take() {
            self.timers.cancel(h);
        }
    }
}
