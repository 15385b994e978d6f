//! Seams between the session controller and the page.
//!
//! The browser implementations live in `crate::board`; tests drive the
//! controller with recording fakes.

use crate::error::Result;

/// Fixed, ordered collection of clickable cells.
pub trait Board {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Toggle the "active" visual flag of one cell.
    fn set_active(&mut self, index: usize, active: bool);

    fn attach_click_handlers(&mut self);
    fn detach_click_handlers(&mut self);
}

/// Which face the start control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartControl {
    /// Disabled while a session runs.
    Running,
    /// Enabled again after a session ended.
    PlayAgain,
}

/// Score/timer text sinks, start control and the end-of-session notice.
pub trait Hud {
    fn show_score(&mut self, score: u32);
    fn show_time(&mut self, seconds: u32);
    fn set_start_control(&mut self, state: StartControl);
    /// Blocking notification carrying the final score.
    fn announce_final_score(&mut self, score: u32);
}

/// Hit cue. Each call restarts playback from the beginning.
pub trait FeedbackPlayer {
    fn restart(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Appearance,
    Countdown,
}

/// Opaque handle of a scheduled periodic action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Periodic timers with cancelable handles.
pub trait Scheduler {
    fn every(&mut self, tick: Tick, period_ms: u32) -> Result<TimerHandle>;
    fn cancel(&mut self, handle: TimerHandle);
}
