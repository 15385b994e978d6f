//! Session controller: the Idle/Active state machine behind one timed play-through.
//!
//! The controller owns the run state and the two periodic timers and talks to
//! the page only through the traits in [`collaborators`]. A [`Session`] exists
//! exactly while the game is Active; `start()` builds it and `end()` drops it,
//! so nothing from a finished round leaks into the next one.

pub mod collaborators;
pub mod picker;

use crate::config::COUNTDOWN_PERIOD_MS;
use crate::error::Result;
use collaborators::{Board, FeedbackPlayer, Hud, Scheduler, StartControl, Tick, TimerHandle};
use picker::{RandomSource, pick_cell};

/// Per-session settings read from the speed selector at `start()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub appearance_interval_ms: u32,
}

/// Final numbers of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub duration_secs: u32,
    pub interval_ms: u32,
}

/// Mutable state of one running session.
#[derive(Debug)]
struct Session {
    score: u32,
    time_remaining: u32,
    interval_ms: u32,
    active_cell: Option<usize>, // cell currently showing the target
    last_cell: Option<usize>,   // previous pick, kept after a hit hides the target
    appearance: TimerHandle,
    countdown: TimerHandle,
}

pub struct SessionController<B, H, F, S, R> {
    board: B,
    hud: H,
    feedback: F,
    scheduler: S,
    rng: R,
    total_duration_secs: u32,
    session: Option<Session>,
}

impl<B, H, F, S, R> SessionController<B, H, F, S, R>
where
    B: Board,
    H: Hud,
    F: FeedbackPlayer,
    S: Scheduler,
    R: RandomSource,
{
    pub fn new(
        board: B,
        hud: H,
        feedback: F,
        scheduler: S,
        rng: R,
        total_duration_secs: u32,
    ) -> Self {
        Self {
            board,
            hud,
            feedback,
            scheduler,
            rng,
            total_duration_secs,
            session: None,
        }
    }

    /// Show the idle readout (score 0, full duration) before the first session.
    pub fn reset_displays(&mut self) {
        self.hud.show_score(0);
        self.hud.show_time(self.total_duration_secs);
    }

    /// Begin a session. No-op while one is already running.
    pub fn start(&mut self, settings: SessionSettings) -> Result<()> {
        if self.session.is_some() {
            log::debug!("start ignored: session already active");
            return Ok(());
        }

        let appearance = self
            .scheduler
            .every(Tick::Appearance, settings.appearance_interval_ms)?;
        let countdown = match self.scheduler.every(Tick::Countdown, COUNTDOWN_PERIOD_MS) {
            Ok(handle) => handle,
            Err(err) => {
                self.scheduler.cancel(appearance);
                return Err(err);
            }
        };

        self.session = Some(Session {
            score: 0,
            time_remaining: self.total_duration_secs,
            interval_ms: settings.appearance_interval_ms,
            active_cell: None,
            last_cell: None,
            appearance,
            countdown,
        });

        self.hud.show_score(0);
        self.hud.show_time(self.total_duration_secs);
        self.hud.set_start_control(StartControl::Running);
        self.board.attach_click_handlers();

        log::info!(
            "session started: {} cells, {} s, target moves every {} ms",
            self.board.len(),
            self.total_duration_secs,
            settings.appearance_interval_ms
        );
        Ok(())
    }

    /// Move the target to a new random cell.
    pub fn appearance_tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if self.board.is_empty() {
            log::warn!("board has no cells; nothing to activate");
            return;
        }
        if let Some(prev) = session.active_cell.take() {
            self.board.set_active(prev, false);
        }
        if let Some(idx) = pick_cell(self.board.len(), session.last_cell, &mut self.rng) {
            self.board.set_active(idx, true);
            session.active_cell = Some(idx);
            session.last_cell = Some(idx);
            log::trace!("target at cell {idx}");
        }
    }

    /// Count one second down; ends the session when time runs out.
    pub fn countdown_tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.time_remaining = session.time_remaining.saturating_sub(1);
        let remaining = session.time_remaining;
        self.hud.show_time(remaining);
        if remaining == 0 {
            self.end();
        }
    }

    /// Handle a click on cell `index`. Returns true on a hit.
    pub fn whack(&mut self, index: usize) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.active_cell != Some(index) {
            log::trace!("miss on cell {index}");
            return false;
        }
        session.score += 1;
        session.active_cell = None;
        let score = session.score;
        self.hud.show_score(score);
        self.board.set_active(index, false);
        self.feedback.restart();
        log::debug!("hit on cell {index}, score {score}");
        true
    }

    /// Stop the running session. Returns `None` when already idle.
    pub fn end(&mut self) -> Option<SessionSummary> {
        let session = self.session.take()?;
        self.scheduler.cancel(session.appearance);
        self.scheduler.cancel(session.countdown);

        for idx in 0..self.board.len() {
            self.board.set_active(idx, false);
        }
        self.board.detach_click_handlers();
        self.hud.set_start_control(StartControl::PlayAgain);

        let summary = SessionSummary {
            score: session.score,
            duration_secs: self.total_duration_secs,
            interval_ms: session.interval_ms,
        };
        log::info!("session ended with score {}", summary.score);
        self.hud.announce_final_score(summary.score);
        Some(summary)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn score(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.score)
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.time_remaining)
    }

    pub fn active_cell(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.active_cell)
    }

    pub fn total_duration_secs(&self) -> u32 {
        self.total_duration_secs
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
