// Recording fakes for driving the session controller natively.
#![allow(dead_code)]

use std::collections::HashSet;

use mole_strike::error::Result;
use mole_strike::session::collaborators::{
    Board, FeedbackPlayer, Hud, Scheduler, StartControl, Tick, TimerHandle,
};
use mole_strike::session::picker::{EntropySource, RandomSource};
use mole_strike::{SessionController, SessionSettings};

pub struct RecordingBoard {
    pub active: Vec<bool>,
    pub listeners_attached: bool,
    pub max_active_seen: usize,
}

impl RecordingBoard {
    pub fn new(cells: usize) -> Self {
        Self {
            active: vec![false; cells],
            listeners_attached: false,
            max_active_seen: 0,
        }
    }

    pub fn active_cells(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.then_some(i))
            .collect()
    }
}

impl Board for RecordingBoard {
    fn len(&self) -> usize {
        self.active.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
        let n = self.active.iter().filter(|a| **a).count();
        self.max_active_seen = self.max_active_seen.max(n);
    }

    fn attach_click_handlers(&mut self) {
        self.listeners_attached = true;
    }

    fn detach_click_handlers(&mut self) {
        self.listeners_attached = false;
    }
}

#[derive(Default)]
pub struct RecordingHud {
    pub score_text: String,
    pub timer_text: String,
    pub control: Option<StartControl>,
    pub notifications: Vec<u32>,
}

impl Hud for RecordingHud {
    fn show_score(&mut self, score: u32) {
        self.score_text = score.to_string();
    }

    fn show_time(&mut self, seconds: u32) {
        self.timer_text = seconds.to_string();
    }

    fn set_start_control(&mut self, state: StartControl) {
        self.control = Some(state);
    }

    fn announce_final_score(&mut self, score: u32) {
        self.notifications.push(score);
    }
}

#[derive(Default)]
pub struct SilentCue {
    pub restarts: u32,
}

impl FeedbackPlayer for SilentCue {
    fn restart(&mut self) {
        self.restarts += 1;
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    next: i32,
    pub live: HashSet<TimerHandle>,
    pub created: Vec<(Tick, u32)>,
    pub canceled: Vec<TimerHandle>,
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, tick: Tick, period_ms: u32) -> Result<TimerHandle> {
        self.next += 1;
        let handle = TimerHandle(self.next);
        self.live.insert(handle);
        self.created.push((tick, period_ms));
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.live.remove(&handle);
        self.canceled.push(handle);
    }
}

pub type TestGame<R = EntropySource> =
    SessionController<RecordingBoard, RecordingHud, SilentCue, ManualScheduler, R>;

pub fn game(cells: usize, secs: u32) -> TestGame {
    SessionController::new(
        RecordingBoard::new(cells),
        RecordingHud::default(),
        SilentCue::default(),
        ManualScheduler::default(),
        EntropySource::new(),
        secs,
    )
}

pub fn game_with_rng<R: RandomSource>(cells: usize, secs: u32, rng: R) -> TestGame<R> {
    SessionController::new(
        RecordingBoard::new(cells),
        RecordingHud::default(),
        SilentCue::default(),
        ManualScheduler::default(),
        rng,
        secs,
    )
}

pub fn settings(ms: u32) -> SessionSettings {
    SessionSettings {
        appearance_interval_ms: ms,
    }
}
