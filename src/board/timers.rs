// `setInterval` / `clearInterval` behind the `Scheduler` seam.

use js_sys::Function;
use web_sys::Window;

use crate::error::{GameError, Result};
use crate::session::collaborators::{Scheduler, Tick, TimerHandle};

/// Schedules the page-lifetime tick callbacks created at mount.
pub struct IntervalScheduler {
    window: Window,
    appearance: Function,
    countdown: Function,
}

impl IntervalScheduler {
    pub fn new(window: Window, appearance: Function, countdown: Function) -> Self {
        Self {
            window,
            appearance,
            countdown,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn every(&mut self, tick: Tick, period_ms: u32) -> Result<TimerHandle> {
        let callback = match tick {
            Tick::Appearance => &self.appearance,
            Tick::Countdown => &self.countdown,
        };
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback, timeout)
            .map(TimerHandle)
            .map_err(|e| GameError::js("setInterval", e))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.window.clear_interval_with_handle(handle.0);
    }
}
