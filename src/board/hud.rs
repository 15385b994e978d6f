// Score/timer readouts, start button and the end-of-session alert.

use web_sys::{Element, HtmlButtonElement, Window};

use crate::config::Labels;
use crate::session::collaborators::{Hud, StartControl};

pub struct DomHud {
    window: Window,
    score: Element,
    timer: Element,
    start_button: HtmlButtonElement,
    labels: Labels,
}

impl DomHud {
    pub fn new(
        window: Window,
        score: Element,
        timer: Element,
        start_button: HtmlButtonElement,
        labels: Labels,
    ) -> Self {
        Self {
            window,
            score,
            timer,
            start_button,
            labels,
        }
    }
}

impl Hud for DomHud {
    fn show_score(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn show_time(&mut self, seconds: u32) {
        self.timer.set_text_content(Some(&seconds.to_string()));
    }

    fn set_start_control(&mut self, state: StartControl) {
        let (label, disabled) = match state {
            StartControl::Running => (&self.labels.running, true),
            StartControl::PlayAgain => (&self.labels.play_again, false),
        };
        self.start_button.set_text_content(Some(label));
        self.start_button.set_disabled(disabled);
    }

    fn announce_final_score(&mut self, score: u32) {
        let msg = self.labels.game_over_message(score);
        if let Err(e) = self.window.alert_with_message(&msg) {
            log::warn!("alert failed: {e:?}");
        }
    }
}
