//! Game configuration: session length, speed presets, page hooks and labels.
//!
//! Everything has a default matching the bundled page, so `GameConfig::default()`
//! is a complete, valid configuration. With the `serde_json` feature a page can
//! override any subset of fields through `mount_game_with_config`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

pub const DEFAULT_DURATION_SECS: u32 = 30;
pub const DEFAULT_INTERVAL_MS: u32 = 1000;
/// Period of the countdown tick. Not configurable: the timer display counts seconds.
pub const COUNTDOWN_PERIOD_MS: u32 = 1000;

/// One entry of the speed selector.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedPreset {
    pub label: String,
    pub interval_ms: u32,
}

impl SpeedPreset {
    pub fn new(label: &str, interval_ms: u32) -> Self {
        Self {
            label: label.to_string(),
            interval_ms,
        }
    }
}

/// Where the game finds its pieces in the page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DomHooks {
    pub cell_selector: String,
    pub score_id: String,
    pub timer_id: String,
    pub start_button_id: String,
    pub speed_select_id: String,
    /// CSS class marking the active cell.
    pub active_class: String,
}

impl Default for DomHooks {
    fn default() -> Self {
        Self {
            cell_selector: ".hole".to_string(),
            score_id: "score".to_string(),
            timer_id: "timer".to_string(),
            start_button_id: "start-button".to_string(),
            speed_select_id: "speed-select".to_string(),
            active_class: "up".to_string(),
        }
    }
}

/// User-facing strings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Labels {
    /// Start button text while a session runs.
    pub running: String,
    /// Start button text once a session has ended.
    pub play_again: String,
    /// End-of-session message; `{score}` is replaced by the final score.
    pub game_over: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            running: "Playing...".to_string(),
            play_again: "Play again!".to_string(),
            game_over: "Game over! Your score is {score} points!".to_string(),
        }
    }
}

impl Labels {
    pub fn game_over_message(&self, score: u32) -> String {
        self.game_over.replace("{score}", &score.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub total_duration_secs: u32,
    pub speeds: Vec<SpeedPreset>,
    /// Used when the selector holds a value that is not one of `speeds`.
    pub default_interval_ms: u32,
    pub hit_sound: String,
    /// `log` level filter name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub dom: DomHooks,
    pub labels: Labels,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_duration_secs: DEFAULT_DURATION_SECS,
            speeds: vec![
                SpeedPreset::new("Slow", 1000),
                SpeedPreset::new("Normal", 750),
                SpeedPreset::new("Fast", 500),
            ],
            default_interval_ms: DEFAULT_INTERVAL_MS,
            hit_sound: "assets/hit.mp3".to_string(),
            log_level: "info".to_string(),
            dom: DomHooks::default(),
            labels: Labels::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_duration_secs == 0 {
            return Err(GameError::InvalidConfig(
                "total_duration_secs must be positive".into(),
            ));
        }
        if self.speeds.is_empty() {
            return Err(GameError::InvalidConfig(
                "at least one speed preset is required".into(),
            ));
        }
        if let Some(p) = self.speeds.iter().find(|p| p.interval_ms == 0) {
            return Err(GameError::InvalidConfig(format!(
                "speed preset `{}` has a zero interval",
                p.label
            )));
        }
        if self.default_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "default_interval_ms must be positive".into(),
            ));
        }
        if self.dom.cell_selector.trim().is_empty() {
            return Err(GameError::InvalidConfig("cell_selector is empty".into()));
        }
        if self.dom.active_class.trim().is_empty() {
            return Err(GameError::InvalidConfig("active_class is empty".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level.parse().map_err(|_| {
            GameError::InvalidConfig(format!("unknown log level `{}`", self.log_level))
        })
    }

    /// Resolve the speed selector's raw value to a preset interval.
    pub fn interval_for(&self, raw: &str) -> Result<u32> {
        let wanted: u32 = raw
            .trim()
            .parse()
            .map_err(|_| GameError::UnknownSpeed(raw.to_string()))?;
        self.speeds
            .iter()
            .find(|p| p.interval_ms == wanted)
            .map(|p| p.interval_ms)
            .ok_or_else(|| GameError::UnknownSpeed(raw.to_string()))
    }

    /// Like [`interval_for`](Self::interval_for) but falls back to the default interval.
    pub fn interval_or_default(&self, raw: &str) -> u32 {
        match self.interval_for(raw) {
            Ok(ms) => ms,
            Err(err) => {
                log::warn!("{err}; using {} ms", self.default_interval_ms);
                self.default_interval_ms
            }
        }
    }
}
