use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;

use crate::error::{GameError, Result};
use crate::session::collaborators::FeedbackPlayer;

/// Hit sound. A new hit rewinds and replays, cutting off the previous one.
pub struct HitCue {
    audio: HtmlAudioElement,
    // Attached to every `play()` promise; autoplay policies and missing files reject it.
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl HitCue {
    pub fn new(src: &str) -> Result<Self> {
        let audio =
            HtmlAudioElement::new_with_src(src).map_err(|e| GameError::js("new Audio", e))?;
        let on_reject = Closure::wrap(Box::new(|err: JsValue| {
            log::warn!("hit sound playback rejected: {err:?}");
        }) as Box<dyn FnMut(JsValue)>);
        Ok(Self { audio, on_reject })
    }
}

impl FeedbackPlayer for HitCue {
    fn restart(&mut self) {
        self.audio.set_current_time(0.0);
        match self.audio.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_reject);
            }
            Err(e) => log::warn!("hit sound playback failed: {e:?}"),
        }
    }
}
