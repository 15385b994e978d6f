//! Browser wiring for the session controller.
//!
//! `mount()` looks up the page elements, creates the JS callbacks once for the
//! lifetime of the page and parks the controller in a thread-local slot. Every
//! callback (appearance tick, countdown tick, cell click, start button) borrows
//! that slot for the duration of one event. Sessions only register and clear
//! intervals and listeners with those same function references, so no closure
//! is ever dropped while it may still run.

mod audio;
mod cells;
mod hud;
mod timers;

pub use audio::HitCue;
pub use cells::DomBoard;
pub use hud::DomHud;
pub use timers::IntervalScheduler;

use std::cell::RefCell;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlSelectElement, window};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::session::collaborators::Board;
use crate::session::picker::EntropySource;
use crate::session::{SessionController, SessionSettings};

type DomGame = SessionController<DomBoard, DomHud, HitCue, IntervalScheduler, EntropySource>;

thread_local! {
    static GAME: RefCell<Option<DomGame>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted game. Skips (with a warning) if the slot is
/// already borrowed by another callback or nothing is mounted.
fn with_game<T>(f: impl FnOnce(&mut DomGame) -> T) -> Option<T> {
    GAME.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            log::warn!("game busy; event dropped");
            None
        }
    })
}

fn is_mounted() -> bool {
    GAME.with(|cell| cell.try_borrow().map(|g| g.is_some()).unwrap_or(true))
}

/// Turn a closure into a plain JS function that lives as long as the page.
fn leak_callback<F>(f: F) -> Function
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let func: Function = closure.as_ref().unchecked_ref::<Function>().clone();
    closure.forget();
    func
}

fn element_by_id<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Result<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| GameError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| GameError::WrongElement {
            selector: format!("#{id}"),
            expected,
        })
}

/// Install the game into the current page.
pub fn mount(config: GameConfig) -> Result<()> {
    config.validate()?;
    if is_mounted() {
        return Err(GameError::AlreadyMounted);
    }
    log::set_max_level(config.level_filter()?);

    let win = window().ok_or_else(|| GameError::MissingElement("window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| GameError::MissingElement("document".into()))?;

    let score_el = element_by_id::<web_sys::Element>(&doc, &config.dom.score_id, "Element")?;
    let timer_el = element_by_id::<web_sys::Element>(&doc, &config.dom.timer_id, "Element")?;
    let start_button =
        element_by_id::<HtmlButtonElement>(&doc, &config.dom.start_button_id, "button")?;
    let speed_select =
        element_by_id::<HtmlSelectElement>(&doc, &config.dom.speed_select_id, "select")?;

    // Tick callbacks
    let appearance = leak_callback(|| {
        with_game(|g| g.appearance_tick());
    });
    let countdown = leak_callback(|| {
        with_game(|g| g.countdown_tick());
    });

    // One shared click listener, added to every cell while a session runs.
    let on_click = {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let Some(target) = evt.current_target() else { return };
            with_game(|g| {
                if let Some(idx) = g.board().index_of(&target) {
                    g.whack(idx);
                }
            });
        }) as Box<dyn FnMut(_)>);
        let func: Function = closure.as_ref().unchecked_ref::<Function>().clone();
        closure.forget();
        func
    };

    let board = DomBoard::from_document(
        &doc,
        &config.dom.cell_selector,
        &config.dom.active_class,
        on_click,
    )?;
    let hud = DomHud::new(
        win.clone(),
        score_el,
        timer_el,
        start_button.clone(),
        config.labels.clone(),
    );
    let cue = HitCue::new(&config.hit_sound)?;
    let scheduler = IntervalScheduler::new(win.clone(), appearance, countdown);

    let mut game = SessionController::new(
        board,
        hud,
        cue,
        scheduler,
        EntropySource::new(),
        config.total_duration_secs,
    );
    game.reset_displays();
    log::info!(
        "mole strike mounted: {} cells, {} s sessions",
        game.board().len(),
        game.total_duration_secs()
    );
    GAME.with(|cell| cell.replace(Some(game)));

    // Start button: the speed selector is read here, once per session.
    {
        let start = leak_callback(move || {
            let interval = config.interval_or_default(&speed_select.value());
            let settings = SessionSettings {
                appearance_interval_ms: interval,
            };
            if let Some(Err(err)) = with_game(|g| g.start(settings)) {
                log::error!("could not start session: {err}");
            }
        });
        start_button
            .add_event_listener_with_callback("click", &start)
            .map_err(|e| GameError::js("addEventListener", e))?;
    }

    Ok(())
}

#[wasm_bindgen]
pub fn is_session_active() -> bool {
    with_game(|g| g.is_active()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn current_score() -> Option<u32> {
    with_game(|g| g.score()).flatten()
}
