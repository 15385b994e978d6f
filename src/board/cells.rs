// DOM-backed board: the `.hole` elements of the page.

use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlElement};

use crate::error::{GameError, Result};
use crate::session::collaborators::Board;

pub struct DomBoard {
    cells: Vec<HtmlElement>,
    active_class: String,
    on_click: Function,
}

impl DomBoard {
    /// Collect every element matching `selector`, in document order.
    pub fn from_document(
        doc: &Document,
        selector: &str,
        active_class: &str,
        on_click: Function,
    ) -> Result<Self> {
        let nodes = doc
            .query_selector_all(selector)
            .map_err(|e| GameError::js("querySelectorAll", e))?;
        let mut cells = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let el: HtmlElement = node.dyn_into().map_err(|_| GameError::WrongElement {
                selector: selector.to_string(),
                expected: "HtmlElement",
            })?;
            cells.push(el);
        }
        if cells.is_empty() {
            return Err(GameError::EmptyBoard(selector.to_string()));
        }
        Ok(Self {
            cells,
            active_class: active_class.to_string(),
            on_click,
        })
    }

    /// Position of the cell an event listener fired on.
    pub fn index_of(&self, target: &EventTarget) -> Option<usize> {
        let target: &JsValue = target.as_ref();
        self.cells.iter().position(|c| {
            let cell: &JsValue = c.as_ref();
            cell == target
        })
    }
}

impl Board for DomBoard {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        let Some(cell) = self.cells.get(index) else {
            log::warn!("set_active on missing cell {index}");
            return;
        };
        let classes = cell.class_list();
        let res = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(e) = res {
            log::warn!("classList update on cell {index} failed: {e:?}");
        }
    }

    fn attach_click_handlers(&mut self) {
        for (i, cell) in self.cells.iter().enumerate() {
            if let Err(e) = cell.add_event_listener_with_callback("click", &self.on_click) {
                log::warn!("addEventListener on cell {i} failed: {e:?}");
            }
        }
    }

    fn detach_click_handlers(&mut self) {
        for (i, cell) in self.cells.iter().enumerate() {
            if let Err(e) = cell.remove_event_listener_with_callback("click", &self.on_click) {
                log::warn!("removeEventListener on cell {i} failed: {e:?}");
            }
        }
    }
}
