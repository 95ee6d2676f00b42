//! Drawing Group Navigation
//!
//! Sends the browser to the page of the drawing group picked in a selector.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::models::DrawingGroup;
use crate::routes;

/// Selectors wired up at startup
pub const GROUP_SELECT_SELECTOR: &str = "select[name=\"drawing_groups\"]";

/// Full-page navigation to the page for `raw`
pub fn navigate_to_group(raw: &str) {
    let url = routes::group_page(DrawingGroup::parse(raw));
    web_sys::console::log_1(&format!("[Nav] {:?} -> {}", raw, url).into());
    let result = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global window"))
        .and_then(|w| w.location().set_href(&url));
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

fn event_value(event: &web_sys::Event) -> Option<String> {
    let target = event.target()?;
    js_sys::Reflect::get(&target, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
}

/// Kept for pages that wire `onchange="drawing_groups_onchange_handler(event)"`
#[wasm_bindgen]
pub fn drawing_groups_onchange_handler(event: web_sys::Event) {
    match event_value(&event) {
        Some(value) => navigate_to_group(&value),
        None => web_sys::console::error_1(&"[Nav] change event without a value".into()),
    }
}

/// Attach a change listener to every group selector without an inline handler
pub fn bind_group_selectors(document: &Document) {
    let selects = match document.query_selector_all(GROUP_SELECT_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            web_sys::console::error_1(&e);
            return;
        }
    };

    for i in 0..selects.length() {
        let Some(select) = selects.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if select.has_attribute("onchange") {
            continue;
        }
        let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
            drawing_groups_onchange_handler(event);
        }) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(e) = select.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref()) {
            web_sys::console::error_1(&e);
        }
        handler.forget();
    }
}
