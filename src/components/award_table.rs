//! Award Table Component
//!
//! Puts the winners fragment straight into `#award-table` and serves every
//! reassign button inside it through one click listener on the table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_draw_context;
use crate::models::RedrawRequest;
use crate::page::DrawPage;
use crate::store::DrawStateStoreFields;

pub const REASSIGN_BUTTON_SELECTOR: &str = ".reassign-btn";
pub const EMPLOYEE_CODE_ATTR: &str = "data-employee-code";
pub const BUTTON_GIFT_ID_ATTR: &str = "data-gift-id";

/// First node on the way from the click target up to (not including) the
/// table that is a reassign button
fn nearest_reassign_button<N>(
    path: impl IntoIterator<Item = N>,
    is_table: impl Fn(&N) -> bool,
    is_button: impl Fn(&N) -> bool,
) -> Option<N> {
    path.into_iter()
        .take_while(|node| !is_table(node))
        .find(|node| is_button(node))
}

/// Reassign button the click landed on, if any
fn reassign_button(ev: &web_sys::MouseEvent, table: &web_sys::Element) -> Option<web_sys::Element> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    nearest_reassign_button(
        std::iter::successors(Some(target), |el| el.parent_element()),
        |el| el == table,
        |el| el.matches(REASSIGN_BUTTON_SELECTOR).unwrap_or(false),
    )
}

#[component]
pub fn AwardTable(page: DrawPage) -> impl IntoView {
    let ctx = use_draw_context();
    let store = ctx.store;

    page.on_award_table_click(move |ev, table| {
        let Some(button) = reassign_button(&ev, table) else { return };
        ev.prevent_default();

        let request = RedrawRequest::from_attributes(
            button.get_attribute(EMPLOYEE_CODE_ATTR),
            button.get_attribute(BUTTON_GIFT_ID_ATTR),
        );
        match request {
            Ok(request) => {
                spawn_local(async move {
                    ctx.redraw(request).await;
                });
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Redraw] Ignoring button: {}", e).into());
            }
        }
    });

    // Untouched until the first fragment arrives
    Effect::new(move |_| {
        store.winners().with(|winners| {
            if winners.is_loaded() {
                page.set_award_table_html(&winners.html(), winners.revision());
            }
        });
    });
}
