//! Draw Page App
//!
//! Runs the reveal and award table components on a drawing result page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AwardTable, RevealStage};
use crate::context::DrawContext;
use crate::models::GiftId;
use crate::page::DrawPage;
use crate::reveal::{RevealConfig, RevealState};
use crate::store::DrawState;

#[component]
pub fn DrawApp(
    page: DrawPage,
    gift_id: Result<GiftId, String>,
    initial: RevealState,
    config: RevealConfig,
) -> impl IntoView {
    let store = Store::new(DrawState::new(initial));
    let ctx = DrawContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    // Initial winners load, independent of the reveal timing
    match gift_id {
        Ok(gift_id) => spawn_local(async move {
            ctx.refresh_winners(&gift_id).await;
        }),
        Err(e) => {
            web_sys::console::error_1(&format!("[Winners] Error loading winners fragment: {}", e).into());
        }
    }

    view! {
        <RevealStage page=page.clone() config=config />
        <AwardTable page=page />
    }
}

/// Wire up a drawing result page. Both components work on the server-rendered
/// elements and add no nodes of their own.
pub fn mount_draw_page(page: DrawPage) {
    let data = page.read_data();
    let initial = RevealState::initial(data.drawn.pending_reveal);
    web_sys::console::log_1(
        &format!("[Reveal] gift={:?} initial={:?} delay={}ms", data.gift_id, initial, data.config.delay_ms).into(),
    );

    mount_to_body(move || {
        view! {
            <DrawApp
                page=page
                gift_id=data.gift_id
                initial=initial
                config=data.config
            />
        }
    });
}
