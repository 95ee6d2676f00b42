//! Reveal Stage Component
//!
//! Keeps the animation, gift container and award table in line with the
//! reveal state, and flips the state once the animation is over.

use leptos::prelude::*;

use crate::context::use_draw_context;
use crate::page::DrawPage;
use crate::reveal::RevealConfig;
use crate::store::{store_reveal, DrawStateStoreFields};

#[component]
pub fn RevealStage(page: DrawPage, config: RevealConfig) -> impl IntoView {
    let store = use_draw_context().store;

    if !store.reveal().get_untracked().is_revealed() {
        page.watch_animation(config.delay_ms, move || store_reveal(&store));
    }

    Effect::new(move |_| {
        let state = store.reveal().get();
        page.apply(state.visibility());
    });
}
