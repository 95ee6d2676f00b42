//! Draw Page Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands;
use crate::models::{GiftId, RedrawOutcome, RedrawRequest};
use crate::store::{store_set_winners, DrawStore};

/// What to do after `POST /redraw` answered (or failed to)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedrawFollowUp {
    /// Reload the winners of this gift
    Refresh(GiftId),
    /// Leave the table as it is and log the reason
    Keep(String),
}

pub fn redraw_follow_up(result: Result<RedrawOutcome, String>, request: &RedrawRequest) -> RedrawFollowUp {
    match result {
        Ok(RedrawOutcome::Success) => RedrawFollowUp::Refresh(request.gift_id.clone()),
        Ok(RedrawOutcome::Failure { reason }) => RedrawFollowUp::Keep(format!("Redraw failed: {}", reason)),
        Err(e) => RedrawFollowUp::Keep(format!("Error: {}", e)),
    }
}

/// Page-wide state and actions provided via context
#[derive(Clone, Copy)]
pub struct DrawContext {
    /// Reveal and winners state
    pub store: DrawStore,
}

impl DrawContext {
    pub fn new(store: DrawStore) -> Self {
        Self { store }
    }

    /// Fetch the winners fragment and show it. Failures leave the table as is.
    pub async fn refresh_winners(&self, gift_id: &GiftId) {
        match commands::load_winners_fragment(gift_id).await {
            Ok(fragment) => {
                web_sys::console::log_1(
                    &format!("[Winners] Loaded fragment for gift {} ({} bytes)", gift_id, fragment.html().len()).into(),
                );
                store_set_winners(&self.store, fragment);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Winners] Error loading winners fragment: {}", e).into());
            }
        }
    }

    /// Redraw one winner, then reload the rows of that gift
    pub async fn redraw(&self, request: RedrawRequest) {
        web_sys::console::log_1(
            &format!("[Redraw] employee={} gift={}", request.employee_code.as_str(), request.gift_id).into(),
        );
        let result = commands::redraw(&request).await;
        match redraw_follow_up(result, &request) {
            RedrawFollowUp::Refresh(gift_id) => self.refresh_winners(&gift_id).await,
            RedrawFollowUp::Keep(reason) => {
                web_sys::console::error_1(&format!("[Redraw] {}", reason).into());
            }
        }
    }
}

pub fn use_draw_context() -> DrawContext {
    expect_context::<DrawContext>()
}
