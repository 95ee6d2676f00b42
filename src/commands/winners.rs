//! Winners Fragment
//!
//! Server-rendered winner rows for one gift.

use crate::models::{GiftId, WinnersFragment};
use crate::routes;
use super::get_text;

pub async fn load_winners_fragment(gift_id: &GiftId) -> Result<WinnersFragment, String> {
    let html = get_text(&routes::winners_fragment(gift_id)).await?;
    Ok(WinnersFragment(html))
}
