//! Redraw Command
//!
//! Asks the server to re-select the winner for one employee and gift.

use crate::models::{RedrawOutcome, RedrawRequest, RedrawResponse};
use crate::routes;
use super::post_json;

pub async fn redraw(request: &RedrawRequest) -> Result<RedrawOutcome, String> {
    let result = post_json(routes::REDRAW, request).await?;
    let response: RedrawResponse = serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to parse redraw response: {}", e))?;
    Ok(response.into())
}
