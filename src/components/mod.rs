//! UI Components
//!
//! Leptos components mounted into the drawing result page.

mod award_table;
mod reveal_stage;

pub use award_table::AwardTable;
pub use reveal_stage::RevealStage;
