//! Draw Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::WinnersFragment;
use crate::reveal::RevealState;

/// Winner rows currently shown in the award table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WinnersList {
    fragment: Option<WinnersFragment>,
    /// Bumped on every replacement
    revision: u32,
}

impl WinnersList {
    /// Replace the shown rows. Whichever response lands last wins.
    pub fn replace(&mut self, fragment: WinnersFragment) {
        self.fragment = Some(fragment);
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn html(&self) -> String {
        self.fragment
            .as_ref()
            .map(|f| f.html().to_string())
            .unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.fragment.is_some()
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }
}

/// State of the drawing result page
#[derive(Clone, Debug, Default, Store)]
pub struct DrawState {
    /// Animation / result visibility
    pub reveal: RevealState,
    /// Winners fragment in the award table
    pub winners: WinnersList,
}

impl DrawState {
    pub fn new(reveal: RevealState) -> Self {
        Self {
            reveal,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DrawStore = Store<DrawState>;

// ========================
// Store Helper Functions
// ========================

/// Show a freshly fetched winners fragment
pub fn store_set_winners(store: &DrawStore, fragment: WinnersFragment) {
    store.winners().write().replace(fragment);
}

/// Move to the revealed state (no-op when already revealed)
pub fn store_reveal(store: &DrawStore) {
    let current = store.reveal().get_untracked();
    if current != current.reveal() {
        *store.reveal().write() = current.reveal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(html: &str) -> WinnersFragment {
        WinnersFragment(html.to_string())
    }

    #[test]
    fn test_empty_winners_list() {
        let list = WinnersList::default();
        assert!(!list.is_loaded());
        assert_eq!(list.html(), "");
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut list = WinnersList::default();
        // Redraw refresh resolves first, the initial load resolves after it
        list.replace(fragment("<tr><td>after redraw</td></tr>"));
        list.replace(fragment("<tr><td>initial</td></tr>"));
        assert_eq!(list.html(), "<tr><td>initial</td></tr>");
        assert_eq!(list.revision(), 2);
    }

    #[test]
    fn test_replace_with_identical_markup_still_bumps_revision() {
        let mut list = WinnersList::default();
        list.replace(fragment("<tr></tr>"));
        list.replace(fragment("<tr></tr>"));
        assert_eq!(list.revision(), 2);
    }

    #[test]
    fn test_draw_state_new() {
        let state = DrawState::new(RevealState::AwaitingReveal);
        assert_eq!(state.reveal, RevealState::AwaitingReveal);
        assert!(!state.winners.is_loaded());
    }
}
