//! Collapsible FAQ state for the policies page.
//!
//! Item ids are derived from the section title and item position, the same
//! scheme the rendered accordion uses for its DOM keys, so the set survives
//! serialization across the shell boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::event::typed_id;
use crate::model::PolicySection;

typed_id!(FaqItemId);

impl FaqItemId {
    #[must_use]
    pub fn for_item(section_title: &str, item_index: usize) -> Self {
        Self(format!("{section_title}-{item_index}"))
    }
}

fn all_item_ids(sections: &[PolicySection]) -> impl Iterator<Item = FaqItemId> + '_ {
    sections.iter().flat_map(|section| {
        section
            .items
            .iter()
            .enumerate()
            .map(|(index, _)| FaqItemId::for_item(&section.title, index))
    })
}

#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FaqState {
    open_items: HashSet<FaqItemId>,
}

impl FaqState {
    #[must_use]
    pub fn is_open(&self, id: &FaqItemId) -> bool {
        self.open_items.contains(id)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open_items.len()
    }

    /// Toggles one item. Unknown ids are ignored: the id space is generated
    /// from the content itself, so a miss means a stale or fabricated id.
    pub fn toggle(&mut self, sections: &[PolicySection], id: FaqItemId) -> bool {
        if !all_item_ids(sections).any(|known| known == id) {
            debug!(id = %id, "ignoring unknown faq item");
            return false;
        }
        if !self.open_items.remove(&id) {
            self.open_items.insert(id);
        }
        true
    }

    /// Opens every item across every section in one step.
    pub fn expand_all(&mut self, sections: &[PolicySection]) {
        self.open_items = all_item_ids(sections).collect();
    }

    pub fn collapse_all(&mut self) {
        self.open_items.clear();
    }
}
