//! Gallery filter engine and lightbox navigator.
//!
//! All state lives in [`GalleryState`]; the filtered sequence is never
//! cached, it is re-derived from `(images, selected_category, search_term)`
//! on demand. The lightbox cursor always indexes into the *current* filtered
//! sequence, and every effective filter change closes it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::event::CategoryId;
use crate::model::{GalleryCategory, GalleryImage};

#[derive(Default, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

/// Lightbox cursor. `Open(i)` indexes into the current filtered sequence.
#[derive(Default, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

impl Lightbox {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open(i) => Some(i),
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GalleryError {
    /// Opening the lightbox outside the filtered sequence is a caller bug,
    /// not a user-facing condition. Boundary next/prev are no-ops instead.
    #[error("lightbox index {index} out of range for {len} filtered images")]
    InvalidIndex { index: usize, len: usize },
}

/// The category and search predicates, applied in input order.
///
/// Pure and restartable: the filter inputs are captured by value, so the
/// returned iterator borrows only `images` and can be recomputed any number
/// of times with identical results, even after the filter state moves on.
pub fn filtered_images<'a>(
    images: &'a [GalleryImage],
    selected_category: &CategoryId,
    search_term: &str,
) -> impl Iterator<Item = &'a GalleryImage> + 'a {
    let category = selected_category.clone();
    let needle = search_term.to_lowercase();
    images.iter().filter(move |image| {
        let matches_category = category.is_all() || image.category == category;
        let matches_search = needle.is_empty()
            || image.title.to_lowercase().contains(&needle)
            || image.description.to_lowercase().contains(&needle);
        matches_category && matches_search
    })
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub selected_category: CategoryId,
    pub search_term: String,
    pub display_mode: DisplayMode,
    pub lightbox: Lightbox,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            selected_category: CategoryId::all(),
            search_term: String::new(),
            display_mode: DisplayMode::default(),
            lightbox: Lightbox::default(),
        }
    }
}

impl GalleryState {
    /// The current filtered sequence over `images`.
    pub fn filtered<'a>(
        &self,
        images: &'a [GalleryImage],
    ) -> impl Iterator<Item = &'a GalleryImage> + 'a {
        filtered_images(images, &self.selected_category, &self.search_term)
    }

    fn filtered_len(&self, images: &[GalleryImage]) -> usize {
        self.filtered(images).count()
    }

    /// Selects a category filter. Unknown ids are rejected silently: the
    /// category set is a closed, internally generated enum in practice, so a
    /// miss is not worth surfacing. Never touches the search term.
    ///
    /// Returns whether the state changed.
    pub fn select_category(
        &mut self,
        categories: &[GalleryCategory],
        category: CategoryId,
    ) -> bool {
        let known = category.is_all() || categories.iter().any(|c| c.id == category);
        if !known {
            debug!(category = %category, "ignoring unknown gallery category");
            return false;
        }
        if self.selected_category == category {
            return false;
        }
        self.selected_category = category;
        self.close_lightbox_on_filter_change();
        true
    }

    /// Stores the search term verbatim: no trimming, no length limit, empty
    /// means "no search filter". Returns whether the state changed.
    pub fn set_search_term(&mut self, term: String) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term;
        self.close_lightbox_on_filter_change();
        true
    }

    /// Cosmetic only: never affects the filtered sequence or the lightbox.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        if self.display_mode == mode {
            return false;
        }
        self.display_mode = mode;
        true
    }

    /// Resets both filter axes in one step, so no intermediate state is ever
    /// observable. Returns whether the state changed.
    pub fn clear_filters(&mut self) -> bool {
        if self.selected_category.is_all() && self.search_term.is_empty() {
            return false;
        }
        self.selected_category = CategoryId::all();
        self.search_term.clear();
        self.close_lightbox_on_filter_change();
        true
    }

    /// Opens the lightbox at `index` within the current filtered sequence.
    pub fn open_lightbox(
        &mut self,
        images: &[GalleryImage],
        index: usize,
    ) -> Result<(), GalleryError> {
        let len = self.filtered_len(images);
        if index >= len {
            warn!(index, len, "lightbox opened out of range");
            return Err(GalleryError::InvalidIndex { index, len });
        }
        self.lightbox = Lightbox::Open(index);
        Ok(())
    }

    /// Steps forward. No wraparound; at the last image this is a no-op,
    /// because clicking "next" on the last photo is routine, not an error.
    pub fn lightbox_next(&mut self, images: &[GalleryImage]) -> bool {
        let Lightbox::Open(index) = self.lightbox else {
            return false;
        };
        if index + 1 >= self.filtered_len(images) {
            debug!(index, "lightbox already at last image");
            return false;
        }
        self.lightbox = Lightbox::Open(index + 1);
        true
    }

    /// Steps backward. No wraparound; at the first image this is a no-op.
    pub fn lightbox_prev(&mut self) -> bool {
        let Lightbox::Open(index) = self.lightbox else {
            return false;
        };
        if index == 0 {
            debug!("lightbox already at first image");
            return false;
        }
        self.lightbox = Lightbox::Open(index - 1);
        true
    }

    pub fn close_lightbox(&mut self) -> bool {
        if self.lightbox.is_open() {
            self.lightbox = Lightbox::Closed;
            return true;
        }
        false
    }

    // Mutating the filtered sequence under an open lightbox would leave the
    // cursor pointing at an arbitrary (or out-of-range) image, so any
    // effective filter change closes it outright.
    fn close_lightbox_on_filter_change(&mut self) {
        self.lightbox = Lightbox::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ImageId;

    fn image(id: &str, category: &str, title: &str, description: &str) -> GalleryImage {
        GalleryImage {
            id: ImageId::new(id),
            src: format!("/images/{id}.jpg"),
            alt: title.to_string(),
            category: CategoryId::new(category),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn fixture_images() -> Vec<GalleryImage> {
        vec![
            image("1", "cabins", "Cabin Area", "Cozy cabins under the pines"),
            image("2", "sites", "RV Sites", "Full hookup pull-through sites"),
            image("3", "sites", "Tent Meadow", "Shaded tent sites by the creek"),
        ]
    }

    fn fixture_categories() -> Vec<GalleryCategory> {
        vec![
            GalleryCategory {
                id: CategoryId::all(),
                name: "All Photos".into(),
                count: 3,
            },
            GalleryCategory {
                id: CategoryId::new("cabins"),
                name: "Cabins".into(),
                count: 1,
            },
            GalleryCategory {
                id: CategoryId::new("sites"),
                name: "Campsites & RV Sites".into(),
                count: 2,
            },
        ]
    }

    mod filtering {
        use super::*;

        #[test]
        fn no_filters_returns_everything_in_order() {
            let images = fixture_images();
            let state = GalleryState::default();
            let ids: Vec<&str> = state.filtered(&images).map(|i| i.id.as_str()).collect();
            assert_eq!(ids, ["1", "2", "3"]);
        }

        #[test]
        fn search_is_case_insensitive_over_title_and_description() {
            let images = fixture_images();
            let matched: Vec<&str> =
                filtered_images(&images, &CategoryId::all(), "CABIN")
                    .map(|i| i.id.as_str())
                    .collect();
            assert_eq!(matched, ["1"]);

            // "creek" only appears in a description.
            let matched: Vec<&str> =
                filtered_images(&images, &CategoryId::all(), "creek")
                    .map(|i| i.id.as_str())
                    .collect();
            assert_eq!(matched, ["3"]);
        }

        #[test]
        fn category_filter_is_exact() {
            let images = fixture_images();
            let matched: Vec<&str> =
                filtered_images(&images, &CategoryId::new("sites"), "")
                    .map(|i| i.id.as_str())
                    .collect();
            assert_eq!(matched, ["2", "3"]);
        }

        #[test]
        fn both_predicates_combine() {
            let images = fixture_images();
            let matched: Vec<&str> =
                filtered_images(&images, &CategoryId::new("sites"), "tent")
                    .map(|i| i.id.as_str())
                    .collect();
            assert_eq!(matched, ["3"]);
        }

        #[test]
        fn recomputation_is_idempotent() {
            let images = fixture_images();
            let state = GalleryState {
                selected_category: CategoryId::new("sites"),
                search_term: "site".into(),
                ..GalleryState::default()
            };
            let first: Vec<&GalleryImage> = state.filtered(&images).collect();
            let second: Vec<&GalleryImage> = state.filtered(&images).collect();
            assert_eq!(first, second);
        }

        #[test]
        fn collected_results_outlive_the_filter_state() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            let before: Vec<&GalleryImage> = state.filtered(&images).collect();

            // The collected refs borrow only the records, so the filter
            // state is free to change underneath them.
            state.set_search_term("cabin".into());
            assert_eq!(before.len(), images.len());
        }

        #[test]
        fn zero_matches_is_a_valid_outcome() {
            let images = fixture_images();
            let state = GalleryState {
                search_term: "waterslide".into(),
                ..GalleryState::default()
            };
            assert_eq!(state.filtered(&images).count(), 0);
        }
    }

    mod filter_mutations {
        use super::*;

        #[test]
        fn unknown_category_is_a_silent_noop() {
            let categories = fixture_categories();
            let mut state = GalleryState::default();
            assert!(!state.select_category(&categories, CategoryId::new("treehouses")));
            assert!(state.selected_category.is_all());
        }

        #[test]
        fn selecting_a_category_keeps_the_search_term() {
            let categories = fixture_categories();
            let mut state = GalleryState::default();
            assert!(state.set_search_term("lake".into()));
            assert!(state.select_category(&categories, CategoryId::new("cabins")));
            assert_eq!(state.search_term, "lake");
        }

        #[test]
        fn search_term_is_stored_verbatim() {
            let mut state = GalleryState::default();
            state.set_search_term("  Cabin  ".into());
            assert_eq!(state.search_term, "  Cabin  ");
        }

        #[test]
        fn clear_filters_resets_both_axes() {
            let categories = fixture_categories();
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.select_category(&categories, CategoryId::new("sites"));
            state.set_search_term("xyz".into());

            assert!(state.clear_filters());
            assert!(state.selected_category.is_all());
            assert!(state.search_term.is_empty());
            assert_eq!(state.filtered(&images).count(), images.len());
        }

        #[test]
        fn clear_filters_on_pristine_state_changes_nothing() {
            let mut state = GalleryState::default();
            assert!(!state.clear_filters());
        }

        #[test]
        fn display_mode_does_not_touch_the_filtered_sequence() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.set_display_mode(DisplayMode::List);
            assert_eq!(state.filtered(&images).count(), images.len());
            assert_eq!(state.display_mode, DisplayMode::List);
        }
    }

    mod lightbox {
        use super::*;

        #[test]
        fn open_within_range() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            assert!(state.open_lightbox(&images, 2).is_ok());
            assert_eq!(state.lightbox, Lightbox::Open(2));
        }

        #[test]
        fn open_out_of_range_is_an_error() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            assert_eq!(
                state.open_lightbox(&images, 3),
                Err(GalleryError::InvalidIndex { index: 3, len: 3 })
            );
            assert_eq!(state.lightbox, Lightbox::Closed);
        }

        #[test]
        fn open_respects_the_filtered_sequence_length() {
            let images = fixture_images();
            let mut state = GalleryState {
                selected_category: CategoryId::new("cabins"),
                ..GalleryState::default()
            };
            // Only one cabin image, so index 1 is out of range even though
            // the full record set has three.
            assert!(state.open_lightbox(&images, 1).is_err());
            assert!(state.open_lightbox(&images, 0).is_ok());
        }

        #[test]
        fn stepping_is_bounded_with_no_wraparound() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.open_lightbox(&images, 0).unwrap();

            // prev at the first image is a no-op
            assert!(!state.lightbox_prev());
            assert_eq!(state.lightbox, Lightbox::Open(0));

            assert!(state.lightbox_next(&images));
            assert!(state.lightbox_next(&images));
            assert_eq!(state.lightbox, Lightbox::Open(2));

            // next at the last image is a no-op
            assert!(!state.lightbox_next(&images));
            assert_eq!(state.lightbox, Lightbox::Open(2));
        }

        #[test]
        fn stepping_while_closed_is_a_noop() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            assert!(!state.lightbox_next(&images));
            assert!(!state.lightbox_prev());
            assert_eq!(state.lightbox, Lightbox::Closed);
        }

        #[test]
        fn filter_change_closes_the_lightbox() {
            let categories = fixture_categories();
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.open_lightbox(&images, 1).unwrap();

            state.select_category(&categories, CategoryId::new("sites"));
            assert_eq!(state.lightbox, Lightbox::Closed);
        }

        #[test]
        fn search_change_closes_the_lightbox() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.open_lightbox(&images, 1).unwrap();

            state.set_search_term("rv".into());
            assert_eq!(state.lightbox, Lightbox::Closed);
        }

        #[test]
        fn rejected_category_leaves_the_lightbox_open() {
            let categories = fixture_categories();
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.open_lightbox(&images, 1).unwrap();

            // Unknown id: the filtered sequence is untouched, so the open
            // cursor is still valid.
            state.select_category(&categories, CategoryId::new("treehouses"));
            assert_eq!(state.lightbox, Lightbox::Open(1));
        }

        #[test]
        fn display_mode_leaves_the_lightbox_open() {
            let images = fixture_images();
            let mut state = GalleryState::default();
            state.open_lightbox(&images, 1).unwrap();

            state.set_display_mode(DisplayMode::List);
            assert_eq!(state.lightbox, Lightbox::Open(1));
        }
    }
}
