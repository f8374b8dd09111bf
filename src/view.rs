//! Everything the shells render. All types here are plain serializable data
//! crossing the FFI boundary; no behavior beyond construction.

use serde::{Deserialize, Serialize};

use crate::gallery::DisplayMode;
use crate::model::Icon;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub state: ViewState,
    pub nav: NavView,
    /// Surfaced caller bugs (lightbox misuse), never user-input failures.
    pub last_error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewState {
    /// Content not yet injected. Distinct from an empty filter result.
    Loading,
    ContentError {
        message: String,
    },
    Ready(Box<ReadyView>),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadyView {
    pub site: SiteView,
    pub gallery: GalleryView,
    pub policies: PoliciesView,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteView {
    pub site_name: String,
    pub phone: Option<String>,
    pub booking_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavView {
    pub links: Vec<NavLinkView>,
    pub menu_open: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLinkView {
    pub name: String,
    pub href: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryView {
    /// The filtered sequence, in original record order.
    pub images: Vec<GalleryImageView>,
    pub categories: Vec<CategoryChipView>,
    pub search_term: String,
    pub display_mode: DisplayMode,
    /// e.g. `Showing 3 photos in "Cabins" matching "lake"`.
    pub results_summary: String,
    /// True when the active filters match nothing. The shell renders the
    /// explicit empty state with a clear-filters affordance.
    pub is_empty: bool,
    pub lightbox: Option<LightboxView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImageView {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub description: String,
    /// Short category label for the list layout ("Campsites" out of
    /// "Campsites & RV Sites").
    pub category_label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryChipView {
    pub id: String,
    pub name: String,
    /// Recomputed from the records; the CMS-supplied count is not trusted.
    pub count: usize,
    pub is_selected: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LightboxView {
    pub image: GalleryImageView,
    /// 1-based position within the filtered sequence.
    pub position: usize,
    pub total: usize,
    /// e.g. "2 of 5".
    pub counter: String,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoliciesView {
    pub sections: Vec<FaqSectionView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqSectionView {
    pub title: String,
    pub icon: Icon,
    pub items: Vec<FaqItemView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqItemView {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub is_open: bool,
}
