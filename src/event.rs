use serde::{Deserialize, Serialize};
use std::fmt;

use crate::faq::FaqItemId;
use crate::gallery::DisplayMode;
use crate::model::SiteContent;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use typed_id;

typed_id!(ImageId);
typed_id!(CategoryId);

impl CategoryId {
    /// The reserved sentinel meaning "no category filter".
    pub fn all() -> Self {
        Self(crate::ALL_CATEGORY_ID.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == crate::ALL_CATEGORY_ID
    }
}

// --- Validation ---

#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    #[error("image {image_id} references unknown category {category_id}")]
    UnknownCategory {
        image_id: String,
        category_id: String,
    },
    #[error("unknown icon name: {0}")]
    UnknownIcon(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Validated URL (the booking link is an opaque external target) ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct ValidatedUrl(String);

impl TryFrom<String> for ValidatedUrl {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl ValidatedUrl {
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        let parsed = url::Url::parse(&s).map_err(|_| ValidationError::InvalidUrl(s.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidUrl(s));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Event enum: the single entry point for all state changes ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    /// Shell hands over the pre-fetched content set, once per page visit.
    ContentLoaded(Box<SiteContent>),

    // Gallery
    GalleryCategorySelected {
        category: CategoryId,
    },
    GallerySearchChanged {
        term: String,
    },
    GalleryDisplayModeSet {
        mode: DisplayMode,
    },
    GalleryFiltersCleared,
    GalleryLightboxOpened {
        index: usize,
    },
    GalleryLightboxNext,
    GalleryLightboxPrev,
    GalleryLightboxClosed,

    // Policies FAQ
    FaqItemToggled {
        id: FaqItemId,
    },
    FaqExpandedAll,
    FaqCollapsedAll,

    // Responsive navigation
    NavMenuToggled,
    NavMenuClosed,

    // Booking call to action. Free-form source tag ("header", "hero",
    // "stays_rv", ...); only feeds the analytics label.
    BookNowClicked {
        source: String,
    },
}

impl Event {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ContentLoaded(_) => "content_loaded",
            Self::GalleryCategorySelected { .. } => "gallery_category_selected",
            Self::GallerySearchChanged { .. } => "gallery_search_changed",
            Self::GalleryDisplayModeSet { .. } => "gallery_display_mode_set",
            Self::GalleryFiltersCleared => "gallery_filters_cleared",
            Self::GalleryLightboxOpened { .. } => "gallery_lightbox_opened",
            Self::GalleryLightboxNext => "gallery_lightbox_next",
            Self::GalleryLightboxPrev => "gallery_lightbox_prev",
            Self::GalleryLightboxClosed => "gallery_lightbox_closed",
            Self::FaqItemToggled { .. } => "faq_item_toggled",
            Self::FaqExpandedAll => "faq_expanded_all",
            Self::FaqCollapsedAll => "faq_collapsed_all",
            Self::NavMenuToggled => "nav_menu_toggled",
            Self::NavMenuClosed => "nav_menu_closed",
            Self::BookNowClicked { .. } => "book_now_clicked",
        }
    }
}
