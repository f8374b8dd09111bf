use serde::{Deserialize, Serialize};

use crate::event::{CategoryId, ImageId, ValidatedUrl, ValidationError};
use crate::faq::FaqState;
use crate::gallery::{GalleryError, GalleryState};

/// One gallery record, supplied by the content layer and never mutated.
/// `src` is an opaque reference; the core never touches image bytes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: ImageId,
    pub src: String,
    pub alt: String,
    pub category: CategoryId,
    pub title: String,
    pub description: String,
}

/// Category chip. `count` comes precomputed from the content layer and is
/// informational only; the view recomputes real cardinalities from the
/// records rather than trusting it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryCategory {
    pub id: CategoryId,
    pub name: String,
    pub count: usize,
}

/// Closed set of section icons. The original resolved icon names to symbols
/// at render time with a silent fallback; here unknown names fail once, at
/// the content boundary.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Clock,
    CreditCard,
    Dog,
    MapPin,
    Shield,
}

impl Icon {
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        match name {
            "Clock" => Ok(Self::Clock),
            "CreditCard" => Ok(Self::CreditCard),
            "Dog" => Ok(Self::Dog),
            "MapPin" => Ok(Self::MapPin),
            "Shield" => Ok(Self::Shield),
            other => Err(ValidationError::UnknownIcon(other.to_string())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::CreditCard => "CreditCard",
            Self::Dog => "Dog",
            Self::MapPin => "MapPin",
            Self::Shield => "Shield",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PolicySection {
    pub title: String,
    pub icon: Icon,
    pub items: Vec<FaqEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_name: String,
    pub phone: Option<String>,
    pub booking_url: ValidatedUrl,
}

/// Everything the shell injects at page-visit time, pre-fetched from the
/// CMS. The core holds no network or storage handles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub settings: SiteSettings,
    pub gallery_images: Vec<GalleryImage>,
    pub gallery_categories: Vec<GalleryCategory>,
    pub policy_sections: Vec<PolicySection>,
}

impl SiteContent {
    /// Cross-record checks the type system cannot express. Uniqueness of ids
    /// is the content layer's contract and is deliberately not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for image in &self.gallery_images {
            let known = !image.category.is_all()
                && self
                    .gallery_categories
                    .iter()
                    .any(|c| c.id == image.category);
            if !known {
                return Err(ValidationError::UnknownCategory {
                    image_id: image.id.0.clone(),
                    category_id: image.category.0.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Model {
    /// Present once a valid payload has been injected.
    pub content: Option<SiteContent>,
    /// Set instead of `content` when the payload failed validation.
    pub content_error: Option<ValidationError>,

    pub gallery: GalleryState,
    pub faq: FaqState,
    pub nav_menu_open: bool,

    /// Last surfaced caller bug (lightbox misuse). Cleared on the next
    /// successful lightbox open.
    pub last_error: Option<GalleryError>,
}
