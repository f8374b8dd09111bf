//! Headless application core for the campground marketing site.
//!
//! The shells (web, native) own rendering and I/O; this crate owns all
//! interactive state: the gallery filter engine and lightbox navigator, the
//! collapsible policies FAQ, the responsive navigation menu, and the booking
//! call-to-action's analytics side effect. State changes only through
//! [`Event`]s fed to [`App::update`]; everything rendered is derived by
//! [`App::view`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod model;
pub mod view;

pub use app::App;
pub use capabilities::{Analytics, AnalyticsEvent, AnalyticsOperation, Capabilities, Effect};
pub use event::{CategoryId, Event, ImageId, ValidatedUrl, ValidationError};
pub use faq::{FaqItemId, FaqState};
pub use gallery::{filtered_images, DisplayMode, GalleryError, GalleryState, Lightbox};
pub use model::{
    FaqEntry, GalleryCategory, GalleryImage, Icon, Model, PolicySection, SiteContent, SiteSettings,
};
pub use view::{GalleryView, LightboxView, ReadyView, ViewModel, ViewState};

pub use crux_core::App as CruxApp;

/// Reserved category id meaning "no category filter".
pub const ALL_CATEGORY_ID: &str = "all";

/// Site chrome navigation, in display order. Fixed at build time; the CMS
/// does not control the page set.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Stays & Rates", "/stays"),
    ("Amenities", "/amenities"),
    ("Park Map", "/map"),
    ("Policies", "/policies"),
    ("Gallery", "/gallery"),
    ("Contact", "/contact"),
];
