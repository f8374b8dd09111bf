mod analytics;

pub use self::analytics::{Analytics, AnalyticsEvent, AnalyticsOperation};

// Crux's built-in Render capability covers view invalidation; everything
// else the shell needs from us goes through Analytics.
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub analytics: Analytics<Event>,
}
