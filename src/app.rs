use tracing::{debug, info, warn};

use crate::capabilities::Capabilities;
use crate::event::Event;
use crate::faq::{FaqItemId, FaqState};
use crate::gallery::GalleryState;
use crate::model::{GalleryImage, Model, PolicySection, SiteContent, SiteSettings};
use crate::view::{
    CategoryChipView, FaqItemView, FaqSectionView, GalleryImageView, GalleryView, LightboxView,
    NavLinkView, NavView, PoliciesView, ReadyView, SiteView, ViewModel, ViewState,
};

#[derive(Default)]
pub struct App;

impl App {
    fn build_site(settings: &SiteSettings) -> SiteView {
        SiteView {
            site_name: settings.site_name.clone(),
            phone: settings.phone.clone(),
            booking_url: settings.booking_url.as_str().to_string(),
        }
    }

    fn build_nav(menu_open: bool) -> NavView {
        NavView {
            links: crate::NAV_LINKS
                .iter()
                .map(|(name, href)| NavLinkView {
                    name: (*name).to_string(),
                    href: (*href).to_string(),
                })
                .collect(),
            menu_open,
        }
    }

    fn build_image(content: &SiteContent, image: &GalleryImage) -> GalleryImageView {
        let category_label = content
            .gallery_categories
            .iter()
            .find(|c| c.id == image.category)
            .map(|c| c.name.split(" & ").next().unwrap_or_default().to_string())
            .unwrap_or_default();

        GalleryImageView {
            id: image.id.0.clone(),
            src: image.src.clone(),
            alt: image.alt.clone(),
            title: image.title.clone(),
            description: image.description.clone(),
            category_label,
        }
    }

    fn build_gallery(content: &SiteContent, state: &GalleryState) -> GalleryView {
        let filtered: Vec<&GalleryImage> = state.filtered(&content.gallery_images).collect();

        // Chip counts are recomputed from the records; the CMS-supplied
        // `count` field is informational only.
        let categories: Vec<CategoryChipView> = content
            .gallery_categories
            .iter()
            .map(|category| {
                let count = if category.id.is_all() {
                    content.gallery_images.len()
                } else {
                    content
                        .gallery_images
                        .iter()
                        .filter(|image| image.category == category.id)
                        .count()
                };
                CategoryChipView {
                    id: category.id.0.clone(),
                    name: category.name.clone(),
                    count,
                    is_selected: category.id == state.selected_category,
                }
            })
            .collect();

        let selected_name = content
            .gallery_categories
            .iter()
            .find(|c| !c.id.is_all() && c.id == state.selected_category)
            .map(|c| c.name.as_str());

        let images: Vec<GalleryImageView> = filtered
            .iter()
            .map(|image| Self::build_image(content, image))
            .collect();

        let lightbox = state.lightbox.index().and_then(|index| {
            // Transitions keep the cursor inside the filtered sequence; a
            // miss here would be a state-machine bug.
            filtered.get(index).map(|image| LightboxView {
                image: Self::build_image(content, image),
                position: index + 1,
                total: filtered.len(),
                counter: format!("{} of {}", index + 1, filtered.len()),
                has_prev: index > 0,
                has_next: index + 1 < filtered.len(),
            })
        });

        GalleryView {
            is_empty: images.is_empty(),
            results_summary: format_results_summary(
                images.len(),
                selected_name,
                &state.search_term,
            ),
            images,
            categories,
            search_term: state.search_term.clone(),
            display_mode: state.display_mode,
            lightbox,
        }
    }

    fn build_policies(sections: &[PolicySection], faq: &FaqState) -> PoliciesView {
        PoliciesView {
            sections: sections
                .iter()
                .map(|section| FaqSectionView {
                    title: section.title.clone(),
                    icon: section.icon,
                    items: section
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let id = FaqItemId::for_item(&section.title, index);
                            FaqItemView {
                                is_open: faq.is_open(&id),
                                id: id.0,
                                question: item.question.clone(),
                                answer: item.answer.clone(),
                            }
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(event = event.name(), "update");

        match event {
            Event::ContentLoaded(content) => {
                match content.validate() {
                    Ok(()) => {
                        info!(
                            images = content.gallery_images.len(),
                            sections = content.policy_sections.len(),
                            "content injected"
                        );
                        model.content = Some(*content);
                        model.content_error = None;
                        // Fresh page visit: interactive state starts over.
                        model.gallery = GalleryState::default();
                        model.faq = FaqState::default();
                        model.nav_menu_open = false;
                        model.last_error = None;
                    }
                    Err(error) => {
                        warn!(%error, "content payload rejected");
                        model.content = None;
                        model.content_error = Some(error);
                    }
                }
                caps.render.render();
            }

            Event::GalleryCategorySelected { category } => {
                let Some(content) = &model.content else { return };
                if model
                    .gallery
                    .select_category(&content.gallery_categories, category)
                {
                    caps.render.render();
                }
            }

            Event::GallerySearchChanged { term } => {
                if model.gallery.set_search_term(term) {
                    caps.render.render();
                }
            }

            Event::GalleryDisplayModeSet { mode } => {
                if model.gallery.set_display_mode(mode) {
                    caps.render.render();
                }
            }

            Event::GalleryFiltersCleared => {
                if model.gallery.clear_filters() {
                    caps.render.render();
                }
            }

            Event::GalleryLightboxOpened { index } => {
                let Some(content) = &model.content else { return };
                match model.gallery.open_lightbox(&content.gallery_images, index) {
                    Ok(()) => model.last_error = None,
                    // Not recovered here: the shell sees the error on the
                    // next view and knows it passed a stale index.
                    Err(error) => model.last_error = Some(error),
                }
                caps.render.render();
            }

            Event::GalleryLightboxNext => {
                let Some(content) = &model.content else { return };
                if model.gallery.lightbox_next(&content.gallery_images) {
                    caps.render.render();
                }
            }

            Event::GalleryLightboxPrev => {
                if model.gallery.lightbox_prev() {
                    caps.render.render();
                }
            }

            Event::GalleryLightboxClosed => {
                if model.gallery.close_lightbox() {
                    caps.render.render();
                }
            }

            Event::FaqItemToggled { id } => {
                let Some(content) = &model.content else { return };
                if model.faq.toggle(&content.policy_sections, id) {
                    caps.render.render();
                }
            }

            Event::FaqExpandedAll => {
                let Some(content) = &model.content else { return };
                model.faq.expand_all(&content.policy_sections);
                caps.render.render();
            }

            Event::FaqCollapsedAll => {
                model.faq.collapse_all();
                caps.render.render();
            }

            Event::NavMenuToggled => {
                model.nav_menu_open = !model.nav_menu_open;
                caps.render.render();
            }

            Event::NavMenuClosed => {
                if model.nav_menu_open {
                    model.nav_menu_open = false;
                    caps.render.render();
                }
            }

            Event::BookNowClicked { source } => {
                // Analytics only; the booking link itself is an opaque
                // external navigation handled by the shell.
                caps.analytics.track_book_now(&source);
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let state = match (&model.content, &model.content_error) {
            (Some(content), _) => ViewState::Ready(Box::new(ReadyView {
                site: Self::build_site(&content.settings),
                gallery: Self::build_gallery(content, &model.gallery),
                policies: Self::build_policies(&content.policy_sections, &model.faq),
            })),
            (None, Some(error)) => ViewState::ContentError {
                message: error.to_string(),
            },
            (None, None) => ViewState::Loading,
        };

        ViewModel {
            state,
            nav: Self::build_nav(model.nav_menu_open),
            last_error: model.last_error.as_ref().map(ToString::to_string),
        }
    }
}

fn format_results_summary(count: usize, category_name: Option<&str>, search_term: &str) -> String {
    let noun = if count == 1 { "photo" } else { "photos" };
    let mut summary = format!("Showing {count} {noun}");
    if let Some(name) = category_name {
        summary.push_str(&format!(" in \"{name}\""));
    }
    if !search_term.is_empty() {
        summary.push_str(&format!(" matching \"{search_term}\""));
    }
    summary
}
