use shared::GalleryImage;
use yew::prelude::*;

use crate::catalog;
use crate::gallery::GalleryPhase;

#[derive(Properties, PartialEq)]
pub struct GalleryGridProps {
    pub phase: GalleryPhase,
}

fn view_record(image: &GalleryImage) -> Html {
    html! {
        <figure class="gallery-card">
            <img
                src={image.data_uri()}
                alt={image.description.clone().unwrap_or_default()}
            />
            if let Some(description) = image.description.as_deref().filter(|d| !d.is_empty()) {
                <figcaption class="gallery-caption">{ description }</figcaption>
            }
        </figure>
    }
}

fn view_placeholders(footnote: Option<&'static str>) -> Html {
    html! {
        <>
            <div class="gallery-grid placeholders">
                { for catalog::GALLERY_PLACEHOLDERS.iter().map(|placeholder| {
                    html! {
                        <figure class="gallery-card placeholder">
                            <img src={placeholder.url} alt={placeholder.caption} />
                            <figcaption class="gallery-caption overlay">
                                { placeholder.caption }
                            </figcaption>
                        </figure>
                    }
                }) }
            </div>
            if let Some(footnote) = footnote {
                <p class="gallery-footnote">{ footnote }</p>
            }
        </>
    }
}

/// The work gallery: uploaded photos in server order, or the bundled sample
/// set when there is nothing live to show.
#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &GalleryGridProps) -> Html {
    let phase = &props.phase;

    let body = if matches!(phase, GalleryPhase::Loading) {
        html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Loading gallery..." }</p>
            </div>
        }
    } else if phase.needs_placeholders() {
        view_placeholders(phase.placeholder_footnote())
    } else {
        html! {
            <div class="gallery-grid">
                { for phase.records().iter().map(|image| {
                    html! {
                        <div key={image.id.to_string()} class="gallery-entry">
                            { view_record(image) }
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <section id="gallery" class="gallery-section">
            <div class="section-intro">
                <h2>{ "Our Work Gallery" }</h2>
                <p>{ "See our beautiful work and transformations" }</p>
            </div>
            { body }
        </section>
    }
}
