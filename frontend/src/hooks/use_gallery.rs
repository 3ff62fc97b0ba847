//! Hook for loading the work gallery.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::gallery::GalleryPhase;

/// Return value from the use_gallery hook.
pub struct UseGallery {
    /// Current display phase (loading / loaded / failed)
    pub phase: GalleryPhase,
    /// Re-fetch the collection (after an upload or removal)
    pub refresh: Callback<()>,
}

/// Fetches the gallery once on mount and exposes a manual refresh.
///
/// A failed refresh leaves whatever was already loaded on screen; only a
/// failure before any collection was seen moves the phase to `Failed`.
#[hook]
pub fn use_gallery() -> UseGallery {
    let phase = use_state(|| GalleryPhase::Loading);

    let fetch = {
        let phase = phase.clone();
        Callback::from(move |_| {
            let phase = phase.clone();
            spawn_local(async move {
                match api::fetch_gallery().await {
                    Ok(images) => phase.set(GalleryPhase::Loaded(images)),
                    Err(err) => {
                        log::error!("Failed to fetch gallery: {}", err);
                        if matches!(&*phase, GalleryPhase::Loading) {
                            phase.set(GalleryPhase::Failed);
                        }
                    }
                }
            });
        })
    };

    // Initial fetch
    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(());
            || ()
        });
    }

    UseGallery {
        phase: (*phase).clone(),
        refresh: fetch,
    }
}
