//! Gallery display state.
//!
//! "No images yet" and "fetch failed" are distinct phases rather than one
//! collapsed fallback: both show the bundled placeholder grid, but with
//! different footnotes, and a failed refresh never wipes records that
//! already loaded.

use shared::GalleryImage;

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryPhase {
    /// Initial fetch still pending
    Loading,
    /// Authoritative collection, verbatim in server order (possibly empty)
    Loaded(Vec<GalleryImage>),
    /// The first fetch failed; no authoritative collection was ever seen
    Failed,
}

impl GalleryPhase {
    pub fn records(&self) -> &[GalleryImage] {
        match self {
            GalleryPhase::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Placeholders render when the collection is known-empty or unknowable.
    pub fn needs_placeholders(&self) -> bool {
        match self {
            GalleryPhase::Loading => false,
            GalleryPhase::Loaded(records) => records.is_empty(),
            GalleryPhase::Failed => true,
        }
    }

    /// Footnote under the placeholder grid, distinguishing why it is shown.
    pub fn placeholder_footnote(&self) -> Option<&'static str> {
        match self {
            GalleryPhase::Loaded(records) if records.is_empty() => {
                Some("Sample gallery showcasing our professional beauty services")
            }
            GalleryPhase::Failed => {
                Some("Showing sample photos while the live gallery is unavailable")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(n: u8) -> GalleryImage {
        GalleryImage {
            id: Uuid::from_u128(n as u128),
            filename: format!("photo-{}.jpg", n),
            image_data: "aGVsbG8=".to_string(),
            description: None,
            uploaded_at: String::new(),
        }
    }

    #[test]
    fn loading_shows_neither_records_nor_placeholders() {
        let phase = GalleryPhase::Loading;
        assert!(phase.records().is_empty());
        assert!(!phase.needs_placeholders());
        assert!(phase.placeholder_footnote().is_none());
    }

    #[test]
    fn loaded_records_render_in_server_order() {
        let phase = GalleryPhase::Loaded(vec![record(3), record(1), record(2)]);
        assert!(!phase.needs_placeholders());
        let ids: Vec<_> = phase.records().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                Uuid::from_u128(3),
                Uuid::from_u128(1),
                Uuid::from_u128(2)
            ]
        );
    }

    #[test]
    fn empty_collection_falls_back_to_samples() {
        let phase = GalleryPhase::Loaded(Vec::new());
        assert!(phase.needs_placeholders());
        assert_eq!(
            phase.placeholder_footnote(),
            Some("Sample gallery showcasing our professional beauty services")
        );
    }

    #[test]
    fn failed_fetch_falls_back_with_distinct_footnote() {
        let phase = GalleryPhase::Failed;
        assert!(phase.needs_placeholders());
        assert_eq!(
            phase.placeholder_footnote(),
            Some("Showing sample photos while the live gallery is unavailable")
        );
    }
}
