//! Fallback artwork for listings whose image is missing or known broken.

use std::collections::HashMap;

const DINING_ROOM: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=300&h=200&fit=crop&auto=format&q=75";
const THAI_TABLE: &str =
    "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=300&h=200&fit=crop&auto=format&q=75";
const DINER: &str =
    "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=300&h=200&fit=crop&auto=format&q=75";
const BURGER: &str =
    "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=300&h=200&fit=crop&auto=format&q=75";

const ROTATION: [&str; 4] = [DINING_ROOM, THAI_TABLE, DINER, BURGER];

/// Marker of the upstream placeholder that always 404s.
const BROKEN_IMAGE_MARKER: &str = "default.jpg";

/// Returns `true` when `url` points at the upstream placeholder that 404s.
#[must_use]
pub fn is_broken_image(url: &str) -> bool {
    url.contains(BROKEN_IMAGE_MARKER)
}

/// Picks a fallback image from name keywords, else rotates through a fixed set by index.
#[must_use]
pub fn default_image_for(name: Option<&str>, index: usize) -> &'static str {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return DINING_ROOM;
    };
    let name = name.to_lowercase();
    let has = |kw: &str| name.contains(kw);

    if has("hari") || has("kitchen") {
        DINING_ROOM
    } else if has("create") || has("restaurant") {
        DINER
    } else if has("zudio") {
        DINING_ROOM
    } else if has("burger") || has("fast") {
        BURGER
    } else if has("thai") {
        THAI_TABLE
    } else if has("american") {
        DINER
    } else {
        ROTATION[index % ROTATION.len()]
    }
}

/// Fallback images recorded per listing id after a load failure.
///
/// The first failure for an id decides its fallback. Later failures and
/// lookups reuse it, even if the listing has since moved in the feed.
#[derive(Debug, Default)]
pub struct FallbackImages {
    by_id: HashMap<String, String>,
}

impl FallbackImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (once) and returns the fallback for a failed image.
    pub fn mark_failed(&mut self, id: &str, name: Option<&str>, index: usize) -> &str {
        self.by_id.entry(id.to_owned()).or_insert_with(|| {
            let url = default_image_for(name, index).to_owned();
            tracing::debug!(id, url = %url, "recording fallback image");
            url
        })
    }

    /// Recorded fallback, then `original`, then the derived default.
    #[must_use]
    pub fn url_for(
        &self,
        id: &str,
        original: Option<&str>,
        name: Option<&str>,
        index: usize,
    ) -> String {
        if let Some(recorded) = self.by_id.get(id) {
            return recorded.clone();
        }
        original
            .filter(|u| !u.is_empty())
            .map_or_else(|| default_image_for(name, index).to_owned(), str::to_owned)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
