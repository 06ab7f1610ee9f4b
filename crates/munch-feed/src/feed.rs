//! Feed state: the pristine snapshot, an optional category overlay, and the
//! visible list derived from them.

use munch_core::RestaurantListing;

use crate::category::fetch_category;
use crate::client::FeedClient;
use crate::defaults::synthesize_all;
use crate::demo;
use crate::error::FeedError;
use crate::filter::{self, FeedFilter};

/// Listings for the currently selected cuisine chip.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub label: String,
    pub listings: Vec<RestaurantListing>,
}

/// Home-feed state owned by a single task.
///
/// The visible list is always re-derived from a base list (the category
/// listings when a category is active, otherwise the snapshot), so filters
/// never compound.
#[derive(Debug, Clone)]
pub struct FeedState {
    snapshot: Vec<RestaurantListing>,
    category: Option<CategoryView>,
    active_filter: FeedFilter,
    visible: Vec<RestaurantListing>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    /// A state showing the placeholder feed under the default filter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_snapshot(demo::placeholder_feed())
    }

    /// A state over `snapshot`; an empty snapshot is replaced by the demo feed.
    #[must_use]
    pub fn with_snapshot(snapshot: Vec<RestaurantListing>) -> Self {
        let mut state = Self {
            snapshot: Vec::new(),
            category: None,
            active_filter: FeedFilter::default(),
            visible: Vec::new(),
        };
        state.replace_snapshot(snapshot);
        state
    }

    #[must_use]
    pub fn snapshot(&self) -> &[RestaurantListing] {
        &self.snapshot
    }

    #[must_use]
    pub fn visible(&self) -> &[RestaurantListing] {
        &self.visible
    }

    #[must_use]
    pub fn active_filter(&self) -> FeedFilter {
        self.active_filter
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.label.as_str())
    }

    fn base(&self) -> &[RestaurantListing] {
        self.category
            .as_ref()
            .map_or(self.snapshot.as_slice(), |c| c.listings.as_slice())
    }

    fn refresh(&mut self) {
        self.visible = filter::apply(self.active_filter, self.base());
    }

    /// Installs a freshly fetched snapshot and drops any category overlay.
    pub fn replace_snapshot(&mut self, snapshot: Vec<RestaurantListing>) {
        self.snapshot = if snapshot.is_empty() {
            demo::feed_fallback()
        } else {
            snapshot
        };
        self.category = None;
        self.refresh();
    }

    /// Selects `filter` and re-derives the visible list from the base list.
    pub fn apply_filter(&mut self, filter: FeedFilter) {
        self.active_filter = filter;
        self.refresh();
    }

    /// Overlays a category's listings. Empty listings are ignored and
    /// reported as `false`.
    pub fn select_category(&mut self, label: &str, listings: Vec<RestaurantListing>) -> bool {
        if listings.is_empty() {
            return false;
        }
        self.category = Some(CategoryView {
            label: label.to_owned(),
            listings,
        });
        self.refresh();
        true
    }

    /// Drops the category overlay and shows the snapshot again.
    pub fn clear_category(&mut self) {
        self.category = None;
        self.refresh();
    }
}

/// Couples a [`FeedClient`] with a [`FeedState`].
#[derive(Debug)]
pub struct FeedService {
    client: FeedClient,
    state: FeedState,
}

impl FeedService {
    #[must_use]
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            state: FeedState::new(),
        }
    }

    #[must_use]
    pub fn client(&self) -> &FeedClient {
        &self.client
    }

    #[must_use]
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Loads the primary feed. Never fails: any load error or an empty
    /// collection installs the demo feed instead.
    pub async fn load(&mut self) -> &[RestaurantListing] {
        let listings = match self.client.restaurants().await {
            Ok(payload) => {
                let listings = synthesize_all(&payload.into_records());
                if listings.is_empty() {
                    tracing::warn!("restaurant feed was empty, using demo feed");
                }
                listings
            }
            Err(e) => {
                tracing::warn!(error = %e, "restaurant feed unavailable, using demo feed");
                Vec::new()
            }
        };
        tracing::info!(count = listings.len(), "restaurant feed loaded");
        self.state.replace_snapshot(listings);
        self.state.visible()
    }

    pub fn apply_filter(&mut self, filter: FeedFilter) -> &[RestaurantListing] {
        self.state.apply_filter(filter);
        self.state.visible()
    }

    /// Fetches and overlays the listings for `category`.
    ///
    /// On error the visible list is left as it was.
    ///
    /// # Errors
    ///
    /// - [`FeedError::CategoryFetchFailed`] if the fetch failed.
    /// - [`FeedError::NoCategoryResults`] if neither upstream nor the demo
    ///   fixtures have a restaurant for the category.
    pub async fn select_category(
        &mut self,
        category: &str,
    ) -> Result<&[RestaurantListing], FeedError> {
        let listings = fetch_category(&self.client, category).await?;
        if !self.state.select_category(category, listings) {
            return Err(FeedError::NoCategoryResults {
                category: category.to_owned(),
            });
        }
        Ok(self.state.visible())
    }

    pub fn clear_category(&mut self) -> &[RestaurantListing] {
        self.state.clear_category();
        self.state.visible()
    }
}
