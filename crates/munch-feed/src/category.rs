//! Cuisine-category selection: a fresh fetch narrowed to one cuisine tag.

use munch_core::RestaurantListing;

use crate::client::FeedClient;
use crate::defaults::synthesize_all;
use crate::demo;
use crate::error::FeedError;

/// Keeps listings tagged with `category` (case-insensitive substring).
#[must_use]
pub fn filter_by_category(
    listings: Vec<RestaurantListing>,
    category: &str,
) -> Vec<RestaurantListing> {
    listings.into_iter().filter(|l| l.has_type(category)).collect()
}

/// Fetches the full collection again (no cache) and keeps the `category` matches.
///
/// When the upstream collection has no match, the local development
/// fixtures for that category are returned instead. That set may itself be
/// empty for categories no fixture covers.
///
/// # Errors
///
/// Returns [`FeedError::CategoryFetchFailed`] wrapping the underlying error
/// when the fetch times out, fails, or cannot be decoded.
pub async fn fetch_category(
    client: &FeedClient,
    category: &str,
) -> Result<Vec<RestaurantListing>, FeedError> {
    let payload = client
        .restaurants()
        .await
        .map_err(|e| FeedError::CategoryFetchFailed {
            category: category.to_owned(),
            source: Box::new(e),
        })?;

    let listings = synthesize_all(&payload.into_records());
    let matched = filter_by_category(listings, category);
    if matched.is_empty() {
        tracing::info!(category, "no upstream restaurants for category, using demo set");
        return Ok(demo::category_fallback(category));
    }

    tracing::debug!(category, count = matched.len(), "category filtered");
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::raw::RawRestaurant;

    #[test]
    fn filter_by_category_uses_type_tags() {
        let records: Vec<_> = [
            json!({ "Name": "A", "restaurantType": [{ "restaurentType": "Thai Street Food" }] }),
            json!({ "Name": "B", "restaurantType": [{ "restaurentType": "Burgers" }] }),
            json!({ "Name": "C" }),
        ]
        .into_iter()
        .map(RawRestaurant::from_value)
        .collect();

        let kept = filter_by_category(synthesize_all(&records), "THAI");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "A");
    }
}
