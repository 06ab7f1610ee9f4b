//! Restaurant menus and menu search.

use munch_core::{MenuItem, RestaurantMenu};
use serde_json::Value;

use crate::client::{
    FeedClient, MenuRequest, MenuSearchRequest, MENU_PATH, MENU_SEARCH_PATH, restaurant_id_value,
};
use crate::demo;
use crate::error::FeedError;
use crate::raw::is_truthy;

/// Menu search always runs against this restaurant id.
const SEARCH_RESTAURANT_ID: u64 = 1;

/// Outcome of a menu search.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSearch {
    pub items: Vec<MenuItem>,
    /// `true` when the items are local demo dishes rather than upstream results.
    pub from_demo: bool,
}

impl MenuSearch {
    fn demo(term: &str) -> Self {
        Self {
            items: demo::search_results(term),
            from_demo: true,
        }
    }
}

fn decode_items(values: &[Value]) -> Vec<MenuItem> {
    values
        .iter()
        .filter_map(|v| match serde_json::from_value::<MenuItem>(v.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!(error = %e, "skipping undecodable menu item");
                None
            }
        })
        .collect()
}

/// Flattens a successful search response into menu items.
///
/// `data` may be the item array itself, an object with a `menu` array, or an
/// object with `category[].menu` arrays. Anything else, or a response whose
/// `success` flag is not truthy, yields no items.
#[must_use]
pub fn flatten_search(response: &Value) -> Vec<MenuItem> {
    if !response.get("success").is_some_and(is_truthy) {
        return Vec::new();
    }
    let Some(data) = response.get("data") else {
        return Vec::new();
    };

    if let Some(items) = data.as_array() {
        return decode_items(items);
    }
    if let Some(items) = data.get("menu").and_then(Value::as_array) {
        return decode_items(items);
    }
    if let Some(categories) = data.get("category").and_then(Value::as_array) {
        return categories
            .iter()
            .filter_map(|c| c.get("menu").and_then(Value::as_array))
            .flat_map(|items| decode_items(items))
            .collect();
    }
    Vec::new()
}

impl FeedClient {
    /// Fetches the menu of one restaurant.
    ///
    /// Returns `Ok(None)` when the response is not a success envelope or
    /// carries no first `data` entry.
    ///
    /// # Errors
    ///
    /// Any error from the underlying request, or [`FeedError::Decode`] when
    /// the first `data` entry is not a menu.
    pub async fn restaurant_menu(
        &self,
        restaurant_id: &str,
    ) -> Result<Option<RestaurantMenu>, FeedError> {
        let ctx = self.context();
        let body = MenuRequest {
            restaurant_id: restaurant_id_value(restaurant_id),
            latitude: &ctx.latitude,
            longitude: &ctx.longitude,
            customer_id: ctx.customer_id,
        };
        let json = self.post_json(MENU_PATH, &body).await?;

        if !json.get("success").is_some_and(is_truthy) {
            tracing::warn!(restaurant_id, "menu response was not successful");
            return Ok(None);
        }
        let Some(first) = json.get("data").and_then(|d| d.get(0)) else {
            return Ok(None);
        };
        let menu = serde_json::from_value::<RestaurantMenu>(first.clone()).map_err(|source| {
            FeedError::Decode {
                context: format!("menu for restaurant {restaurant_id}"),
                source,
            }
        })?;
        Ok(Some(menu))
    }

    /// Searches menu items by free text.
    ///
    /// A blank term returns no items without a request. Any failure or an
    /// empty result falls back to the demo dishes for `term`.
    pub async fn search_menu(&self, term: &str) -> MenuSearch {
        let term = term.trim();
        if term.is_empty() {
            return MenuSearch {
                items: Vec::new(),
                from_demo: false,
            };
        }

        let body = MenuSearchRequest {
            restaurant_id: SEARCH_RESTAURANT_ID,
            is_available: 1,
            search_term: term,
        };
        match self.post_json(MENU_SEARCH_PATH, &body).await {
            Ok(json) => {
                let items = flatten_search(&json);
                if items.is_empty() {
                    tracing::info!(term, "no menu items found, using demo results");
                    return MenuSearch::demo(term);
                }
                MenuSearch {
                    items,
                    from_demo: false,
                }
            }
            Err(e) => {
                tracing::warn!(term, error = %e, "menu search failed, using demo results");
                MenuSearch::demo(term)
            }
        }
    }
}
