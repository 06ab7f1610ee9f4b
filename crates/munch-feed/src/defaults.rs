//! Field-default synthesis for upstream restaurant records.
//!
//! This is the only place that decides what a listing shows when the API
//! omits a field: the source value wins when present, otherwise a value is
//! derived from the record's position in the batch and its lowercased name.
//! The keyword list and constants are fixtures shared with the mobile app
//! and must not be retuned.

use munch_core::RestaurantListing;

use crate::image::{default_image_for, is_broken_image};
use crate::raw::RawRestaurant;

const PREP_TIMES: [&str; 5] = [
    "8-12 min",
    "10-15 min",
    "12-17 min",
    "15-20 min",
    "5-10 min",
];

const PICKUP_WINDOWS: [&str; 5] = [
    "11:00 AM - 10:00 PM",
    "12:00 PM - 11:00 PM",
    "10:00 AM - 9:00 PM",
    "9:00 AM - 11:00 PM",
    "10:30 AM - 9:30 PM",
];

const NAME_KEYS: &[&str] = &["Name", "name"];
const ID_KEYS: &[&str] = &["id", "_id"];
const IMAGE_KEYS: &[&str] = &["imageUrl", "image"];
const RATING_KEYS: &[&str] = &["avgrating", "avgRating", "rating"];
const PREP_KEYS: &[&str] = &["preparationTime", "preparation_time"];
const DISTANCE_KEYS: &[&str] = &["distance", "distance_km", "distanceMiles"];
const BAGS_KEYS: &[&str] = &["bagsLeft", "bags_left"];
const PICKUP_KEYS: &[&str] = &["pickupTime", "pickup_time", "pickupTimeWindow"];
const REVIEW_KEYS: &[&str] = &["reviewCount", "review_count"];
const DEAL_KEYS: &[&str] = &["hasDeals", "discount", "offer"];

/// Position-derived values used when a record omits a field.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicDefaults {
    pub rating: String,
    pub preparation_time: &'static str,
    pub distance_miles: f64,
    pub bags_left: u32,
    pub pickup_time_window: &'static str,
    pub review_count: u32,
}

/// Base rating selected by the first matching name keyword.
#[must_use]
pub fn rating_base(lowercase_name: &str) -> f64 {
    let has = |kw: &str| lowercase_name.contains(kw);
    if has("hari") || has("kitchen") {
        4.0
    } else if has("create") || has("restaurant") {
        4.2
    } else if has("zudio") {
        4.5
    } else if has("thai") {
        4.2
    } else if has("american") {
        4.8
    } else {
        4.0
    }
}

impl HeuristicDefaults {
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn for_position(index: usize, name: &str) -> Self {
        let name = name.to_lowercase();
        let i = index as f64;

        let rating = format!("{:.1}", rating_base(&name) + i * 0.1);
        let bags_left = u32::try_from(8usize.saturating_sub(index).max(1)).unwrap_or(1);
        let distance_miles = round_tenth(2.5 + i * 0.8);
        let review_count = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(8))
            .and_then(|v| v.checked_add(15))
            .unwrap_or(u32::MAX);

        Self {
            rating,
            preparation_time: PREP_TIMES[index % PREP_TIMES.len()],
            distance_miles,
            bags_left,
            pickup_time_window: PICKUP_WINDOWS[index % PICKUP_WINDOWS.len()],
            review_count,
        }
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Turns the `index`-th upstream record into a fully populated listing.
#[must_use]
pub fn synthesize(index: usize, raw: &RawRestaurant) -> RestaurantListing {
    let source_name = raw.text(NAME_KEYS);
    let defaults = HeuristicDefaults::for_position(index, source_name.as_deref().unwrap_or(""));

    let image_url = match raw.text(IMAGE_KEYS) {
        Some(url) if is_broken_image(&url) => {
            tracing::debug!(
                name = source_name.as_deref().unwrap_or(""),
                url = %url,
                "broken image url, using fallback"
            );
            default_image_for(source_name.as_deref(), index).to_owned()
        }
        Some(url) => url,
        None => default_image_for(source_name.as_deref(), index).to_owned(),
    };

    RestaurantListing {
        id: raw.text(ID_KEYS).unwrap_or_else(|| (index + 1).to_string()),
        name: source_name.unwrap_or_else(|| format!("Restaurant {}", index + 1)),
        image_url,
        avg_rating: raw.text(RATING_KEYS).unwrap_or(defaults.rating),
        preparation_time: raw
            .text(PREP_KEYS)
            .unwrap_or_else(|| defaults.preparation_time.to_owned()),
        distance_miles: raw.number(DISTANCE_KEYS).unwrap_or(defaults.distance_miles),
        bags_left: raw.count(BAGS_KEYS).unwrap_or(defaults.bags_left),
        pickup_time_window: raw
            .text(PICKUP_KEYS)
            .unwrap_or_else(|| defaults.pickup_time_window.to_owned()),
        review_count: raw.count(REVIEW_KEYS).unwrap_or(defaults.review_count),
        restaurant_type: raw.type_tags(),
        description: raw.text(&["description"]),
        address: raw.text(&["address"]),
        has_deals: raw.any_truthy(DEAL_KEYS),
        is_open: raw.flag("isOpen"),
    }
}

/// Synthesizes every record, using each record's position as its index.
#[must_use]
pub fn synthesize_all(records: &[RawRestaurant]) -> Vec<RestaurantListing> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| synthesize(index, raw))
        .collect()
}

#[cfg(test)]
#[path = "defaults_test.rs"]
mod tests;
