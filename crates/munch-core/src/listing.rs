//! The client-side restaurant record shown in the surplus feed.
//!
//! A [`RestaurantListing`] only exists for one fetch/render cycle: ids are
//! unique within a batch but are not stable across fetches.

use serde::{Deserialize, Serialize};

/// Distance used for ordering when a listing's distance is zero or not a number.
pub const UNKNOWN_DISTANCE_MILES: f64 = 999.0;

/// A normalized restaurant listing. Every display field is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListing {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Decimal rating kept as text (`"4.5"`), matching what the API sends.
    pub avg_rating: String,
    /// Free-text range such as `"12-17 min"`.
    pub preparation_time: String,
    pub distance_miles: f64,
    pub bags_left: u32,
    pub pickup_time_window: String,
    pub review_count: u32,
    /// Cuisine tags, used only for category matching.
    #[serde(default)]
    pub restaurant_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub has_deals: bool,
    /// `None` when the upstream record carries no `isOpen` flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

/// Reads the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// `"0.5 mi"` gives `0.5` and `"4.9/5"` gives `4.9`. Returns `None` when the
/// text does not start with a number or the number is not finite.
#[must_use]
pub fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

impl RestaurantListing {
    /// Numeric rating for ordering. `"4.9/5"` reads as `4.9`; text with no
    /// leading number counts as `0.0`.
    #[must_use]
    pub fn rating_value(&self) -> f64 {
        leading_number(&self.avg_rating).unwrap_or(0.0)
    }

    /// Distance for ordering. A zero or non-numeric distance sorts last.
    #[must_use]
    pub fn distance_sort_key(&self) -> f64 {
        if self.distance_miles.abs() < f64::EPSILON || !self.distance_miles.is_finite() {
            UNKNOWN_DISTANCE_MILES
        } else {
            self.distance_miles
        }
    }

    /// Case-insensitive substring match against the cuisine tags.
    #[must_use]
    pub fn has_type(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        self.restaurant_type
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
    }
}
