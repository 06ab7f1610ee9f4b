//! The five feed filters and the revert-to-snapshot rule.
//!
//! Filters never compound: each one is applied to the pristine snapshot it
//! is given, and any filter whose result would be empty yields the whole
//! snapshot instead.

use std::fmt;
use std::str::FromStr;

use munch_core::RestaurantListing;

/// Brand-name fragments that always qualify for the Iconic filter.
const ICONIC_BRANDS: [&str; 10] = [
    "mcdonald",
    "kfc",
    "domino",
    "pizza hut",
    "subway",
    "starbucks",
    "burger king",
    "taco bell",
    "wingstop",
    "barrique",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeedFilter {
    #[default]
    Nearest,
    Iconic,
    Rating,
    Deals,
    OpenNow,
}

impl FeedFilter {
    pub const ALL: [FeedFilter; 5] = [
        FeedFilter::Nearest,
        FeedFilter::Iconic,
        FeedFilter::Rating,
        FeedFilter::Deals,
        FeedFilter::OpenNow,
    ];

    /// Chip label as shown in the app.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FeedFilter::Nearest => "Nearest",
            FeedFilter::Iconic => "Iconic",
            FeedFilter::Rating => "Rating",
            FeedFilter::Deals => "Deals",
            FeedFilter::OpenNow => "Open Now",
        }
    }
}

impl fmt::Display for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter '{}' (expected nearest, iconic, rating, deals, or open-now)",
            self.0
        )
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for FeedFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "nearest" => Ok(FeedFilter::Nearest),
            "iconic" => Ok(FeedFilter::Iconic),
            "rating" => Ok(FeedFilter::Rating),
            "deals" => Ok(FeedFilter::Deals),
            "opennow" => Ok(FeedFilter::OpenNow),
            _ => Err(UnknownFilter(s.to_owned())),
        }
    }
}

fn is_iconic(listing: &RestaurantListing) -> bool {
    let rating = listing.rating_value();
    let reviews = listing.review_count;
    let name = listing.name.to_lowercase();

    let rated_with_reviews = rating >= 3.5 && reviews >= 5;
    let has_any_reviews = reviews > 0;
    let popular_brand = ICONIC_BRANDS.iter().any(|b| name.contains(b));

    rated_with_reviews || has_any_reviews || popular_brand
}

/// Applies `filter` to `snapshot`, never returning an empty list for a
/// non-empty snapshot.
#[must_use]
pub fn apply(filter: FeedFilter, snapshot: &[RestaurantListing]) -> Vec<RestaurantListing> {
    let mut out = snapshot.to_vec();

    match filter {
        FeedFilter::Nearest => {
            out.sort_by(|a, b| a.distance_sort_key().total_cmp(&b.distance_sort_key()));
        }
        FeedFilter::Rating => {
            out.sort_by(|a, b| {
                b.rating_value()
                    .total_cmp(&a.rating_value())
                    .then_with(|| b.review_count.cmp(&a.review_count))
            });
        }
        FeedFilter::Iconic => out.retain(is_iconic),
        FeedFilter::Deals => out.retain(|l| l.has_deals),
        // Absence of the flag counts as open.
        FeedFilter::OpenNow => out.retain(|l| l.is_open != Some(false)),
    }

    if out.is_empty() {
        tracing::debug!(filter = %filter, "filter emptied the feed, reverting to snapshot");
        return snapshot.to_vec();
    }
    out
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
