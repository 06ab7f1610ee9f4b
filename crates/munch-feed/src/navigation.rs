//! Guarded navigation to the restaurant detail screen.

use munch_core::{RestaurantListing, UNKNOWN_DISTANCE_MILES};

use crate::error::FeedError;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    RestaurantDetail(Box<RestaurantListing>),
}

impl Route {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Route::RestaurantDetail(_) => "RestaurantDetail",
        }
    }
}

/// Something that can show a screen.
pub trait Navigator {
    /// # Errors
    ///
    /// Returns an error if the route cannot be shown.
    fn navigate(&self, route: Route) -> Result<(), FeedError>;
}

/// The listing as handed to the detail screen, with blank display fields
/// filled in.
#[must_use]
pub fn detail_view(listing: &RestaurantListing) -> RestaurantListing {
    fn or_default(value: &str, default: &str) -> String {
        if value.trim().is_empty() {
            default.to_owned()
        } else {
            value.to_owned()
        }
    }

    let mut view = listing.clone();
    view.avg_rating = or_default(&listing.avg_rating, "4.0");
    view.preparation_time = or_default(&listing.preparation_time, "10-15 min");
    view.pickup_time_window = or_default(&listing.pickup_time_window, "11:00 AM - 10:00 PM");
    let distance = listing.distance_miles;
    if !distance.is_finite()
        || distance <= 0.0
        || (distance - UNKNOWN_DISTANCE_MILES).abs() < f64::EPSILON
    {
        view.distance_miles = 2.5;
    }
    if view.bags_left == 0 {
        view.bags_left = 5;
    }
    if view.review_count == 0 {
        view.review_count = 10;
    }
    view
}

/// Opens the detail screen for `listing`.
///
/// # Errors
///
/// - [`FeedError::InvalidRestaurant`] when the listing has no id.
/// - [`FeedError::NavigationUnavailable`] when there is no navigator.
/// - Whatever the navigator returns.
pub fn open_restaurant_detail<N: Navigator + ?Sized>(
    navigator: Option<&N>,
    listing: &RestaurantListing,
) -> Result<(), FeedError> {
    if listing.id.trim().is_empty() {
        tracing::warn!(name = %listing.name, "refusing to open restaurant without an id");
        return Err(FeedError::InvalidRestaurant);
    }
    let route = Route::RestaurantDetail(Box::new(detail_view(listing)));
    let Some(navigator) = navigator else {
        tracing::error!(target_route = route.name(), "no navigator available");
        return Err(FeedError::NavigationUnavailable {
            target: route.name().to_owned(),
        });
    };
    navigator.navigate(route)
}
