//! `feed` and `detail` command handlers.

use munch_core::RestaurantListing;
use munch_feed::{
    open_restaurant_detail, Alert, AlertAction, FeedClient, FeedError, FeedFilter, FeedService,
    Navigator, Route,
};

pub(crate) fn format_listing(listing: &RestaurantListing) -> String {
    format!(
        "{:<6}{:<28}{:<8}{:<10}{:<12}{:<6}{}",
        listing.id,
        listing.name,
        listing.avg_rating,
        format!("{:.1} mi", listing.distance_miles),
        listing.preparation_time,
        listing.bags_left,
        listing.pickup_time_window,
    )
}

fn print_listings(listings: &[RestaurantListing]) {
    println!(
        "{:<6}{:<28}{:<8}{:<10}{:<12}{:<6}PICKUP",
        "ID", "NAME", "RATING", "DISTANCE", "PREP", "BAGS"
    );
    for listing in listings {
        println!("{}", format_listing(listing));
    }
}

/// The alert for `err` as a terminal can show it. A finished command cannot
/// be retried in place, so "Try Again" is left out.
pub(crate) fn terminal_alert(err: &FeedError) -> Option<Alert> {
    let mut alert = err.alert()?;
    alert.actions.retain(|a| *a != AlertAction::TryAgain);
    if alert.actions.is_empty() {
        alert.actions.push(AlertAction::Dismiss);
    }
    Some(alert)
}

/// Prints the alert for `err`, or logs it when it is not user-facing.
pub(crate) fn report(err: &FeedError) {
    match terminal_alert(err) {
        Some(alert) => println!("{alert}"),
        None => tracing::warn!(error = %err, "request failed"),
    }
}

/// Selects `category`, repeating the fetch once after a failed request when
/// `retry` is set.
///
/// # Errors
///
/// Returns the error of the last attempt.
pub(crate) async fn select_category(
    service: &mut FeedService,
    category: &str,
    retry: bool,
) -> Result<(), FeedError> {
    let first = service.select_category(category).await.map(|_| ());
    match first {
        Err(FeedError::CategoryFetchFailed { source, .. }) if retry => {
            tracing::info!(category, error = %source, "category fetch failed, trying again");
            service.select_category(category).await.map(|_| ())
        }
        other => other,
    }
}

/// Loads the feed, optionally narrows it to `category`, and prints it.
///
/// A category failure leaves the unfiltered feed on screen after the alert.
pub(crate) async fn run_feed(
    client: FeedClient,
    filter: FeedFilter,
    category: Option<&str>,
    retry: bool,
) {
    let mut service = FeedService::new(client);
    service.load().await;
    service.apply_filter(filter);

    if let Some(category) = category {
        if let Err(e) = select_category(&mut service, category, retry).await {
            report(&e);
        }
    }

    let state = service.state();
    match state.active_category() {
        Some(label) => println!("{} restaurants ({label}, {filter})", state.visible().len()),
        None => println!("{} restaurants ({filter})", state.visible().len()),
    }
    print_listings(state.visible());
}

/// Prints the detail screen it is asked to show.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) -> Result<(), FeedError> {
        let Route::RestaurantDetail(listing) = route;
        println!("{}", listing.name);
        println!(
            "  rating {} ({} reviews)",
            listing.avg_rating, listing.review_count
        );
        println!(
            "  {} · {:.1} mi · {} bags left",
            listing.preparation_time, listing.distance_miles, listing.bags_left
        );
        println!("  pickup {}", listing.pickup_time_window);
        if let Some(description) = &listing.description {
            println!("  {description}");
        }
        if let Some(address) = &listing.address {
            println!("  {address}");
        }
        Ok(())
    }
}

/// Opens the detail view of the `index`-th visible listing.
///
/// # Errors
///
/// Returns an error if `index` is past the end of the feed.
pub(crate) async fn run_detail(
    client: FeedClient,
    index: usize,
    filter: FeedFilter,
) -> anyhow::Result<()> {
    let mut service = FeedService::new(client);
    service.load().await;
    let visible = service.apply_filter(filter);

    let listing = visible.get(index).ok_or_else(|| {
        anyhow::anyhow!("no listing at index {index}; the feed has {}", visible.len())
    })?;
    if let Err(e) = open_restaurant_detail(Some(&TerminalNavigator), listing) {
        report(&e);
    }
    Ok(())
}
