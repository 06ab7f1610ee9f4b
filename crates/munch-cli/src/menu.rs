//! `menu` and `search` command handlers.

use munch_core::{MenuItem, ALL_CATEGORIES};
use munch_feed::{Alert, FeedClient};

fn print_items<'a>(items: impl IntoIterator<Item = &'a MenuItem>) {
    for item in items {
        println!(
            "{:<32}{:<16}{}",
            item.menu_name,
            item.category.as_deref().unwrap_or("Food"),
            item.amount.as_deref().unwrap_or("-"),
        );
    }
}

/// Prints a restaurant's categories and its items.
///
/// # Errors
///
/// Returns an error if `category` is not on the menu.
pub(crate) async fn run_menu(
    client: &FeedClient,
    restaurant_id: &str,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let menu = match client.restaurant_menu(restaurant_id).await {
        Ok(Some(menu)) => menu,
        Ok(None) => {
            println!("no menu available for restaurant {restaurant_id}");
            return Ok(());
        }
        Err(e) => {
            tracing::warn!(restaurant_id, error = %e, "menu request failed");
            println!("{}", Alert::menu_unavailable());
            return Ok(());
        }
    };

    let categories = menu.categories();
    println!("categories: {}", categories.join(", "));

    let category = category.unwrap_or(ALL_CATEGORIES);
    if !categories.iter().any(|c| c == category) {
        anyhow::bail!("category '{category}' is not on this menu");
    }
    print_items(menu.items_in(category));
    Ok(())
}

pub(crate) async fn run_search(client: &FeedClient, term: &str) {
    let search = client.search_menu(term).await;
    if search.items.is_empty() {
        println!("enter a search term");
        return;
    }
    if search.from_demo {
        println!("showing suggested dishes for '{}'", term.trim());
    }
    print_items(&search.items);
}
