//! Marking restaurants as favorites.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use munch_core::RestaurantListing;

use crate::error::FeedError;

/// Somewhere favorite restaurants are remembered.
pub trait FavoritesStore {
    fn is_favorite(&self, restaurant_id: &str) -> bool;

    /// # Errors
    ///
    /// Returns an error if the change could not be recorded.
    fn set_favorite(&self, restaurant_id: &str, favorite: bool) -> Result<(), FeedError>;
}

/// Process-local favorites.
#[derive(Debug, Default)]
pub struct InMemoryFavorites {
    ids: RwLock<HashSet<String>>,
}

impl FavoritesStore for InMemoryFavorites {
    fn is_favorite(&self, restaurant_id: &str) -> bool {
        self.ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(restaurant_id)
    }

    fn set_favorite(&self, restaurant_id: &str, favorite: bool) -> Result<(), FeedError> {
        let mut ids = self.ids.write().unwrap_or_else(PoisonError::into_inner);
        if favorite {
            ids.insert(restaurant_id.to_owned());
        } else {
            ids.remove(restaurant_id);
        }
        Ok(())
    }
}

/// Flips the favorite flag for `listing` and returns the new state.
///
/// # Errors
///
/// - [`FeedError::InvalidRestaurant`] when the listing has no id.
/// - [`FeedError::FavoriteToggleFailed`] wrapping whatever the store returned.
pub fn toggle_favorite<S: FavoritesStore + ?Sized>(
    store: &S,
    listing: &RestaurantListing,
) -> Result<bool, FeedError> {
    let restaurant_id = listing.id.trim();
    if restaurant_id.is_empty() {
        return Err(FeedError::InvalidRestaurant);
    }

    let favorite = !store.is_favorite(restaurant_id);
    tracing::debug!(restaurant_id, name = %listing.name, favorite, "toggling favorite");

    store
        .set_favorite(restaurant_id, favorite)
        .map_err(|source| {
            tracing::warn!(restaurant_id, error = %source, "favorite update failed");
            FeedError::FavoriteToggleFailed {
                restaurant_id: restaurant_id.to_owned(),
                source: Box::new(source),
            }
        })?;
    Ok(favorite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    struct Offline;

    impl FavoritesStore for Offline {
        fn is_favorite(&self, _restaurant_id: &str) -> bool {
            false
        }

        fn set_favorite(&self, _restaurant_id: &str, _favorite: bool) -> Result<(), FeedError> {
            Err(FeedError::HttpError {
                status: 503,
                url: "http://localhost:3000/api/favorites".into(),
            })
        }
    }

    fn listing() -> RestaurantListing {
        demo::feed_fallback().remove(0)
    }

    #[test]
    fn toggling_twice_restores_the_original_state() {
        let store = InMemoryFavorites::default();
        let l = listing();

        assert!(toggle_favorite(&store, &l).expect("first toggle"));
        assert!(store.is_favorite(&l.id));

        assert!(!toggle_favorite(&store, &l).expect("second toggle"));
        assert!(!store.is_favorite(&l.id));
    }

    #[test]
    fn favorites_are_tracked_per_restaurant() {
        let store = InMemoryFavorites::default();
        let mut feed = demo::feed_fallback();
        let second = feed.remove(1);
        let first = feed.remove(0);

        toggle_favorite(&store, &first).expect("toggle");
        assert!(store.is_favorite(&first.id));
        assert!(!store.is_favorite(&second.id));
    }

    #[test]
    fn store_failure_is_wrapped_with_retry_alert() {
        let l = listing();
        let err = toggle_favorite(&Offline, &l).unwrap_err();
        match &err {
            FeedError::FavoriteToggleFailed { restaurant_id, source } => {
                assert_eq!(restaurant_id, &l.id);
                assert!(matches!(**source, FeedError::HttpError { status: 503, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let alert = err.alert().expect("surfaced");
        assert_eq!(alert.message, "Failed to update favorite. Please try again.");
        assert_eq!(
            alert.actions,
            vec![crate::AlertAction::TryAgain, crate::AlertAction::Dismiss]
        );
    }

    #[test]
    fn missing_id_is_invalid() {
        let store = InMemoryFavorites::default();
        let mut l = listing();
        l.id = " ".into();
        assert!(matches!(
            toggle_favorite(&store, &l),
            Err(FeedError::InvalidRestaurant)
        ));
    }
}
