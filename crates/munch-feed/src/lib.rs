pub mod alert;
pub mod auth;
pub mod category;
pub mod client;
pub mod defaults;
pub mod demo;
pub mod error;
pub mod favorites;
pub mod feed;
pub mod filter;
pub mod image;
pub mod menu;
pub mod navigation;
pub mod payload;
pub mod raw;

pub use alert::{Alert, AlertAction};
pub use auth::{OtpChallenge, SignUp};
pub use category::{fetch_category, filter_by_category};
pub use client::{FeedClient, RequestContext};
pub use defaults::{synthesize, synthesize_all, HeuristicDefaults};
pub use error::FeedError;
pub use favorites::{toggle_favorite, FavoritesStore, InMemoryFavorites};
pub use feed::{CategoryView, FeedService, FeedState};
pub use filter::{FeedFilter, UnknownFilter};
pub use image::FallbackImages;
pub use menu::{flatten_search, MenuSearch};
pub use navigation::{open_restaurant_detail, Navigator, Route};
pub use payload::ListingPayload;
pub use raw::RawRestaurant;
