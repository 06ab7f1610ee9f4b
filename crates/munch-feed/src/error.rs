use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to {url} timed out after {timeout_ms}ms")]
    RequestTimeout { url: String, timeout_ms: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpError { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("failed to fetch {category} restaurants: {source}")]
    CategoryFetchFailed {
        category: String,
        #[source]
        source: Box<FeedError>,
    },

    #[error("failed to update favorite for restaurant {restaurant_id}: {source}")]
    FavoriteToggleFailed {
        restaurant_id: String,
        #[source]
        source: Box<FeedError>,
    },

    #[error("no restaurants found offering {category} food")]
    NoCategoryResults { category: String },

    #[error("invalid restaurant data")]
    InvalidRestaurant,

    #[error("navigation to {target} is not available")]
    NavigationUnavailable { target: String },

    #[error("login rejected: {message}")]
    AuthRejected { message: String },

    #[error("invalid OTP")]
    InvalidOtp,

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

impl FeedError {
    /// Returns `true` for the outcomes a feed load treats as "unable to load":
    /// timeouts, non-2xx statuses, undecodable bodies, and transport failures.
    #[must_use]
    pub fn is_unable_to_load(&self) -> bool {
        matches!(
            self,
            FeedError::RequestTimeout { .. }
                | FeedError::HttpError { .. }
                | FeedError::Decode { .. }
                | FeedError::Transport(_)
        )
    }
}
