//! HTTP client for the munch restaurant API.
//!
//! Every call is raced against the configured timeout (5 s by default). A
//! call that loses the race, returns a non-2xx status, or sends a body that
//! is not JSON fails with a typed [`FeedError`]; callers on the primary feed
//! path treat all of them the same way.

mod request;
mod timeout;

use std::time::Duration;

use munch_core::AppConfig;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::error::FeedError;
use crate::payload::ListingPayload;

pub use request::RequestContext;
pub(crate) use request::{
    restaurant_id_value, CreateCustomerRequest, LoginRequest, MenuRequest, MenuSearchRequest,
    RestaurantsRequest,
};

pub const DEFAULT_BASE_URL: &str = "http://18.219.192.152:3052";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

pub(crate) const RESTAURANTS_PATH: &str = "api/restaurants";
pub(crate) const MENU_PATH: &str = "api/restaurantMenu";
pub(crate) const MENU_SEARCH_PATH: &str = "api/restaurantMenuSearchTerm";
pub(crate) const LOGIN_PATH: &str = "api/logIn";
pub(crate) const CREATE_CUSTOMER_PATH: &str = "api/createCustomer";

/// Status and raw body of a response that arrived before the deadline.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn decode(&self, context: &str) -> Result<Value, FeedError> {
        serde_json::from_str(&self.body).map_err(|e| FeedError::Decode {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Client for the restaurant, menu, and customer endpoints.
///
/// Use [`FeedClient::new`] with an explicit base URL (e.g. a wiremock server
/// in tests) or [`FeedClient::from_config`] for the configured API.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    context: RequestContext,
}

impl FeedClient {
    /// Creates a client for `base_url` with a per-request deadline of `timeout_ms`.
    ///
    /// The underlying `reqwest::Client` only carries a connect timeout so
    /// the overall deadline is decided by the race in each call.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] if the `reqwest::Client` cannot be
    /// built, or [`FeedError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_ms: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so `join` appends to the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| FeedError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FeedError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            timeout: Duration::from_millis(timeout_ms),
            context: RequestContext::default(),
        })
    }

    /// Builds a client from [`AppConfig`], including the default location and customer.
    ///
    /// # Errors
    ///
    /// See [`FeedClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FeedError> {
        let client = Self::new(
            &config.api_base_url,
            config.request_timeout_ms,
            &config.user_agent,
        )?;
        Ok(client.with_context(RequestContext {
            latitude: config.default_latitude.clone(),
            longitude: config.default_longitude.clone(),
            customer_id: config.customer_id,
        }))
    }

    #[must_use]
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, FeedError> {
        self.base_url
            .join(path)
            .map_err(|e| FeedError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })
    }

    /// POSTs `body` and returns the status and body text, whatever the status.
    ///
    /// # Errors
    ///
    /// - [`FeedError::RequestTimeout`] if the response body is not fully read before the deadline.
    /// - [`FeedError::Transport`] on connection or TLS failure.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, FeedError> {
        let url = self.endpoint(path)?;
        let url_text = url.to_string();

        timeout::race(&url_text, self.timeout, async {
            tracing::debug!(url = %url_text, "POST");
            let response = self.client.post(url.clone()).json(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(RawResponse {
                status,
                url: url_text.clone(),
                body,
            })
        })
        .await
    }

    /// POSTs `body` and decodes a 2xx JSON response.
    ///
    /// # Errors
    ///
    /// - [`FeedError::RequestTimeout`] when the deadline passes first.
    /// - [`FeedError::HttpError`] for any non-2xx status.
    /// - [`FeedError::Decode`] when the body is not JSON.
    /// - [`FeedError::Transport`] on network failure.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, FeedError> {
        let response = self.send(path, body).await?;
        if !response.is_success() {
            return Err(FeedError::HttpError {
                status: response.status,
                url: response.url,
            });
        }
        response.decode(path)
    }

    /// Fetches and classifies the full restaurant collection for the client's location.
    ///
    /// # Errors
    ///
    /// Any error from [`FeedClient::post_json`]; an unrecognized payload shape
    /// is not an error and classifies as [`ListingPayload::Unrecognized`].
    pub async fn restaurants(&self) -> Result<ListingPayload, FeedError> {
        let body = RestaurantsRequest {
            latitude: &self.context.latitude,
            longitude: &self.context.longitude,
            customer_id: self.context.customer_id,
        };
        let json = self.post_json(RESTAURANTS_PATH, &body).await?;
        Ok(ListingPayload::classify(json))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
