//! User-facing alerts for the failures the app surfaces.

use std::fmt;

use crate::error::FeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    TryAgain,
    Dismiss,
}

impl AlertAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AlertAction::TryAgain => "Try Again",
            AlertAction::Dismiss => "OK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
    pub actions: Vec<AlertAction>,
}

impl Alert {
    fn dismissable(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            actions: vec![AlertAction::Dismiss],
        }
    }

    /// Shown when a restaurant's menu cannot be fetched.
    #[must_use]
    pub fn menu_unavailable() -> Self {
        Self::dismissable("Error", "Failed to load restaurant menu")
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)?;
        let labels: Vec<_> = self.actions.iter().map(|a| a.label()).collect();
        write!(f, " [{}]", labels.join(", "))
    }
}

impl FeedError {
    /// The alert shown for this error, or `None` when it is handled silently.
    ///
    /// Primary feed-load failures are never surfaced; the demo feed is shown
    /// instead.
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        let alert = match self {
            FeedError::CategoryFetchFailed { category, .. } => Alert {
                title: "Error",
                message: format!(
                    "Something went wrong while loading {category} restaurants. Please try again."
                ),
                actions: vec![AlertAction::TryAgain, AlertAction::Dismiss],
            },
            FeedError::FavoriteToggleFailed { source, .. } => Alert {
                title: "Error",
                message: source.alert().map_or_else(
                    || "Failed to update favorite. Please try again.".to_owned(),
                    |inner| inner.message,
                ),
                actions: vec![AlertAction::TryAgain, AlertAction::Dismiss],
            },
            FeedError::NoCategoryResults { category } => Alert::dismissable(
                "No Results",
                format!("No restaurants found offering {category} food. Please try another category."),
            ),
            FeedError::NavigationUnavailable { .. } => Alert::dismissable(
                "Navigation Error",
                "Navigation not available. Please restart the app.",
            ),
            FeedError::InvalidRestaurant => {
                Alert::dismissable("Error", "Invalid restaurant data. Please try again.")
            }
            FeedError::AuthRejected { message } => Alert::dismissable("Info", message.clone()),
            FeedError::InvalidOtp => {
                Alert::dismissable("Info", "Invalid OTP, please try again")
            }
            FeedError::MissingField { .. } => {
                Alert::dismissable("Info", "Please fill required fields!")
            }
            FeedError::RequestTimeout { .. }
            | FeedError::HttpError { .. }
            | FeedError::Decode { .. }
            | FeedError::Transport(_)
            | FeedError::InvalidBaseUrl { .. } => return None,
        };
        Some(alert)
    }
}
