use std::future::Future;
use std::time::Duration;

use crate::error::FeedError;

/// Races `operation` against a timer of `limit`.
///
/// When the timer fires first the operation future is dropped and
/// [`FeedError::RequestTimeout`] is returned. Dropping only stops polling;
/// a request already handed to the network may still complete server-side.
pub(crate) async fn race<T, F>(url: &str, limit: Duration, operation: F) -> Result<T, FeedError>
where
    F: Future<Output = Result<T, FeedError>>,
{
    if let Ok(result) = tokio::time::timeout(limit, operation).await {
        result
    } else {
        let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
        tracing::warn!(url, timeout_ms, "request timed out");
        Err(FeedError::RequestTimeout {
            url: url.to_owned(),
            timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn never_settling_request_times_out_at_limit() {
        let started = tokio::time::Instant::now();
        let result: Result<(), FeedError> = race(
            "http://example.test/api/restaurants",
            Duration::from_millis(5000),
            std::future::pending(),
        )
        .await;

        assert!(
            matches!(result, Err(FeedError::RequestTimeout { timeout_ms: 5000, .. })),
            "expected RequestTimeout, got: {result:?}"
        );
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(5000));
        assert!(elapsed < Duration::from_millis(5100));
    }

    #[tokio::test(start_paused = true)]
    async fn fast_operation_wins_the_race() {
        let result = race("http://example.test", Duration::from_millis(5000), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, FeedError>(7)
        })
        .await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn operation_error_is_passed_through() {
        let result: Result<(), FeedError> = race("http://example.test", Duration::from_secs(1), async {
            Err(FeedError::HttpError {
                status: 502,
                url: "http://example.test".to_owned(),
            })
        })
        .await;
        assert!(matches!(result, Err(FeedError::HttpError { status: 502, .. })));
    }
}
