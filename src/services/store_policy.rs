use std::future::Future;
use std::time::Duration;

use crate::core::config::Settings;
use crate::store::StoreError;

const READ_RETRY_BACKOFF_MS: u64 = 25;

/// Attempt budget and per-call deadline applied to store round trips.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StorePolicy {
    pub(crate) max_attempts: u32,
    pub(crate) store_timeout: Duration,
}

impl StorePolicy {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        let assignment = settings.assignment();
        Self {
            max_attempts: assignment.max_attempts.max(1),
            store_timeout: assignment.store_timeout(),
        }
    }

    /// Runs one store call under the configured deadline.
    pub(crate) async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.store_timeout))?
    }

    /// Repeats an idempotent read until it succeeds or the attempt budget is
    /// spent. Only reads go through here; writes are never replayed blindly.
    pub(crate) async fn read_with_retry<T, F, Fut>(
        &self,
        operation: &'static str,
        mut call: F,
    ) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let mut attempt = 1;
        loop {
            match self.bounded(call()).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts => {
                    tracing::warn!(operation, attempt, error = %err, "Store read failed; retrying");
                    tokio::time::sleep(Duration::from_millis(
                        READ_RETRY_BACKOFF_MS * u64::from(attempt),
                    ))
                    .await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
