//! Time budgets for collaborator calls

use std::future::Future;
use std::time::Duration;

use crate::errors::{DomainError, DomainResult};

/// Run a store call under `budget`; an elapsed budget is `StoreUnavailable`
pub(crate) async fn store_call<T, F>(budget: Duration, operation: &'static str, call: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(budget, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                operation = operation,
                timeout_ms = budget.as_millis() as u64,
                event = "otp_store_timeout",
                "Durable store call exceeded its time budget"
            );
            Err(DomainError::store_unavailable(format!(
                "{} timed out after {}ms",
                operation,
                budget.as_millis()
            )))
        }
    }
}

/// Run a notifier call under `budget`; failures and timeouts are `NotifyFailed`
pub(crate) async fn notify_call<F>(budget: Duration, call: F) -> DomainResult<String>
where
    F: Future<Output = Result<String, String>>,
{
    match tokio::time::timeout(budget, call).await {
        Ok(Ok(message_id)) => Ok(message_id),
        Ok(Err(e)) => Err(DomainError::notify_failed(e)),
        Err(_) => Err(DomainError::notify_failed(format!(
            "notifier timed out after {}ms",
            budget.as_millis()
        ))),
    }
}
