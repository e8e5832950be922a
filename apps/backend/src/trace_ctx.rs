//! Task-local trace id for web requests.
//!
//! `RequestTrace` establishes the scope; anything on the request path (most
//! importantly `AppError::error_response`) can read the id without threading
//! it through every signature. Web boundary only; services and repos should
//! not import this.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current task, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with the given trace id in scope.
pub async fn with_trace_id<F, R>(id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(id, future).await
}
