use std::time::Duration;

/// Suspends the calling task; used for toast auto-dismiss and staged reveals.
pub async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
