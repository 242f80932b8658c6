//! Binding outstanding requests to the lifetime of whatever view issued them.
//!
//! A view creates a [`RequestScope`], spawns its lookups through it, and polls the returned
//! receivers. When the view goes away it drops the scope, which aborts every lookup still in
//! flight, so a late response can never be applied to state that no longer exists.

use std::future::Future;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Owns a set of spawned request tasks and aborts them when dropped.
#[derive(Debug, Default)]
pub struct RequestScope {
    tasks: Vec<JoinHandle<()>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `request` onto the current tokio runtime and returns a receiver for its output.
    ///
    /// If the scope is cancelled or dropped first, the receiver reports
    /// [`oneshot::error::RecvError`] (or `TryRecvError::Closed`).
    pub fn spawn<F, T>(&mut self, request: F) -> oneshot::Receiver<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        // forget about requests that have already delivered their result
        self.tasks.retain(|handle| !handle.is_finished());

        let (tx, rx) = oneshot::channel();
        self.tasks.push(tokio::spawn(async move {
            let output = request.await;
            if tx.send(output).is_err() {
                tracing::trace!("request finished after its receiver was dropped");
            }
        }));
        rx
    }

    /// Number of spawned requests that have not yet completed.
    pub fn outstanding(&self) -> usize {
        self.tasks.iter().filter(|h| !h.is_finished()).count()
    }

    /// Aborts every outstanding request.
    pub fn cancel(&mut self) {
        let mut aborted = 0;
        for handle in self.tasks.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        if aborted > 0 {
            tracing::debug!(aborted, "cancelled outstanding requests");
        }
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completed_request_is_delivered() {
        let mut scope = RequestScope::new();
        let rx = scope.spawn(async { 42 });
        assert_eq!(rx.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_drop_aborts_outstanding_requests() {
        let mut scope = RequestScope::new();
        let rx = scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            "too late"
        });
        assert_eq!(scope.outstanding(), 1);

        drop(scope);
        let result = tokio::time::timeout(Duration::from_secs(5), rx)
            .await
            .expect("receiver should close promptly once the scope is dropped");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cancel_leaves_scope_reusable() {
        let mut scope = RequestScope::new();
        let stale = scope.spawn(std::future::pending::<()>());
        scope.cancel();
        assert!(stale.await.is_err());
        assert_eq!(scope.outstanding(), 0);

        let fresh = scope.spawn(async { "fresh" });
        assert_eq!(fresh.await.unwrap(), "fresh");
    }
}
