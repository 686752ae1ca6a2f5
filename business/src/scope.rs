//! Cancellable background work owned by a page.
//!
//! A [`TaskScope`] spawns request futures and races each of them against a
//! shared [`CancellationToken`]. Dropping the scope (leaving the page) cancels
//! everything it started, so late responses never reach a page that is gone.

use tokio_util::sync::CancellationToken;

use crate::api::RequestError;

#[derive(Debug, Default)]
pub struct TaskScope {
    token: CancellationToken,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels every task started so far and re-arms the scope for new work.
    pub fn cancel_all(&mut self) {
        self.token.cancel();
        self.token = CancellationToken::new();
    }

    /// Runs `work` in the background and hands its outcome to `deliver`.
    ///
    /// `deliver` is called exactly once. When the scope is cancelled first it
    /// receives [`RequestError::Cancelled`].
    pub fn spawn<T, F, D>(&self, work: F, deliver: D)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, RequestError>> + Send + 'static,
        D: FnOnce(Result<T, RequestError>) + Send + 'static,
    {
        let token = self.token.clone();

        let task = async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => Err(RequestError::Cancelled),
                result = work => result,
            };
            deliver(result);
        };

        #[cfg(not(target_arch = "wasm32"))]
        tokio::spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
