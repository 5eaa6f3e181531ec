//! Workflow Orchestrator: runs fetch then submit and keeps page state.
//!
//! State transitions:
//!
//! ```text
//! Idle | Succeeded | Failed --clone_from_url--> Loading --> Succeeded | Failed
//! ```
//!
//! Entering `Loading` clears the previous summary and toast. Leaving it is
//! guaranteed on every path, including a caller dropping the future.

mod state;

use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::CloneError;
use crate::fetcher::ProductSource;
use crate::submitter::CloneTarget;
use crate::types::{ClonedProductSummary, Toast};

pub use state::{CloneStatus, PageState};

/// Toast text shown after a successful clone.
pub const SUCCESS_TOAST: &str = "Created product";

/// Ties a [`ProductSource`] and a [`CloneTarget`] together behind one
/// user action.
///
/// Page state is published through a `watch` channel; call
/// [`CloneWorkflow::subscribe`] to observe transitions.
pub struct CloneWorkflow<F, S> {
    source: F,
    target: S,
    state: watch::Sender<PageState>,
}

impl<F, S> CloneWorkflow<F, S>
where
    F: ProductSource,
    S: CloneTarget,
{
    pub fn new(source: F, target: S) -> Self {
        let (state, _) = watch::channel(PageState::default());
        Self {
            source,
            target,
            state,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.state.subscribe()
    }

    /// Snapshot of the current page state.
    #[must_use]
    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub fn dismiss_toast(&self) {
        self.state.send_if_modified(|page| page.toast.take().is_some());
    }

    /// Returns to `Idle`, dropping any summary and toast. Ignored while a
    /// clone is in flight.
    pub fn reset(&self) {
        self.state.send_if_modified(|page| {
            if page.is_loading() || *page == PageState::default() {
                return false;
            }
            *page = PageState::default();
            true
        });
    }

    /// Clones the product behind `url` into the current store.
    ///
    /// Fetch and submit run strictly in sequence. Stage failures end in
    /// [`CloneStatus::Failed`] with an error toast carrying the error's
    /// message; they are also returned so callers can inspect the cause.
    ///
    /// # Errors
    ///
    /// - [`CloneError::EmptyUrl`] — blank input; state is untouched.
    /// - [`CloneError::InFlight`] — another clone is running; state is untouched.
    /// - [`CloneError::Fetch`] — the storefront product could not be retrieved.
    /// - [`CloneError::Submit`] — the backend did not create the product.
    pub async fn clone_from_url(&self, url: &str) -> Result<ClonedProductSummary, CloneError> {
        if url.trim().is_empty() {
            return Err(CloneError::EmptyUrl);
        }

        let started = self.state.send_if_modified(|page| {
            if page.is_loading() {
                return false;
            }
            page.status = CloneStatus::Loading;
            page.toast = None;
            true
        });
        if !started {
            tracing::warn!(url, "clone requested while another is in flight");
            return Err(CloneError::InFlight);
        }
        let guard = LoadingGuard {
            state: &self.state,
            armed: true,
        };

        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!("clone_product", %attempt_id, url);
        let outcome = self.fetch_and_submit(url).instrument(span).await;

        match outcome {
            Ok(summary) => {
                tracing::info!(
                    %attempt_id,
                    product_id = %summary.id,
                    shop = %summary.shop,
                    "product cloned"
                );
                guard.finish(PageState {
                    status: CloneStatus::Succeeded(summary.clone()),
                    toast: Some(Toast::success(SUCCESS_TOAST)),
                });
                Ok(summary)
            }
            Err(err) => {
                let cause = std::error::Error::source(&err).map(ToString::to_string);
                tracing::warn!(
                    %attempt_id,
                    error = %err,
                    cause = cause.as_deref(),
                    "product clone failed"
                );
                let message = err.to_string();
                guard.finish(PageState {
                    status: CloneStatus::Failed(message.clone()),
                    toast: Some(Toast::error(message)),
                });
                Err(err)
            }
        }
    }

    async fn fetch_and_submit(&self, url: &str) -> Result<ClonedProductSummary, CloneError> {
        let payload = self.source.fetch_remote_product(url).await?;
        let created = self.target.clone_product(&payload).await?;
        Ok(ClonedProductSummary::from_parts(&payload, created))
    }
}

/// Leaves `Loading` when dropped without [`LoadingGuard::finish`], so a
/// cancelled attempt cannot strand the page in a loading state.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<PageState>,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn finish(mut self, next: PageState) {
        self.armed = false;
        self.state.send_replace(next);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_if_modified(|page| {
                if !page.is_loading() {
                    return false;
                }
                page.status = CloneStatus::Idle;
                true
            });
        }
    }
}

#[cfg(test)]
#[path = "../workflow_test.rs"]
mod tests;
