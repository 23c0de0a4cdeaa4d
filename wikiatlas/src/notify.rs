//! Progress toasts for in-flight requests.
//!
//! The UI is not ours. Whatever shows notifications implements [`Toaster`]
//! and gets handed a [`Pending`] for every request together with the
//! titles to show while it runs and once it settles.

use std::fmt;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {description}", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

/// What to show for each phase of a tracked request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseToast {
    pub loading: Toast,
    pub success: Toast,
    /// `None` leaves failures to the toaster's own default.
    pub error: Option<Toast>,
}

impl PromiseToast {
    pub fn locations() -> Self {
        Self {
            loading: Toast::titled("Retrieving Locations..."),
            success: Toast::titled("Locations Retrieved"),
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Success,
    Failure(String),
}

/// Resolves once the tracked request has finished.
#[derive(Debug)]
pub struct Pending(oneshot::Receiver<Settled>);

impl Pending {
    pub(crate) fn channel() -> (oneshot::Sender<Settled>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self(rx))
    }

    /// A request that has already settled.
    pub fn ready(outcome: Settled) -> Self {
        let (tx, pending) = Self::channel();
        let _ = tx.send(outcome);
        pending
    }

    pub async fn settled(self) -> Settled {
        self.0
            .await
            .unwrap_or_else(|_| Settled::Failure("request was dropped before it settled".into()))
    }
}

/// A notification surface able to follow a request from start to end.
#[async_trait]
pub trait Toaster: Send + Sync {
    /// Show `toast.loading` right away, then `toast.success` (or an error)
    /// when `pending` settles.
    async fn promise(&self, pending: Pending, toast: PromiseToast);
}

/// Renders toasts as log lines. Used when there is no UI, e.g. the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingToaster;

#[async_trait]
impl Toaster for TracingToaster {
    async fn promise(&self, pending: Pending, toast: PromiseToast) {
        info!(phase = "loading", "{}", toast.loading);
        match pending.settled().await {
            Settled::Success => info!(phase = "success", "{}", toast.success),
            Settled::Failure(reason) => match toast.error {
                Some(error) => warn!(phase = "error", %reason, "{error}"),
                None => warn!(phase = "error", "{reason}"),
            },
        }
    }
}
