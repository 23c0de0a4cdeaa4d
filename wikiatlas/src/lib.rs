use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use rusty_events::{EventId, EventLocation};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::debug;

pub mod client;
pub use client::*;
pub mod config;
pub use config::*;
pub mod error;
pub use error::*;
pub mod notify;
pub use notify::*;
pub mod query;
pub use query::*;

/// Fetches event details from the knowledge graph and reports progress to
/// a [`Toaster`].
#[derive(Clone)]
pub struct Atlas {
    client: SparqlClient,
    toaster: Arc<dyn Toaster>,
}

impl Atlas {
    pub fn new(client: SparqlClient, toaster: Arc<dyn Toaster>) -> Self {
        Self { client, toaster }
    }

    pub fn from_config(config: &AtlasConfig, toaster: Arc<dyn Toaster>) -> Result<Self, AtlasError> {
        Ok(Self::new(SparqlClient::new(config)?, toaster))
    }

    /// Starts fetching the details of `ids` and returns the pending result.
    ///
    /// The request is sent right away, awaiting the returned
    /// [`EventsRequest`] only collects it. The toaster is spawned onto the
    /// runtime rather than called here, so it never runs before the caller
    /// got hold of the request and never changes what the request yields.
    ///
    /// Fails with [`AtlasError::NoRuntime`] outside of a tokio runtime.
    pub fn get_events_data(&self, ids: &[EventId]) -> Result<EventsRequest, AtlasError> {
        let runtime = Handle::try_current()?;
        let query = build_details_query(ids);
        debug!(events = ids.len(), "requesting event details");

        let (settle, pending) = Pending::channel();
        let client = self.client.clone();
        let task = runtime.spawn(async move {
            let result = client.fetch_bindings::<EventLocation>(&query).await;
            let outcome = match &result {
                Ok(_) => Settled::Success,
                Err(e) => Settled::Failure(e.to_string()),
            };
            // nobody listening is fine
            let _ = settle.send(outcome);
            result
        });

        let toaster = self.toaster.clone();
        runtime.spawn(async move {
            toaster.promise(pending, PromiseToast::locations()).await;
        });

        Ok(EventsRequest { task })
    }
}

/// Result of [`Atlas::get_events_data`]. Dropping it does not cancel the
/// request.
#[must_use = "the event details are only available by awaiting the request"]
#[derive(Debug)]
pub struct EventsRequest {
    task: JoinHandle<Result<Vec<EventLocation>, AtlasError>>,
}

impl Future for EventsRequest {
    type Output = Result<Vec<EventLocation>, AtlasError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task)
            .poll(cx)
            .map(|joined| joined.map_err(AtlasError::from).and_then(|res| res))
    }
}
