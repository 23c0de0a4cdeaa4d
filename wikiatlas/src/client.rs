use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, info, instrument, Level};

use crate::{AtlasConfig, AtlasError};

pub const SPARQL_QUERY: &str = "application/sparql-query";
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// `{ "results": { "bindings": [...] } }`, everything else in the document
/// (`head`, ...) is ignored.
#[derive(Debug, Deserialize)]
struct SparqlResponse<T> {
    results: SparqlResults<T>,
}

#[derive(Debug, Deserialize)]
struct SparqlResults<T> {
    bindings: Vec<T>,
}

/// Posts SPARQL queries to a single endpoint.
#[derive(Debug, Clone)]
pub struct SparqlClient {
    client: Client,
    endpoint: String,
}

impl SparqlClient {
    pub fn new(config: &AtlasConfig) -> Result<Self, AtlasError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(AtlasError::Client)?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Reuses an already configured `reqwest::Client`.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `query` and returns the result rows.
    ///
    /// Fails with [`AtlasError::Status`] on any non-2xx answer and with
    /// [`AtlasError::Json`] when the body is not a SPARQL JSON result.
    #[instrument(level = Level::DEBUG, skip(self, query), fields(endpoint = %self.endpoint))]
    pub async fn fetch_bindings<T: DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<Vec<T>, AtlasError> {
        debug!(bytes = query.len(), "posting sparql query");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, SPARQL_QUERY)
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .body(query.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AtlasError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let data: SparqlResponse<T> = serde_json::from_slice(&body)?;

        info!(rows = data.results.bindings.len(), "sparql query answered");
        Ok(data.results.bindings)
    }
}
