//! Async retrieval of validated actress records.
//!
//! # Design
//! `ActressFetcher` pairs an `ActressClient` with a `Transport`. The
//! `try_*` operations return a distinguishable `ApiError`; the plain
//! operations log the failure and collapse it to `None` or an empty `Vec`,
//! so they never fail from the caller's point of view.
//!
//! `fetch_many` drives one single-fetch future per id concurrently on the
//! caller's task with `join_all`. Nothing is spawned, and results come back
//! in input order regardless of completion order.

use futures::future::join_all;

use crate::client::ActressClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::Actress;

#[derive(Debug, Clone)]
pub struct ActressFetcher<T = ReqwestTransport> {
    client: ActressClient,
    transport: T,
}

impl ActressFetcher<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            ActressClient::with_policy(&config.base_url, config.nationality_policy),
            ReqwestTransport::new(),
        )
    }
}

impl<T: Transport> ActressFetcher<T> {
    pub fn new(client: ActressClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ActressClient {
        &self.client
    }

    /// GET `/users/{id}`, then status check, decode and validation.
    pub async fn try_fetch_one(&self, id: i64) -> Result<Actress, ApiError> {
        let request = self.client.build_get_actress(id);
        tracing::debug!(url = %request.url, "fetching actress");
        let response = self.transport.execute(&request).await?;
        self.client.parse_get_actress(response)
    }

    /// GET `/users`. Invalid elements are dropped; a non-array body fails.
    pub async fn try_fetch_all(&self) -> Result<Vec<Actress>, ApiError> {
        let request = self.client.build_list_actresses();
        tracing::debug!(url = %request.url, "fetching all actresses");
        let response = self.transport.execute(&request).await?;
        self.client.parse_list_actresses(response)
    }

    /// One outcome per id, positioned like `ids`. A failing id does not
    /// affect the others.
    pub async fn try_fetch_many(&self, ids: &[i64]) -> Vec<Result<Actress, ApiError>> {
        join_all(ids.iter().map(|&id| self.try_fetch_one(id))).await
    }

    pub async fn fetch_one(&self, id: i64) -> Option<Actress> {
        match self.try_fetch_one(id).await {
            Ok(actress) => Some(actress),
            Err(e) => {
                tracing::error!(id, kind = ?e.kind(), error = %e, "failed to fetch actress");
                None
            }
        }
    }

    pub async fn fetch_all(&self) -> Vec<Actress> {
        match self.try_fetch_all().await {
            Ok(actresses) => actresses,
            Err(e) => {
                tracing::error!(kind = ?e.kind(), error = %e, "failed to fetch actresses");
                Vec::new()
            }
        }
    }

    /// The successfully fetched records, in the order of `ids`.
    pub async fn fetch_many(&self, ids: &[i64]) -> Vec<Actress> {
        join_all(ids.iter().map(|&id| self.fetch_one(id)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }
}
