//! Stateless HTTP request builder and response parser for the actress API.
//!
//! # Design
//! `ActressClient` holds only a `base_url` and the nationality policy, and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Both routes check the status before
//! decoding the body.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Actress;
use crate::validate::{json_kind, validate_actress, NationalityPolicy};

/// Synchronous, stateless client for the actress API.
#[derive(Debug, Clone)]
pub struct ActressClient {
    base_url: String,
    policy: NationalityPolicy,
}

impl ActressClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_policy(base_url, NationalityPolicy::default())
    }

    pub fn with_policy(base_url: &str, policy: NationalityPolicy) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> NationalityPolicy {
        self.policy
    }

    pub fn build_list_actresses(&self) -> HttpRequest {
        get(format!("{}/users", self.base_url))
    }

    pub fn build_get_actress(&self, id: i64) -> HttpRequest {
        get(format!("{}/users/{id}", self.base_url))
    }

    /// Keeps the elements that validate, in their original order. Invalid
    /// elements are dropped, not reported as an error.
    pub fn parse_list_actresses(&self, response: HttpResponse) -> Result<Vec<Actress>, ApiError> {
        check_status(&response)?;
        let items = match decode(&response.body)? {
            Value::Array(items) => items,
            other => {
                return Err(ApiError::Shape {
                    expected: "array",
                    found: json_kind(&other),
                })
            }
        };

        let total = items.len();
        let actresses: Vec<Actress> = items
            .iter()
            .filter_map(|item| match validate_actress(item, self.policy) {
                Ok(actress) => Some(actress),
                Err(e) => {
                    tracing::debug!(error = %e, "dropping invalid list element");
                    None
                }
            })
            .collect();

        if actresses.len() < total {
            tracing::warn!(
                rejected = total - actresses.len(),
                total,
                "list response contained invalid records"
            );
        }
        Ok(actresses)
    }

    pub fn parse_get_actress(&self, response: HttpResponse) -> Result<Actress, ApiError> {
        check_status(&response)?;
        let value = decode(&response.body)?;
        Ok(validate_actress(&value, self.policy)?)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

fn decode(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
