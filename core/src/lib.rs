//! Client core for the actress API.
//!
//! # Overview
//! Retrieves actress records from a remote JSON endpoint and validates them
//! at the trust boundary: nothing leaves this crate as an `Actress` unless
//! it passed the schema in `validate`.
//!
//! # Design
//! - `ActressClient` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - A `Transport` performs the round-trip; `ReqwestTransport` is the
//!   production implementation.
//! - `ActressFetcher` composes the two into async single, list and batch
//!   retrieval, in a `try_*` flavour with typed errors and a plain flavour
//!   that logs and collapses failures.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::ActressClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorKind};
pub use fetcher::ActressFetcher;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Actress, Nationality};
pub use validate::{is_actress_like, validate_actress, NationalityPolicy, SchemaError};
