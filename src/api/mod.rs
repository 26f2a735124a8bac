//! # LiquidPlanner API client
//!
//! Read-only access to the two workspace collections the reports need.
//!
//! | Endpoint | Result |
//! |----------|--------|
//! | `GET {base}members` | [`Members`](crate::domain::Members) keyed by id |
//! | `GET {base}tasks?filter[]=is_done%20is%20false` | not-done [`Task`](crate::domain::Task)s in API order |
//!
//! `{base}` defaults to [`DEFAULT_API_URL`] with the workspace id filled in.
//!
//! ## Layers
//!
//! - [`HttpClient`] - transport seam; [`BasicAuthClient`] signs each request
//!   with HTTP Basic credentials and optionally logs the URL to stderr
//! - [`LpApi`] - builds endpoint URLs, parses JSON, normalizes timestamps
//!
//! The client is an ordinary value owned by [`LpApi`]; there is no
//! process-wide opener or credential store.

mod error;
mod http;
mod client;

pub use error::ApiError;
pub use http::{basic_authorization, BasicAuthClient, HttpClient};
pub use client::{LpApi, DEFAULT_API_URL, NOT_DONE_FILTER};
