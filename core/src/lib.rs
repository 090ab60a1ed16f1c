//! Asynchronous client core for a blog service's REST API.
//!
//! # Overview
//! The data-fetching layer every screen of the app sits on: a preconfigured
//! HTTP transport, typed request building and response parsing, per-screen
//! fetch-state tracking, and the process-wide refresh signal that tells list
//! screens to reload after a creation.
//!
//! # Design
//! - [`BlogClient`] is stateless — it holds only `base_url`. Each operation
//!   is split into `build_*` (produces a request) and `parse_*` (consumes a
//!   response), so both halves are testable without a network.
//! - [`HttpClient`] executes requests with a fixed timeout and fixed JSON
//!   headers, running a [`RequestHook`] pipeline around each round-trip.
//! - [`BlogApi`] composes the two and owns the [`RefreshSignal`]; creation
//!   operations bump the signal exactly once on success.
//! - [`Loader`] holds a screen's `Idle/Loading/Ready/Error` state and
//!   discards superseded responses, so "last request wins" races cannot
//!   overwrite fresh data with stale.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod middleware;
pub mod refresh;
pub mod types;

pub use api::BlogApi;
pub use client::BlogClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use loader::{FetchState, FetchTicket, Loader};
pub use middleware::{RequestHook, TraceHook};
pub use refresh::{RefreshSignal, RefreshWatcher};
pub use types::{BlogPost, CreateBlogPost, CreateUser, User};
