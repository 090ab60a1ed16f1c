//! Observability stages around each HTTP request.
//!
//! # Design
//! A request's lifecycle exposes three points: before it is sent, after a
//! successful response arrives, and on any failure. Each stage is a method
//! on [`RequestHook`] with an empty default body, so an implementation only
//! overrides what it observes. [`HttpClient`](crate::http::HttpClient) runs
//! every installed hook at each point; stages compose in installation order
//! and are independent of how the request is actually executed.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// One composable stage in the request pipeline.
pub trait RequestHook: Send + Sync {
    /// Runs before the request leaves the client.
    fn before_send(&self, _request: &HttpRequest) {}

    /// Runs after a 2xx response has been received.
    fn after_receive(&self, _request: &HttpRequest, _response: &HttpResponse) {}

    /// Runs on any failure: non-2xx status, timeout, or network error.
    fn on_error(&self, _request: &HttpRequest, _error: &ApiError) {}
}

/// Default logging stage, installed on every [`HttpClient`](crate::http::HttpClient).
///
/// Emits a structured record before each send (method, URL, headers) and a
/// failure record that distinguishes the three failure shapes: a status
/// response (status + body), no response at all, and everything else.
pub struct TraceHook;

impl RequestHook for TraceHook {
    fn before_send(&self, request: &HttpRequest) {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            headers = ?request.headers,
            "starting request"
        );
    }

    fn after_receive(&self, request: &HttpRequest, response: &HttpResponse) {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            status = response.status,
            "request completed"
        );
    }

    fn on_error(&self, request: &HttpRequest, error: &ApiError) {
        match error {
            ApiError::HttpStatus { status, body } => {
                tracing::error!(
                    url = %request.url,
                    status = *status,
                    body = %body,
                    "error response"
                );
            }
            ApiError::Timeout | ApiError::Network(_) => {
                tracing::error!(url = %request.url, error = %error, "no response");
            }
            other => {
                tracing::error!(url = %request.url, error = %other, "request error");
            }
        }
    }
}
