//! HTTP transport: request/response data types and the preconfigured sender.
//!
//! # Design
//! Requests and responses are plain owned data. The `client` module builds
//! `HttpRequest` values and interprets `HttpResponse` values; `HttpClient`
//! owns the actual round-trip. Keeping the boundary explicit means request
//! building and status interpretation stay deterministic and unit-testable
//! without a network.
//!
//! `HttpClient` is fixed at construction: one timeout, one set of default
//! headers, a single attempt per request. Transport failures are classified
//! into `Timeout` (deadline exceeded) and `Network` (unsendable, or no
//! response arrived). A received response is returned as data whatever its
//! status; the caller decides what a non-2xx means.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::middleware::{RequestHook, TraceHook};

/// The only verbs this client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data, carrying an absolute URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Preconfigured request sender.
///
/// Every request passes through the installed [`RequestHook`] pipeline:
/// `before_send` on the way out, then exactly one of `after_receive` (2xx)
/// or `on_error` (non-2xx, timeout, or network failure).
pub struct HttpClient {
    inner: reqwest::Client,
    headers: Vec<(String, String)>,
    hooks: Vec<Arc<dyn RequestHook>>,
}

impl HttpClient {
    /// Build a sender with the config's timeout and the fixed JSON headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            inner,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
            hooks: vec![Arc::new(TraceHook)],
        })
    }

    /// Install an additional hook stage. Stages run in installation order.
    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Execute one request. A single attempt; no retry.
    ///
    /// # Errors
    ///
    /// `ApiError::Timeout` when the deadline is exceeded, `ApiError::Network`
    /// when the request could not be sent or the response body could not be
    /// read. Non-2xx responses are NOT errors here; they come back as data.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = self.with_fixed_headers(request);
        for hook in &self.hooks {
            hook.before_send(&request);
        }

        let outcome = self.send(&request).await;
        match &outcome {
            Ok(response) if response.is_success() => {
                for hook in &self.hooks {
                    hook.after_receive(&request, response);
                }
            }
            Ok(response) => {
                let failure = ApiError::HttpStatus {
                    status: response.status,
                    body: response.body.clone(),
                };
                for hook in &self.hooks {
                    hook.on_error(&request, &failure);
                }
            }
            Err(err) => {
                for hook in &self.hooks {
                    hook.on_error(&request, err);
                }
            }
        }
        outcome
    }

    /// Prepend the client's fixed headers so hooks observe exactly what is
    /// sent. Per-request headers follow, and later entries win in reqwest.
    fn with_fixed_headers(&self, mut request: HttpRequest) -> HttpRequest {
        let mut merged = self.headers.clone();
        merged.append(&mut request.headers);
        request.headers = merged;
        request
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.inner.get(&request.url),
            HttpMethod::Post => self.inner.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}
