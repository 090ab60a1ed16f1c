//! Stateless HTTP request builder and response parser for the blog API.
//!
//! # Design
//! `BlogClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! both halves stay deterministic and unit-testable without a network; the
//! transport executes the round-trip in between.
//!
//! Creation builders validate the payload first: a missing required field
//! fails with `Validation` and no request is ever constructed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BlogPost, CreateBlogPost, CreateUser, User};

/// Stateless builder/parser for the blog API surface.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        get(format!("{}/posts", self.base_url))
    }

    pub fn build_get_post(&self, id: &str) -> HttpRequest {
        get(format!("{}/posts/{id}", self.base_url))
    }

    /// # Errors
    ///
    /// `Validation` when a required field is empty; `Serialization` when the
    /// payload cannot be encoded.
    pub fn build_create_post(&self, input: &CreateBlogPost) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        post(format!("{}/posts", self.base_url), input)
    }

    pub fn build_list_users(&self) -> HttpRequest {
        get(format!("{}/posts/proxy/users", self.base_url))
    }

    pub fn build_get_user(&self, id: &str) -> HttpRequest {
        get(format!("{}/posts/proxy/users/{id}", self.base_url))
    }

    /// # Errors
    ///
    /// `Validation` when `name` or `email` is empty; `Serialization` when
    /// the payload cannot be encoded.
    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        post(format!("{}/posts/proxy/users", self.base_url), input)
    }

    /// Posts come back in server order and are never re-sorted client-side.
    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<BlogPost>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn post<T: Serialize>(url: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body =
        serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url,
        headers: Vec::new(),
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
