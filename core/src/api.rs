//! Screen-facing data loaders.
//!
//! # Design
//! `BlogApi` wires the stateless [`BlogClient`] to the [`HttpClient`]
//! transport and owns the shared [`RefreshSignal`]. Each method is one
//! screen's fetch routine: a single request, parsed into the entity or an
//! [`ApiError`] the screen renders inline. Creation operations bump the
//! refresh signal exactly once on success so mounted list screens reload.
//!
//! There is no concurrency control here beyond what
//! [`Loader`](crate::loader::Loader) enforces at the screen: overlapping
//! invocations stay possible and nothing cancels an in-flight request.

use std::sync::Arc;

use crate::client::BlogClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::middleware::RequestHook;
use crate::refresh::RefreshSignal;
use crate::types::{BlogPost, CreateBlogPost, CreateUser, User};

/// Entry point for screens: fetch routines plus the shared refresh signal.
pub struct BlogApi {
    client: BlogClient,
    http: HttpClient,
    refresh: RefreshSignal,
}

impl BlogApi {
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: BlogClient::new(&config.base_url),
            http: HttpClient::new(config)?,
            refresh: RefreshSignal::new(),
        })
    }

    /// Install an additional transport hook stage.
    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.http = self.http.with_hook(hook);
        self
    }

    /// The shared invalidation signal; clone it into screens that need to
    /// read, bump, or watch it.
    pub fn refresh(&self) -> &RefreshSignal {
        &self.refresh
    }

    /// `GET /posts` — posts in server order.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let response = self.http.execute(self.client.build_list_posts()).await?;
        self.client.parse_list_posts(response)
    }

    /// `GET /posts/{id}`.
    pub async fn get_post(&self, id: &str) -> Result<BlogPost, ApiError> {
        let response = self.http.execute(self.client.build_get_post(id)).await?;
        self.client.parse_get_post(response)
    }

    /// `POST /posts`, then bump the refresh signal.
    pub async fn create_post(&self, input: &CreateBlogPost) -> Result<BlogPost, ApiError> {
        let request = self.client.build_create_post(input)?;
        let response = self.http.execute(request).await?;
        let post = self.client.parse_create_post(response)?;
        self.refresh.bump();
        Ok(post)
    }

    /// `GET /posts/proxy/users`.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.execute(self.client.build_list_users()).await?;
        self.client.parse_list_users(response)
    }

    /// `GET /posts/proxy/users/{id}`.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let response = self.http.execute(self.client.build_get_user(id)).await?;
        self.client.parse_get_user(response)
    }

    /// `POST /posts/proxy/users`, then bump the refresh signal.
    pub async fn create_user(&self, input: &CreateUser) -> Result<User, ApiError> {
        let request = self.client.build_create_user(input)?;
        let response = self.http.execute(request).await?;
        let user = self.client.parse_create_user(response)?;
        self.refresh.bump();
        Ok(user)
    }
}
