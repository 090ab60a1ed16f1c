//! Domain DTOs for the blog API.
//!
//! # Design
//! These types mirror the remote API's wire format but are defined
//! independently of the mock-server crate; integration tests catch schema
//! drift between the two. Field names follow the server's JSON (`_id`,
//! `createdAt`) via serde renames so the Rust side stays snake_case.
//!
//! Record ids are opaque server-assigned strings. The client never mints or
//! interprets them, so they stay `String` rather than a parsed id type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A published blog post as returned by the API.
///
/// `author` is sent on creation but omitted from some list/detail responses,
/// so it deserializes leniently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request payload for publishing a new post. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreateBlogPost {
    /// Reject the payload before any request is built. Empty required fields
    /// never reach the network.
    pub fn validate(&self) -> Result<(), ApiError> {
        let fields = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(ApiError::Validation(format!("{name} is required")));
            }
        }
        Ok(())
    }
}

/// A user profile as returned by the API. `bio` may be absent or empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request payload for registering a new user. `name` and `email` are
/// required; `bio` is omitted from the body when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl CreateUser {
    /// Reject the payload before any request is built.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::Validation("name is required".to_string()));
        }
        if self.email.is_empty() {
            return Err(ApiError::Validation("email is required".to_string()));
        }
        Ok(())
    }
}
