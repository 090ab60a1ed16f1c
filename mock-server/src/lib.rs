use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock, time::sleep};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Records in insertion order, so list responses have a stable
/// server-defined order.
#[derive(Default)]
pub struct Store {
    posts: Vec<Post>,
    users: Vec<User>,
}

#[derive(Clone)]
struct AppState {
    store: Arc<RwLock<Store>>,
    delay: Duration,
}

pub fn app() -> Router {
    app_with_delay(Duration::ZERO)
}

/// Build the router with an artificial per-request latency, for exercising
/// client timeouts without waiting out the real deadline.
pub fn app_with_delay(delay: Duration) -> Router {
    let state = AppState {
        store: Arc::new(RwLock::new(Store::default())),
        delay,
    };
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/posts/proxy/users", get(list_users).post(create_user))
        .route("/posts/proxy/users/{id}", get(get_user))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_delay(
    listener: TcpListener,
    delay: Duration,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_delay(delay)).await
}

async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    sleep(state.delay).await;
    let store = state.store.read().await;
    Json(store.posts.clone())
}

async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> Result<(StatusCode, Json<Post>), (StatusCode, String)> {
    sleep(state.delay).await;
    if input.title.is_empty() || input.content.is_empty() || input.author.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "title, content and author are required".to_string(),
        ));
    }
    let post = Post {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        content: input.content,
        author: input.author,
        created_at: Utc::now(),
    };
    state.store.write().await.posts.push(post.clone());
    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, StatusCode> {
    sleep(state.delay).await;
    let store = state.store.read().await;
    store
        .posts
        .iter()
        .find(|post| post.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    sleep(state.delay).await;
    let store = state.store.read().await;
    Json(store.users.clone())
}

async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), (StatusCode, String)> {
    sleep(state.delay).await;
    if input.name.is_empty() || input.email.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "name and email are required".to_string(),
        ));
    }
    let user = User {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        email: input.email,
        bio: input.bio,
        created_at: Utc::now(),
    };
    state.store.write().await.users.push(user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, StatusCode> {
    sleep(state.delay).await;
    let store = state.store.read().await;
    store
        .users
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_with_wire_field_names() {
        let post = Post {
            id: "65a1b2c3".to_string(),
            title: "Test".to_string(),
            content: "Body".to_string(),
            author: "Ada".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["_id"], "65a1b2c3");
        assert_eq!(json["title"], "Test");
        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn post_roundtrips_through_json() {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            title: "Roundtrip".to_string(),
            content: "Body".to_string(),
            author: "Ada".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.title, post.title);
        assert_eq!(back.created_at, post.created_at);
    }

    #[test]
    fn user_without_bio_omits_the_field() {
        let user = User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            bio: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("bio").is_none());
    }

    #[test]
    fn create_post_rejects_missing_fields_at_decode() {
        let result: Result<CreatePost, _> = serde_json::from_str(r#"{"title":"Only"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_user_bio_is_optional_at_decode() {
        let input: CreateUser =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert!(input.bio.is_none());
    }
}
