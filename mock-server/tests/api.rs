use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Post, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- posts ---

#[tokio::test]
async fn list_posts_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn create_post_returns_201_with_assigned_fields() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/posts",
            r#"{"title":"Hello","content":"World","author":"Ada"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.title, "Hello");
    assert_eq!(post.author, "Ada");
    assert!(!post.id.is_empty());
}

#[tokio::test]
async fn create_post_empty_field_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/posts",
            r#"{"title":"Hello","content":"World","author":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("required"));
}

#[tokio::test]
async fn create_post_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/posts", r#"{"title":"No body"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_post_not_found() {
    let app = app();
    let resp = app.oneshot(get_request("/posts/does-not-exist")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn posts_list_in_insertion_order() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["First", "Second", "Third"] {
        let body = format!(r#"{{"title":"{title}","content":"Body","author":"Ada"}}"#);
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/posts", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/posts"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn created_post_is_fetchable_by_id() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/posts",
            r#"{"title":"Hello","content":"World","author":"Ada"}"#,
        ))
        .await
        .unwrap();
    let created: Post = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/posts/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Post = body_json(resp).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Hello");
}

// --- users ---

#[tokio::test]
async fn list_users_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/posts/proxy/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn create_user_returns_201_without_bio() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/posts/proxy/users",
            r#"{"name":"Ada","email":"ada@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.name, "Ada");
    assert!(user.bio.is_none());
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn create_user_empty_email_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/posts/proxy/users",
            r#"{"name":"Ada","email":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(get_request("/posts/proxy/users/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_user_is_fetchable_with_bio() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/posts/proxy/users",
            r#"{"name":"Ada","email":"ada@example.com","bio":"Mathematician"}"#,
        ))
        .await
        .unwrap();
    let created: User = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/posts/proxy/users/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: User = body_json(resp).await;
    assert_eq!(fetched.bio.as_deref(), Some("Mathematician"));
}
