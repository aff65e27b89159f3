mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use base64::{engine::general_purpose, Engine as _};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn data_url(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", general_purpose::STANDARD.encode(bytes))
}

async fn send(app: &TestApp, request: Request<Body>) -> axum::response::Response {
    app.router.clone().oneshot(request).await.unwrap()
}

async fn upload(app: &TestApp, token: &str, name: &str, category: &str, bytes: &[u8]) -> axum::response::Response {
    let payload = json!({
        "fileName": name,
        "fileData": data_url(bytes),
        "category": category,
    });

    send(app, Request::builder()
        .method("POST")
        .uri("/api/admin/upload-image")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(payload.to_string()))
        .unwrap()
    ).await
}

#[tokio::test]
async fn test_upload_then_list_publicly() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let res = upload(&app, &token, "house.jpg", "real-estate", b"jpeg bytes").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["path"], "real-estate/house.jpg");
    assert_eq!(body["url"], "https://cdn.test/images/real-estate/house.jpg");

    // the decoded bytes landed in the store
    assert_eq!(
        app.store.objects.lock().unwrap().get("real-estate/house.jpg").unwrap(),
        b"jpeg bytes"
    );

    // portfolio feed needs no auth
    let res = send(&app, Request::builder()
        .method("GET")
        .uri("/api/images/real-estate")
        .body(Body::empty())
        .unwrap()
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let images = body["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["name"], "house.jpg");
    assert_eq!(images[0]["category"], "real-estate");
    assert_eq!(images[0]["size"], 10);
}

#[tokio::test]
async fn test_upload_overwrites_existing_path() {
    let app = TestApp::new().await;
    let token = app.login().await;

    upload(&app, &token, "house.jpg", "real-estate", b"v1").await;
    let res = upload(&app, &token, "house.jpg", "real-estate", b"v2").await;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(
        app.store.objects.lock().unwrap().get("real-estate/house.jpg").unwrap(),
        b"v2"
    );
}

#[tokio::test]
async fn test_upload_requires_auth_and_valid_shape() {
    let app = TestApp::new().await;

    let payload = json!({ "fileName": "a.jpg", "fileData": data_url(b"x"), "category": "portraits" });
    let res = send(&app, Request::builder()
        .method("POST")
        .uri("/api/admin/upload-image")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
    ).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let token = app.login().await;

    let res = upload(&app, &token, "a.jpg", "weddings", b"x").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("unknown category"));

    let res = upload(&app, &token, "../escape.jpg", "portraits", b"x").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_photo_list_spans_all_categories() {
    let app = TestApp::new().await;
    let token = app.login().await;

    upload(&app, &token, "a.jpg", "portraits", b"a").await;
    upload(&app, &token, "b.jpg", "performance", b"b").await;

    let res = send(&app, Request::builder()
        .method("GET")
        .uri("/api/admin/photos")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["photos"].as_array().unwrap().len(), 2);

    let res = send(&app, Request::builder()
        .method("GET")
        .uri("/api/admin/photos?category=portraits")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
    ).await;
    let body = parse_body(res).await;
    let photos = body["photos"].as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["name"], "a.jpg");
}

#[tokio::test]
async fn test_placeholder_objects_stay_hidden() {
    let app = TestApp::new().await;
    let token = app.login().await;

    app.store.objects.lock().unwrap().insert(
        "portraits/.emptyFolderPlaceholder".to_string(),
        Vec::new(),
    );

    let res = send(&app, Request::builder()
        .method("GET")
        .uri("/api/admin/photos?category=portraits")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
    ).await;
    let body = parse_body(res).await;
    assert!(body["photos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_move_photo_to_a_new_category() {
    let app = TestApp::new().await;
    let token = app.login().await;

    upload(&app, &token, "dusk.jpg", "portraits", b"photo").await;

    let payload = json!({ "oldPath": "portraits/dusk.jpg", "newCategory": "events-misc" });
    let res = send(&app, Request::builder()
        .method("POST")
        .uri("/api/admin/photos/move")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(payload.to_string()))
        .unwrap()
    ).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["newPath"], "events-misc/dusk.jpg");
    assert_eq!(body["url"], "https://cdn.test/images/events-misc/dusk.jpg");

    let objects = app.store.objects.lock().unwrap();
    assert!(objects.contains_key("events-misc/dusk.jpg"));
    assert!(!objects.contains_key("portraits/dusk.jpg"));
}

#[tokio::test]
async fn test_move_of_a_missing_photo_is_not_found() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let payload = json!({ "oldPath": "portraits/ghost.jpg", "newCategory": "promotional" });
    let res = send(&app, Request::builder()
        .method("POST")
        .uri("/api/admin/photos/move")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(payload.to_string()))
        .unwrap()
    ).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_photo_then_missing() {
    let app = TestApp::new().await;
    let token = app.login().await;

    upload(&app, &token, "old.jpg", "promotional", b"x").await;

    let payload = json!({ "path": "promotional/old.jpg" });
    let delete_request = |payload: Value| {
        Request::builder()
            .method("DELETE")
            .uri("/api/admin/photos")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(payload.to_string()))
            .unwrap()
    };

    let res = send(&app, delete_request(payload.clone())).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["success"], true);
    assert!(app.store.objects.lock().unwrap().is_empty());

    let res = send(&app, delete_request(payload)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("object not found"));
}
