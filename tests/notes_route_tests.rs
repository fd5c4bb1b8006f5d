use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::LOCATION},
};
use serde_json::{Value, json};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn setup(tag: &str) -> (Router, noteful::Store, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "noteful-notes-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let store = noteful::Store::connect(&database_url)
        .await
        .expect("failed to open test database");
    let app = noteful::noteful_router(noteful::NotefulState::new(store.clone()));
    (app, store, temp_path)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let req = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("failed to build request");

    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
    (status, location, body)
}

fn json_body(body: &str) -> Value {
    serde_json::from_str(body).expect("response body was not JSON")
}

async fn seed_folders(app: &Router) {
    for name in ["Important", "Super"] {
        let (status, _, _) = send(
            app,
            "POST",
            "/api/folders",
            Some(&json!({ "name": name }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

async fn create_note(app: &Router, payload: Value) -> Value {
    let (status, _, body) = send(app, "POST", "/api/notes", Some(&payload.to_string())).await;
    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    json_body(&body)
}

#[tokio::test]
async fn list_starts_empty() {
    let (app, _store, temp_path) = setup("empty").await;

    let (status, _, body) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn create_reports_missing_fields_in_order() {
    let (app, store, temp_path) = setup("create-invalid").await;
    seed_folders(&app).await;

    let cases = [
        ("{}", "'name' is required"),
        (r#"{"folder_id":"1"}"#, "'name' is required"),
        (r#"{"name":"test-name"}"#, "'folder_id' is required"),
        (
            r#"{"name":"test-name","folder_id":"one"}"#,
            "A valid 'folder_id' is required",
        ),
        (
            r#"{"name":"test-name","folder_id":1.5}"#,
            "A valid 'folder_id' is required",
        ),
    ];
    for (payload, message) in cases {
        let (status, _, body) = send(&app, "POST", "/api/notes", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(json_body(&body), json!({ "error": { "message": message } }));
    }

    assert!(store.list_notes().await.unwrap().is_empty());

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn create_coerces_folder_id_and_round_trips_through_get() {
    let (app, _store, temp_path) = setup("create").await;
    seed_folders(&app).await;

    let (status, location, body) = send(
        &app,
        "POST",
        "/api/notes",
        Some(r#"{"name":"test-name","folder_id":"2","content":"test content"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_body(&body);
    let id = created["id"].as_i64().expect("id should be a number");
    assert_eq!(location.as_deref(), Some(format!("/api/notes/{id}").as_str()));
    assert_eq!(created["name"], "test-name");
    assert_eq!(created["content"], "test content");
    assert_eq!(created["folder_id"], json!(2));
    assert!(created["folder_id"].is_i64());
    assert!(created["modified"].is_string());

    let (status, _, body) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), created);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn create_without_content_renders_empty_content() {
    let (app, _store, temp_path) = setup("no-content").await;
    seed_folders(&app).await;

    let created = create_note(&app, json!({ "name": "Bare", "folder_id": 1 })).await;
    assert_eq!(created["content"], "");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn create_with_unknown_folder_is_a_server_error() {
    let (app, store, temp_path) = setup("dangling-folder").await;

    let (status, _, body) = send(
        &app,
        "POST",
        "/api/notes",
        Some(r#"{"name":"Orphan","folder_id":999}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":{"message":"server error"}}"#);
    assert!(store.list_notes().await.unwrap().is_empty());

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn xss_content_is_sanitized_on_every_read_path() {
    let (app, _store, temp_path) = setup("xss").await;
    seed_folders(&app).await;

    let created = create_note(
        &app,
        json!({
            "name": r#"Naughty naughty very naughty <script>alert("xss");</script>"#,
            "folder_id": 1,
            "content": r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#,
        }),
    )
    .await;
    let expected_name = r#"Naughty naughty very naughty alert("xss");"#;
    assert_eq!(created["name"], expected_name);
    let id = created["id"].as_i64().unwrap();

    let (_, _, body) = send(&app, "GET", "/api/notes", None).await;
    let listed = json_body(&body);
    assert_eq!(listed[0]["name"], expected_name);
    let content = listed[0]["content"].as_str().unwrap();
    assert!(!content.contains("onerror"));
    assert!(content.contains("<strong>all</strong>"));

    let (_, _, body) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    let fetched = json_body(&body);
    assert_eq!(fetched["name"], expected_name);
    assert_eq!(fetched["content"], listed[0]["content"]);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn unknown_note_is_not_found_for_every_id_route() {
    let (app, _store, temp_path) = setup("missing").await;

    for (method, uri, body) in [
        ("GET", "/api/notes/123", None),
        ("DELETE", "/api/notes/123", None),
        ("PATCH", "/api/notes/123", Some(r#"{"name":"x"}"#)),
        ("GET", "/api/notes/not-a-number", None),
    ] {
        let (status, _, resp_body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp_body, r#"{"error":{"message":"Note Not Found"}}"#);
    }

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn patch_rejects_empty_and_invalid_bodies() {
    let (app, _store, temp_path) = setup("patch-invalid").await;
    seed_folders(&app).await;
    let created = create_note(&app, json!({ "name": "n", "folder_id": 1 })).await;
    let uri = format!("/api/notes/{}", created["id"]);

    for payload in ["{}", r#"{"irrelevant":"foo"}"#, r#"{"name":"","content":null}"#] {
        let (status, _, body) = send(&app, "PATCH", &uri, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(
            body,
            r#"{"error":{"message":"Request body must contain either 'name', 'folder_id', or 'content'"}}"#
        );
    }

    let (status, _, body) = send(&app, "PATCH", &uri, Some(r#"{"folder_id":"abc"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        r#"{"error":{"message":"Request body must contain a valid 'folder_id'"}}"#
    );

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn patch_updates_only_supplied_fields() {
    let (app, _store, temp_path) = setup("patch").await;
    seed_folders(&app).await;
    let created = create_note(
        &app,
        json!({ "name": "Original", "folder_id": 1, "content": "first draft" }),
    )
    .await;
    let uri = format!("/api/notes/{}", created["id"]);

    let (status, _, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(r#"{"content":"second draft","folder_id":"2"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, _, body) = send(&app, "GET", &uri, None).await;
    let fetched = json_body(&body);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Original");
    assert_eq!(fetched["content"], "second draft");
    assert_eq!(fetched["folder_id"], json!(2));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn patch_clears_content_supplied_as_empty_string() {
    let (app, _store, temp_path) = setup("patch-clear").await;
    seed_folders(&app).await;
    let created = create_note(
        &app,
        json!({ "name": "Original", "folder_id": 1, "content": "draft" }),
    )
    .await;
    let uri = format!("/api/notes/{}", created["id"]);

    let (status, _, _) = send(
        &app,
        "PATCH",
        &uri,
        Some(r#"{"name":"renamed","content":""}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, _, body) = send(&app, "GET", &uri, None).await;
    let fetched = json_body(&body);
    assert_eq!(fetched["name"], "renamed");
    assert_eq!(fetched["content"], "");
    assert_eq!(fetched["folder_id"], json!(1));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn delete_removes_note_from_list_and_lookup() {
    let (app, _store, temp_path) = setup("delete").await;
    seed_folders(&app).await;
    let first = create_note(&app, json!({ "name": "First", "folder_id": 1 })).await;
    let second = create_note(&app, json!({ "name": "Second", "folder_id": 2 })).await;

    let uri = format!("/api/notes/{}", first["id"]);
    let (status, _, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, _, body) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(json_body(&body), json!([second]));

    let (status, _, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let _ = fs::remove_file(&temp_path);
}
