//! Integration tests for record creation.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_upload_requires_token() {
    let app = TestApp::new();

    let body = json!({ "name": "a.txt", "type": "file", "data": "aGk=" });
    let response = app.request("POST", "/files", Some(body.clone()), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");

    // A token the session store does not know is just as unauthorized.
    let response = app
        .request("POST", "/files", Some(body), Some("bogus-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_upload_validation_messages() {
    let app = TestApp::new();
    app.seed_user("tok");

    let cases = [
        (json!({}), "Missing name"),
        (json!({ "name": "a.txt" }), "Missing type"),
        (json!({ "name": "a.txt", "type": "archive" }), "Missing type"),
        (json!({ "name": "a.txt", "type": "file" }), "Missing data"),
    ];

    for (body, expected) in cases {
        let response = app.request("POST", "/files", Some(body), Some("tok")).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], expected);
    }
}

#[tokio::test]
async fn test_upload_parent_validation() {
    let app = TestApp::new();
    app.seed_user("tok");

    let body = json!({
        "name": "a.txt",
        "type": "file",
        "data": "aGk=",
        "parentId": uuid::Uuid::new_v4().to_string(),
    });
    let response = app.request("POST", "/files", Some(body), Some("tok")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Parent not found");

    let leaf = app.upload_file("tok", "leaf.txt", "hi").await;
    let body = json!({
        "name": "b.txt",
        "type": "file",
        "data": "aGk=",
        "parentId": leaf["id"],
    });
    let response = app.request("POST", "/files", Some(body), Some("tok")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Parent is not a folder");
}

#[tokio::test]
async fn test_create_folder() {
    let app = TestApp::new();
    let user_id = app.seed_user("tok");

    let body = json!({ "name": "documents", "type": "folder" });
    let response = app.request("POST", "/files", Some(body), Some("tok")).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "documents");
    assert_eq!(response.body["type"], "folder");
    assert_eq!(response.body["isPublic"], false);
    assert_eq!(response.body["parentId"], 0);
    assert_eq!(response.body["userId"], user_id.to_string());
    assert!(response.body.get("localPath").is_none());

    // Folders never touch the blob store.
    assert!(app.blobs.is_empty());
}

#[tokio::test]
async fn test_upload_file_stores_blob() {
    let app = TestApp::new();
    app.seed_user("tok");

    let body = app.upload_file("tok", "hello.txt", "Hello Filebox").await;

    assert_eq!(body["type"], "file");
    assert!(body.get("localPath").is_none());
    assert_eq!(app.blobs.len(), 1);
    assert_eq!(app.files.len(), 1);
}

#[tokio::test]
async fn test_upload_into_folder() {
    let app = TestApp::new();
    app.seed_user("tok");

    let folder_id = app.create_folder("tok", "docs", None).await;

    let body = json!({
        "name": "inside.txt",
        "type": "file",
        "data": "aGk=",
        "parentId": folder_id,
    });
    let response = app.request("POST", "/files", Some(body), Some("tok")).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["parentId"], folder_id);
}

#[tokio::test]
async fn test_upload_accepts_is_public_flag() {
    let app = TestApp::new();
    app.seed_user("tok");

    let body = json!({
        "name": "open.txt",
        "type": "file",
        "data": "aGk=",
        "isPublic": true,
    });
    let response = app.request("POST", "/files", Some(body), Some("tok")).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["isPublic"], true);
}
