//! Integration tests for content retrieval.

use http::StatusCode;

use filebox_database::FileStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_owner_reads_private_content() {
    let app = TestApp::new();
    app.seed_user("tok");

    let uploaded = app.upload_file("tok", "hello.txt", "hi").await;
    let id = uploaded["id"].as_str().unwrap();

    let response = app
        .request_raw("GET", &format!("/files/{id}/data"), None, Some("tok"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"hi");
    assert!(
        response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/plain"))
    );
}

#[tokio::test]
async fn test_private_content_is_hidden() {
    let app = TestApp::new();
    app.seed_user("owner");
    app.seed_user("stranger");

    let uploaded = app.upload_file("owner", "secret.txt", "classified").await;
    let id = uploaded["id"].as_str().unwrap();

    // Anonymous.
    let response = app
        .request("GET", &format!("/files/{id}/data"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not found");

    // Authenticated non-owner gets the very same answer.
    let response = app
        .request("GET", &format!("/files/{id}/data"), None, Some("stranger"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not found");
}

#[tokio::test]
async fn test_published_content_readable_by_anyone() {
    let app = TestApp::new();
    app.seed_user("owner");
    app.seed_user("stranger");

    let uploaded = app.upload_file("owner", "post.html", "<p>hi</p>").await;
    let id = uploaded["id"].as_str().unwrap();

    app.request("PUT", &format!("/files/{id}/publish"), None, Some("owner"))
        .await;

    let response = app
        .request_raw("GET", &format!("/files/{id}/data"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"<p>hi</p>");
    assert!(
        response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/html"))
    );

    let response = app
        .request_raw("GET", &format!("/files/{id}/data"), None, Some("stranger"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Unpublishing closes the door again.
    app.request("PUT", &format!("/files/{id}/unpublish"), None, Some("owner"))
        .await;
    let response = app
        .request("GET", &format!("/files/{id}/data"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_folder_has_no_content() {
    let app = TestApp::new();
    app.seed_user("tok");

    let folder_id = app.create_folder("tok", "docs", None).await;

    let response = app
        .request("GET", &format!("/files/{folder_id}/data"), None, Some("tok"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "A folder doesn't have content");
}

#[tokio::test]
async fn test_folder_refusal_applies_to_any_caller() {
    let app = TestApp::new();
    app.seed_user("owner");
    app.seed_user("stranger");

    let folder_id = app.create_folder("owner", "private-docs", None).await;

    // The folder refusal wins over existence hiding: even callers who
    // cannot read the private folder get the 400, not a 404.
    let response = app
        .request("GET", &format!("/files/{folder_id}/data"), None, Some("stranger"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "A folder doesn't have content");

    let response = app
        .request("GET", &format!("/files/{folder_id}/data"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "A folder doesn't have content");
}

#[tokio::test]
async fn test_dangling_blob_is_not_found() {
    let app = TestApp::new();
    app.seed_user("tok");

    let uploaded = app.upload_file("tok", "a.txt", "hi").await;
    let id = uploaded["id"].as_str().unwrap();

    // Drop the bytes out from under the record.
    let record = app
        .files
        .find_by_id(id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    app.blobs.remove(record.local_path.as_deref().unwrap());

    let response = app
        .request("GET", &format!("/files/{id}/data"), None, Some("tok"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not found");
}

#[tokio::test]
async fn test_unknown_content_ids() {
    let app = TestApp::new();
    app.seed_user("tok");

    let unknown = uuid::Uuid::new_v4();
    let response = app
        .request("GET", &format!("/files/{unknown}/data"), None, Some("tok"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/files/not-a-uuid/data", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
