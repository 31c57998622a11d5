//! File record and content handlers.

use std::collections::HashMap;

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use filebox_core::error::AppError;
use filebox_core::types::PageQuery;
use filebox_entity::file::ParentRef;

use crate::dto::request::UploadRequest;
use crate::dto::response::FileResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// POST /files
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UploadRequest>,
) -> Result<(StatusCode, Json<FileResponse>), ApiError> {
    let record = state
        .file_service
        .create_record(&auth, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /files?parentId=...&page=N
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let parent = ParentRef::from_query(params.get("parentId").map(String::as_str));
    // A page value that is not a number falls back to the first page.
    let page = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    let records = state
        .file_service
        .list_records(&auth, parent, PageQuery::new(page))
        .await?;
    Ok(Json(records.into_iter().map(FileResponse::from).collect()))
}

/// GET /files/{id}
pub async fn show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let record = state.file_service.get_record(&auth, &id).await?;
    Ok(Json(record.into()))
}

/// PUT /files/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let record = state.file_service.set_public(&auth, &id, true).await?;
    Ok(Json(record.into()))
}

/// PUT /files/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let record = state.file_service.set_public(&auth, &id, false).await?;
    Ok(Json(record.into()))
}

/// GET /files/{id}/data
pub async fn data(
    State(state): State<AppState>,
    MaybeAuthUser(caller): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let content = state
        .content_service
        .fetch_content(caller.as_ref(), &id)
        .await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content.content_type)
        .header(header::CONTENT_LENGTH, content.data.len())
        .body(Body::from(content.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
