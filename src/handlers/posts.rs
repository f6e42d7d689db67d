use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use serde_json::Value;
use tracing::debug;

use crate::{models::body::RequestBody, models::posts::PostId, AppState, Result};

// A body that is not declared as JSON has no fields; broken JSON is still rejected.
fn request_body(body: core::result::Result<Json<Value>, JsonRejection>) -> Result<RequestBody> {
    match body {
        Ok(Json(body)) => Ok(RequestBody::from(body)),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(RequestBody::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(get_posts).post(create_post))
        .route("/{id}", put(update_post).delete(delete_post))
}

async fn get_posts(Extension(app_state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let posts = app_state.posts_service.get_posts().await;
    (StatusCode::OK, Json(posts))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    body: core::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let new_post = request_body(body)?.into_new_post()?;

    let post = app_state.posts_service.create_post(new_post).await;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
    body: core::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let post = request_body(body)?.into_post(&post_id)?;

    let updated_post = app_state.posts_service.update_post(post).await?;
    Ok((StatusCode::OK, Json(updated_post)))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> impl IntoResponse {
    match post_id.parse::<PostId>() {
        Ok(post_id) => app_state.posts_service.delete_post(post_id).await,
        Err(_) => debug!("Ignoring delete of unknown post id {post_id}"),
    }

    StatusCode::NO_CONTENT
}
