//! File upload to object storage. Independent of the token protocol.

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use idp_infra::storage::ObjectStorage;

use crate::dto::ErrorResponse;

/// Application state holding the object storage client.
pub struct FilesState<B>
where
    B: ObjectStorage,
{
    pub storage: Arc<B>,
}

/// `POST /files/{name}` stores the raw request body under a fresh key.
///
/// Responds `201` with the generated key, `500` when the bucket is
/// unreachable.
pub async fn upload_file<B>(
    state: web::Data<FilesState<B>>,
    path: web::Path<String>,
    request: HttpRequest,
    body: web::Bytes,
) -> HttpResponse
where
    B: ObjectStorage + 'static,
{
    let name = path.into_inner();
    // Prefix with a UUID so concurrent uploads of the same filename never
    // overwrite each other.
    let key = format!("{}/{}", Uuid::new_v4(), name);

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    match state.storage.put(&key, body.to_vec(), &content_type).await {
        Ok(()) => HttpResponse::Created().json(serde_json::json!({ "key": key })),
        Err(error) => {
            log::error!("file upload failed: {error}");
            ErrorResponse::new("internal_error", "an internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
