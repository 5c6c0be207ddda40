//! File upload and retrieval endpoints.

use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::services::UploadStore;

/// Accept a multipart upload and store it under a fresh file id.
///
/// The original extension is kept so downloads come back with a usable
/// content type.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Uploads",
    responses(
        (status = 200, description = "File stored; returns file_id, filename and path"),
        (status = 400, description = "No file field in the multipart body")
    )
)]
pub async fn upload_file(
    store: web::Data<UploadStore>,
    _auth: AuthUser,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| AppError::InvalidInput(format!("Malformed multipart: {}", e)))?;

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|f| f.to_string());

        let Some(filename) = filename else {
            continue;
        };

        let mut body = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;
            body.extend_from_slice(&chunk);
        }

        let file_id = Uuid::new_v4();
        let path = store.store(file_id, &filename, &body)?;

        info!(file_id = %file_id, filename = %filename, size = body.len(), "File uploaded");

        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "file_id": file_id,
            "filename": filename,
            "path": path.to_string_lossy(),
        })));
    }

    Err(AppError::InvalidInput("No file provided".to_string()))
}

/// Serve a stored file by id, whatever extension it was saved with.
#[utoipa::path(
    get,
    path = "/api/uploads/{file_id}",
    tag = "Uploads",
    params(("file_id" = Uuid, Path, description = "File UUID")),
    responses(
        (status = 200, description = "File contents"),
        (status = 404, description = "File not found")
    )
)]
pub async fn get_file(
    store: web::Data<UploadStore>,
    _auth: AuthUser,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let file_path = store
        .find(path.into_inner())
        .ok_or_else(|| AppError::NotFound("File".to_string()))?;

    let file = NamedFile::open(file_path)
        .map_err(|e| AppError::Database(format!("Failed to open upload: {}", e)))?;

    Ok(file.into_response(&req))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/upload").route(web::post().to(upload_file)))
        .service(web::resource("/uploads/{file_id}").route(web::get().to(get_file)));
}
