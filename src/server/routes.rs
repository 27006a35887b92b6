use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use axum::{
    Json,
    extract::{
        State,
        multipart::{Multipart, MultipartRejection},
    },
    http::{Method, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use super::{
    AppState,
    batch::{Upload, detect_uploads},
    error::{MessageBody, ServerError, ServerResult},
};

/// Multipart field carrying the uploaded files.
pub const UPLOAD_FIELD: &str = "files";

const INDEX_FILE: &str = "index.html";

pub async fn index(State(state): State<Arc<AppState>>) -> ServerResult<Response> {
    serve_file(&state.static_dir.join(INDEX_FILE)).await
}

pub async fn detect(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<MessageBody>> {
    let mut multipart = multipart.map_err(|e| ServerError::Multipart(e.to_string()))?;

    let mut uploads = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::Multipart(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let contents = field
            .bytes()
            .await
            .map_err(|e| ServerError::Multipart(e.to_string()))?;
        uploads.push(Upload::new(file_name, contents.to_vec()));
    }

    if uploads.is_empty() {
        return Err(ServerError::NoFiles);
    }

    info!(files = uploads.len(), "detect request");
    let message = detect_uploads(uploads, state.dialect, state.detect_timeout).await?;
    Ok(Json(MessageBody::new(message)))
}

pub async fn static_asset(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> ServerResult<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ServerError::NotFound);
    }
    let path = resolve_asset_path(&state.static_dir, uri.path()).ok_or(ServerError::NotFound)?;
    serve_file(&path).await
}

async fn serve_file(path: &Path) -> ServerResult<Response> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ServerError::NotFound),
        Err(e) => return Err(ServerError::Asset(e)),
    };
    Ok(([(header::CONTENT_TYPE, content_type(path))], bytes).into_response())
}

/// Map a request path onto a file under `root`.
///
/// Only plain path segments are accepted, so a request can never escape the
/// static directory.
fn resolve_asset_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative.as_os_str().is_empty() {
        return None;
    }
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_asset_path() {
        let root = Path::new("public");
        assert_eq!(
            resolve_asset_path(root, "/script.js"),
            Some(PathBuf::from("public/script.js"))
        );
        assert_eq!(
            resolve_asset_path(root, "/css/site.css"),
            Some(PathBuf::from("public/css/site.css"))
        );
        assert_eq!(resolve_asset_path(root, "/"), None);
        assert_eq!(resolve_asset_path(root, "/../Cargo.toml"), None);
        assert_eq!(resolve_asset_path(root, "/css/../../secret"), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("script.js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_serve_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = serve_file(&dir.path().join("absent.html"))
            .await
            .err()
            .expect("missing asset must fail");
        assert!(matches!(err, ServerError::NotFound));
    }

    #[tokio::test]
    async fn test_serve_file_sets_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<html></html>").unwrap();

        let response = serve_file(&path).await.unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
