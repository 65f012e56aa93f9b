use super::*;

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn serve_file(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(rel) = relative_path(uri.path()) else {
        tracing::warn!(path = uri.path(), "rejected request path");
        return bad_request("invalid path");
    };
    let path = state.data_dir.join(&rel);

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            tracing::info!(path = %rel.display(), len = bytes.len(), "served");
            ([(header::CONTENT_TYPE, content_type(&rel))], bytes).into_response()
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %rel.display(), "not found");
            not_found()
        }
        Err(err) if err.kind() == std::io::ErrorKind::IsADirectory => not_found(),
        Err(err) => {
            tracing::warn!(path = %rel.display(), error = %err, "read failed");
            internal_error(err)
        }
    }
}

/// Maps a request path onto the data dir. Only plain path segments are
/// accepted, so requests cannot escape the served directory.
fn relative_path(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let rel = Path::new(trimmed);
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(rel.to_path_buf())
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
