use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        url: &str,
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, CatalogError> {
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "non-success response");
            return Err(CatalogError::fetch(url, Some(status.as_u16())));
        }
        Ok(resp)
    }
}

pub(super) fn transport_error(url: &str, err: reqwest::Error) -> CatalogError {
    tracing::warn!(url, error = %err, "request failed");
    CatalogError::fetch(url, err.status().map(|s| s.as_u16()))
}
