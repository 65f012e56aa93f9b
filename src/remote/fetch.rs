//! Single-shot GET used for the manifest and for inline SVG bodies.

use super::http_client::transport_error;
use super::*;

impl Fetch for RemoteClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        tracing::debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|err| transport_error(url, err))?;
        let resp = self.ensure_ok(url, resp)?;
        let bytes = resp.bytes().map_err(|err| transport_error(url, err))?;
        tracing::debug!(url, bytes = bytes.len(), "fetched");
        Ok(bytes.to_vec())
    }
}
