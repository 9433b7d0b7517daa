use crate::error::{ApiError, ApiResult};

/// Resolves a `data-url` attribute (usually site-relative) against the page URL.
pub(crate) fn resolve_url(base: &str, data_url: &str) -> ApiResult<reqwest::Url> {
    let base = reqwest::Url::parse(base).map_err(ApiError::url)?;
    base.join(data_url).map_err(ApiError::url)
}

/// Calls the server's mark-as-read endpoints.
#[derive(Clone)]
pub(crate) struct NotificationClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotificationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_location() -> Self {
        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        Self::new(href)
    }

    /// GETs the endpoint. Any 2xx with a JSON body is success; the body itself is not inspected.
    pub async fn mark_read(&self, data_url: &str) -> ApiResult<serde_json::Value> {
        let url = resolve_url(&self.base_url, data_url)?;
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Mark notification read failed"))
        }
    }
}
