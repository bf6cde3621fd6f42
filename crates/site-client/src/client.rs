use reqwest::StatusCode;
use site_core::api::{SITE_CONTENT_PATH, build_url};
use site_core::{ContentPatch, SiteContent};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::notice::Notice;
use crate::{ClientError, Result};

/// Cached access to the site content endpoints.
///
/// Reads are served from the cache until an update succeeds; a failed update
/// leaves the cache as it was.
pub struct SiteContentClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    cache: RwLock<Option<SiteContent>>,
    // One update in flight at a time
    submitting: Mutex<()>,
}

impl SiteContentClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            cache: RwLock::new(None),
            submitting: Mutex::new(()),
        }
    }

    fn content_url(&self) -> String {
        format!("{}{}", self.base_url, build_url(SITE_CONTENT_PATH, &[]))
    }

    /// Cached content, fetching it first if the cache is empty
    pub async fn content(&self) -> Result<SiteContent> {
        if let Some(content) = self.cache.read().await.clone() {
            return Ok(content);
        }
        self.refresh().await
    }

    /// Fetch the content and replace the cached copy
    pub async fn refresh(&self) -> Result<SiteContent> {
        let response = self.http.get(self.content_url()).send().await?;
        if !response.status().is_success() {
            warn!("Fetching site content returned {}", response.status());
            return Err(ClientError::FetchFailed);
        }

        let content: SiteContent = response.json().await?;
        *self.cache.write().await = Some(content.clone());
        Ok(content)
    }

    pub async fn cached(&self) -> Option<SiteContent> {
        self.cache.read().await.clone()
    }

    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    /// Send a partial update. On success the cache is invalidated so the
    /// next read refetches.
    pub async fn update(&self, patch: &ContentPatch) -> Result<SiteContent> {
        let _guard = self.submitting.lock().await;

        let mut request = self.http.patch(self.content_url()).json(patch);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED => return Err(ClientError::Unauthorized),
            status => {
                warn!("Updating site content returned {}", status);
                return Err(ClientError::UpdateFailed);
            }
        }

        let content: SiteContent = response.json().await?;
        self.invalidate().await;
        debug!(fields = ?patch.field_names(), "Site content update accepted");
        Ok(content)
    }

    /// Submit an edit and describe the outcome for the user
    pub async fn submit(&self, patch: &ContentPatch) -> Notice {
        match self.update(patch).await {
            Ok(_) => Notice::saved(),
            Err(e) => Notice::failed(e.to_string()),
        }
    }
}
