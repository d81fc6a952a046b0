// Published Google Sheets repository implementation
use crate::application::sheet_repository::{SheetRepository, SheetResource};
use crate::infrastructure::config::SheetsSettings;
use crate::infrastructure::csv_rows::looks_like_markup;
use async_trait::async_trait;
use std::time::Duration;

const SPREADSHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no published URL configured")]
    NotConfigured,
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("response is an HTML page, not CSV")]
    Markup,
}

#[derive(Debug, Clone)]
pub struct PublishedSheetRepository {
    client: reqwest::Client,
    settings: SheetsSettings,
}

impl PublishedSheetRepository {
    pub fn new(settings: SheetsSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    /// CSV endpoints to try when the published URL fails, in order.
    fn fallback_urls(&self, resource: SheetResource) -> Vec<String> {
        let Some(sheet_id) = self.settings.sheet_id.as_deref().filter(|id| !id.is_empty()) else {
            return Vec::new();
        };
        let sheet = urlencoding::encode(resource.sheet_name());
        vec![
            format!("{}/{}/gviz/tq?tqx=out:csv&sheet={}", SPREADSHEETS_BASE, sheet_id, sheet),
            format!("{}/{}/export?format=csv&sheet={}", SPREADSHEETS_BASE, sheet_id, sheet),
        ]
    }

    async fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        let timeout = self.settings.timeout();
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await.map_err(|e| classify(e, timeout))?;
        if looks_like_markup(&text) {
            return Err(FetchError::Markup);
        }
        Ok(text)
    }

    async fn fetch_published(&self, resource: SheetResource) -> Result<String, FetchError> {
        let url = self
            .settings
            .published_url(resource)
            .ok_or(FetchError::NotConfigured)?;
        self.fetch_csv(url).await
    }
}

fn classify(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Transport(error)
    }
}

#[async_trait]
impl SheetRepository for PublishedSheetRepository {
    async fn fetch_resource(&self, resource: SheetResource) -> String {
        match self.fetch_published(resource).await {
            Ok(text) => return text,
            Err(e) => tracing::warn!("Published sheet {} unavailable: {}", resource, e),
        }

        for url in self.fallback_urls(resource) {
            match self.fetch_csv(&url).await {
                Ok(text) => {
                    tracing::debug!("Fetched sheet {} from fallback {}", resource, url);
                    return text;
                }
                Err(e) => tracing::warn!("Fallback for sheet {} failed: {}", resource, e),
            }
        }

        String::new()
    }
}
