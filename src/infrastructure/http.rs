use gloo::net::http::Request;

use crate::domain::errors::{PlotError, PlotResult};
use crate::domain::logging::LogComponent;
use crate::domain::plot::PlotData;
use crate::{log_debug, log_warn};

/// Fetches `{mutations, sites}` payloads referenced by location.
#[derive(Debug, Clone, Default)]
pub struct PlotDataClient {
    base_url: Option<String>,
}

impl PlotDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative locations are resolved against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()) }
    }

    pub fn resolve(&self, location: &str) -> String {
        match &self.base_url {
            Some(base) if !location.contains("://") => {
                format!("{}/{}", base.trim_end_matches('/'), location.trim_start_matches('/'))
            }
            _ => location.to_string(),
        }
    }

    pub async fn fetch(&self, location: &str) -> PlotResult<PlotData> {
        let url = self.resolve(location);
        log_debug!(LogComponent::Infrastructure("PlotDataClient"), "GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| PlotError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            log_warn!(
                LogComponent::Infrastructure("PlotDataClient"),
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            );
            return Err(PlotError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PlotError::Network(format!("Failed to read body: {}", e)))?;
        PlotData::from_json(&text)
    }
}
