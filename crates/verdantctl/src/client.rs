//! HTTP client for the verdantd API.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use verdant_common::api::{
    AchievementsResponse, ChallengesResponse, HealthResponse, HistoryResponse, LogActionRequest,
    LogActionResponse, ResetResponse, StatsResponse, WeekChartResponse,
};
use verdant_common::TrackerConfig;

/// Client for the local verdantd HTTP API
pub struct DaemonClient {
    base_url: String,
    http: reqwest::Client,
}

impl DaemonClient {
    /// Build a client from the local configuration.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            base_url: format!("http://{}", config.server.listen_addr),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(connect_hint)?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(anyhow!("Daemon returned {}: {}", status, message));
        }
        Ok(response.json().await?)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        self.get_json("/v1/health").await
    }

    pub async fn log_action(&self, category: &str) -> Result<LogActionResponse> {
        let request = LogActionRequest {
            category: category.to_string(),
        };
        let response = self
            .http
            .post(self.url("/v1/actions"))
            .json(&request)
            .send()
            .await
            .map_err(connect_hint)?;
        Self::parse(response).await
    }

    pub async fn stats(&self) -> Result<StatsResponse> {
        self.get_json("/v1/stats").await
    }

    pub async fn history(&self, limit: usize) -> Result<HistoryResponse> {
        self.get_json(&format!("/v1/actions?limit={}", limit)).await
    }

    pub async fn week_chart(&self) -> Result<WeekChartResponse> {
        self.get_json("/v1/chart/week").await
    }

    pub async fn achievements(&self) -> Result<AchievementsResponse> {
        self.get_json("/v1/achievements").await
    }

    pub async fn challenges(&self) -> Result<ChallengesResponse> {
        self.get_json("/v1/challenges").await
    }

    pub async fn reset(&self) -> Result<ResetResponse> {
        let response = self
            .http
            .post(self.url("/v1/reset"))
            .send()
            .await
            .map_err(connect_hint)?;
        Self::parse(response).await
    }
}

fn connect_hint(err: reqwest::Error) -> anyhow::Error {
    if err.is_connect() {
        anyhow!(
            "Verdant daemon not running.\n\
             Start it in another terminal:\n  verdantd\n\n\
             ({})",
            err
        )
    } else {
        anyhow!(err)
    }
}
