use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;

use super::{ProviderError, StatcastProvider};
use crate::stats::Frame;

/// Baseball Savant leaderboard CSV downloads.
#[derive(Debug, Clone)]
pub struct SavantProvider {
    client: Client,
    base_url: String,
}

impl SavantProvider {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/csv, text/plain, */*"));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn exit_velo_url(&self, season: i64, min_pa: u32) -> String {
        format!(
            "{}/leaderboard/statcast?type=batter&year={}&position=&team=&min={}&csv=true",
            self.base_url, season, min_pa
        )
    }

    pub fn sprint_speed_url(&self, season: i64, min_opp: u32) -> String {
        format!(
            "{}/leaderboard/sprint_speed?min_season={}&max_season={}&position=&team=&min={}&csv=true",
            self.base_url, season, season, min_opp
        )
    }

    async fn fetch_frame(&self, url: &str) -> Result<Frame, ProviderError> {
        tracing::debug!("Fetching leaderboard {}", url);

        let response = self.client.get(url).send().await.map_err(|err| {
            if err.is_connect() {
                ProviderError::Unavailable(err.to_string())
            } else {
                ProviderError::Http(err)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let frame = Frame::from_csv_reader(&body[..])?;

        tracing::debug!("Leaderboard {} returned {} rows", url, frame.len());
        Ok(frame)
    }
}

#[async_trait]
impl StatcastProvider for SavantProvider {
    async fn batter_exit_velo_barrels(&self, season: i64, min_pa: u32) -> Result<Frame, ProviderError> {
        self.fetch_frame(&self.exit_velo_url(season, min_pa)).await
    }

    async fn sprint_speed(&self, season: i64, min_opp: u32) -> Result<Frame, ProviderError> {
        self.fetch_frame(&self.sprint_speed_url(season, min_opp)).await
    }
}
