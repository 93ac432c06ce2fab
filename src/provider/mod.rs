use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::stats::Frame;

pub mod savant;

pub use savant::SavantProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// No data source is configured or the source cannot be reached at all.
    #[error("statcast data source unavailable: {0}")]
    Unavailable(String),

    #[error("request to statcast data source failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("statcast data source returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed leaderboard csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Source of league-wide Statcast leaderboards, one row per qualifying player.
#[async_trait]
pub trait StatcastProvider: Send + Sync {
    /// Exit-velocity / barrel leaderboard for batters with at least `min_pa`
    /// plate appearances.
    async fn batter_exit_velo_barrels(&self, season: i64, min_pa: u32) -> Result<Frame, ProviderError>;

    /// Sprint-speed leaderboard for runners with at least `min_opp` qualifying
    /// opportunities.
    async fn sprint_speed(&self, season: i64, min_opp: u32) -> Result<Frame, ProviderError>;
}

/// Stand-in used when no data source is configured.
#[derive(Debug, Default, Clone)]
pub struct UnavailableProvider;

#[async_trait]
impl StatcastProvider for UnavailableProvider {
    async fn batter_exit_velo_barrels(&self, _season: i64, _min_pa: u32) -> Result<Frame, ProviderError> {
        Err(ProviderError::Unavailable("SAVANT_BASE_URL is not set".to_string()))
    }

    async fn sprint_speed(&self, _season: i64, _min_opp: u32) -> Result<Frame, ProviderError> {
        Err(ProviderError::Unavailable("SAVANT_BASE_URL is not set".to_string()))
    }
}

/// Build the provider described by `config`.
pub fn from_config(config: &Config) -> Result<Arc<dyn StatcastProvider>, ProviderError> {
    match &config.savant_base_url {
        Some(base_url) => {
            tracing::info!("Using Baseball Savant at {}", base_url);
            let provider = SavantProvider::new(
                base_url.as_str(),
                &config.savant_user_agent,
                config.savant_timeout,
            )?;
            Ok(Arc::new(provider))
        }
        None => {
            tracing::warn!("SAVANT_BASE_URL is empty; statcast requests will answer 503");
            Ok(Arc::new(UnavailableProvider))
        }
    }
}
