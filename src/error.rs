use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::provider::ProviderError;

/// Error code clients already match on when the data source is missing.
pub const PROVIDER_UNAVAILABLE_CODE: &str = "PYBASEBALL_NOT_INSTALLED";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing teamId param")]
    MissingTeamId,

    #[error("Invalid teamId or season")]
    InvalidParams,

    #[error("Unknown team ID: {0}")]
    UnknownTeam(i64),

    #[error("{0}")]
    ProviderUnavailable(String),

    #[error("{message}")]
    Internal { message: String, team: String },
}

impl ApiError {
    /// Classify a data source failure while serving `team`.
    pub fn from_provider(err: ProviderError, team: &str) -> Self {
        match err {
            ProviderError::Unavailable(reason) => ApiError::ProviderUnavailable(reason),
            other => ApiError::Internal {
                message: other.to_string(),
                team: team.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.to_string();

        let (status, body) = match self {
            ApiError::MissingTeamId | ApiError::InvalidParams => (
                StatusCode::BAD_REQUEST,
                ErrorResponse { error, message: None, team: None },
            ),
            ApiError::UnknownTeam(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse { error, message: None, team: None },
            ),
            ApiError::ProviderUnavailable(reason) => {
                tracing::error!("Statcast data source unavailable: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse {
                        error: PROVIDER_UNAVAILABLE_CODE.to_string(),
                        message: Some(
                            "Configure a Statcast data source (SAVANT_BASE_URL) and redeploy".to_string(),
                        ),
                        team: None,
                    },
                )
            }
            ApiError::Internal { team, .. } => {
                tracing::error!("Statcast request for {} failed: {}", team, error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse { error, message: None, team: Some(team) },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
