use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

use crate::app::AccessError;
use crate::auth::AuthError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::mortgage::MortgageError;
use crate::reporting::ReportError;
use crate::telemetry::TelemetryError;

#[derive(Debug)]
pub enum AppError {
    Access(AccessError),
    Auth(AuthError),
    Catalog(CatalogError),
    Mortgage(MortgageError),
    Report(ReportError),
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Access(err) => write!(f, "access error: {}", err),
            AppError::Auth(err) => write!(f, "auth error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Mortgage(err) => write!(f, "mortgage error: {}", err),
            AppError::Report(err) => write!(f, "report error: {}", err),
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Access(err) => Some(err),
            AppError::Auth(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Mortgage(err) => Some(err),
            AppError::Report(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Access(AccessError::NotAuthenticated) => StatusCode::UNAUTHORIZED,
            AppError::Access(AccessError::Forbidden(_)) => StatusCode::FORBIDDEN,
            AppError::Auth(_) | AppError::Catalog(_) | AppError::Mortgage(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Report(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<AccessError> for AppError {
    fn from(value: AccessError) -> Self {
        Self::Access(value)
    }
}

impl From<AuthError> for AppError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<MortgageError> for AppError {
    fn from(value: MortgageError) -> Self {
        Self::Mortgage(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}
