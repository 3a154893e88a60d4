use crate::config::ConfigError;
use crate::insights::{ReportError, TableError};
use crate::telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("input error: {0}")]
    Table(#[from] TableError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
