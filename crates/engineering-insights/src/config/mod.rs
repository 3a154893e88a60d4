use crate::insights::{CareerLevel, ColumnMapping, JobTrack, ReviewLabels};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "data/data.csv";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/template.html";
pub const DEFAULT_OUTPUT_PATH: &str = "engineering_insights_interactive_report.html";

/// Top-level configuration for the report generator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: PathConfig,
    pub columns: ColumnMapping,
    pub labels: ReviewLabels,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let paths = PathConfig {
            data: PathBuf::from(var_or("INSIGHTS_DATA_PATH", DEFAULT_DATA_PATH)?),
            template: PathBuf::from(var_or("INSIGHTS_TEMPLATE_PATH", DEFAULT_TEMPLATE_PATH)?),
            output: PathBuf::from(var_or("INSIGHTS_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?),
        };

        let defaults = ColumnMapping::default();
        let columns = ColumnMapping {
            level: var_or("INSIGHTS_LEVEL_COLUMN", &defaults.level)?,
            track: var_or("INSIGHTS_TRACK_COLUMN", &defaults.track)?,
            category: var_or("INSIGHTS_CATEGORY_COLUMN", &defaults.category)?,
            score: var_or("INSIGHTS_SCORE_COLUMN", &defaults.score)?,
        };

        let mut labels = ReviewLabels::default();
        for level in CareerLevel::ordered() {
            let value = var_or(level_key(level), labels.level(level))?;
            labels.set_level(level, value);
        }
        for track in JobTrack::ordered() {
            let value = var_or(track_key(track), labels.track(track))?;
            labels.set_track(track, value);
        }

        let log_level = var_or("INSIGHTS_LOG_LEVEL", "info")?;

        Ok(Self {
            paths,
            columns,
            labels,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Input, template and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    pub data: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            template: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must not be empty when set")]
    EmptyValue { key: &'static str },
    #[error("{key} must be valid unicode")]
    NotUnicode { key: &'static str },
}

const fn level_key(level: CareerLevel) -> &'static str {
    match level {
        CareerLevel::Entry => "INSIGHTS_LEVEL_ENTRY",
        CareerLevel::Mid => "INSIGHTS_LEVEL_MID",
        CareerLevel::Senior => "INSIGHTS_LEVEL_SENIOR",
    }
}

const fn track_key(track: JobTrack) -> &'static str {
    match track {
        JobTrack::Data => "INSIGHTS_TRACK_DATA",
        JobTrack::Analytics => "INSIGHTS_TRACK_ANALYTICS",
    }
}

fn var_or(key: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue { key }),
        Ok(value) => Ok(value.trim().to_string()),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
    }
}
