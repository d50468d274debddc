use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::renderer::{DocumentConfig, ExportFormat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub output: OutputPreferences,
    pub logging: LoggingPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    pub directory: PathBuf,
    pub default_format: ExportFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// RUST_LOG가 없을 때 쓰는 기본 필터
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: DocumentConfig::default(),
            output: OutputPreferences::default(),
            logging: LoggingPreferences::default(),
        }
    }
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            directory: dirs::document_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("taskboard-reports"),
            default_format: ExportFormat::Text,
        }
    }
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
