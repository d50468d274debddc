mod text;
mod csv;
mod table;
pub mod document;

pub use text::render_text;
pub use self::csv::render_csv;
pub use table::{render_summary_table, SummaryTable};
pub use document::{layout_document, render_document, DocumentConfig, DocumentLayout};

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use crate::error::ExportError;
use crate::report::Report;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// 내보내기 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, ExportFormat::Pdf)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(format!("지원하지 않는 형식: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        };
        write!(f, "{name}")
    }
}

/// 형식에 맞는 렌더러를 골라 바이트로 돌려준다.
pub fn export(report: &Report, format: ExportFormat, document: &DocumentConfig) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Text => Ok(render_text(report).into_bytes()),
        ExportFormat::Csv => Ok(render_csv(report)?.into_bytes()),
        ExportFormat::Pdf => render_document(report, document),
    }
}

pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn format_optional_timestamp(at: &Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => format_timestamp(at),
        None => "N/A".to_string(),
    }
}

pub(crate) fn format_decimal(value: f64) -> String {
    format!("{value:.2}")
}
