pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod renderer;
pub mod report;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{ChartError, ExportError, ReportError, StoreError};
pub use model::EntitySnapshot;
pub use renderer::{export, render_csv, render_document, render_text, DocumentConfig, ExportFormat};
pub use report::{aggregate, Report, ReportBuilder};
pub use store::{EntityStore, JsonFileStore, MemoryStore};
