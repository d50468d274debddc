mod types;
mod index;
mod aggregator;
mod builder;

pub use types::*;
pub use aggregator::{aggregate, CompletionWindow};
pub use builder::{ReportBuilder, NO_PROJECT};
