mod types;
mod labels;

pub use types::*;
pub use labels::{TaskPriority, TaskStatus, TaskType};
