use serde::{Serialize, Deserialize};
use std::fmt;

/// 작업 상태. 알려진 네 가지 값 외의 문자열은 `Other`로 보존된다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Unassigned,
    InProgress,
    Completed,
    Deferred,
    Other(String),
}

impl TaskStatus {
    pub const KNOWN: [TaskStatus; 4] = [
        TaskStatus::Unassigned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Deferred,
    ];

    /// 대소문자를 무시하고 표준 라벨과 정확히 일치할 때만 알려진 상태로 분류
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "unassigned" => TaskStatus::Unassigned,
            "in progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            "deferred" => TaskStatus::Deferred,
            _ => TaskStatus::Other(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Unassigned => "Unassigned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Deferred => "Deferred",
            TaskStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Enhancement,
    Other(String),
}

impl TaskPriority {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => TaskPriority::Low,
            "medium" => TaskPriority::Medium,
            "high" => TaskPriority::High,
            "enhancement" => TaskPriority::Enhancement,
            _ => TaskPriority::Other(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Enhancement => "Enhancement",
            TaskPriority::Other(raw) => raw,
        }
    }
}

/// 작업 유형. 사용자 정의 유형이 많아서 알려진 값은 일부만 둔다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskType {
    Feature,
    Bug,
    Chore,
    Research,
    Other(String),
}

impl TaskType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "feature" => TaskType::Feature,
            "bug" => TaskType::Bug,
            "chore" => TaskType::Chore,
            "research" => TaskType::Research,
            _ => TaskType::Other(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskType::Feature => "Feature",
            TaskType::Bug => "Bug",
            TaskType::Chore => "Chore",
            TaskType::Research => "Research",
            TaskType::Other(raw) => raw,
        }
    }
}

macro_rules! string_label_conversions {
    ($($ty:ident),*) => {
        $(
            impl From<String> for $ty {
                fn from(raw: String) -> Self {
                    $ty::parse(&raw)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

string_label_conversions!(TaskStatus, TaskPriority, TaskType);
