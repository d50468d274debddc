use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use crate::model::{TaskPriority, TaskStatus, TaskType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsSummary {
    pub total_projects: usize,
    pub projects_with_tasks: usize,
    pub projects_without_tasks: usize,
    pub total_tasks_across_projects: usize,
    pub average_tasks_per_project: f64,
    pub oldest_project: Option<DateTime<Utc>>,
    pub newest_project: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersSummary {
    pub total_users: usize,
    pub users_with_tasks: usize,
    pub users_without_tasks: usize,
    pub total_tasks_assigned: usize,
    pub average_tasks_per_user: f64,
    pub most_active_user: Option<String>,
    pub most_active_user_task_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksSummary {
    pub total_tasks: usize,
    pub unassigned_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    pub deferred_tasks: usize,
    /// 라벨별 개수 (키 오름차순)
    pub tasks_by_type: BTreeMap<String, usize>,
    pub tasks_by_priority: BTreeMap<String, usize>,
    pub oldest_task: Option<DateTime<Utc>>,
    pub newest_task: Option<DateTime<Utc>>,
    pub completed_this_week: usize,
    pub completed_this_month: usize,
    /// 완료율 (%)
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub task_count: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub unassigned_tasks: usize,
    pub deferred_tasks: usize,
    pub user_count: usize,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    pub id: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub task_count: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub project_count: usize,
    /// 담당 작업 중 완료 비율 (%)
    pub completion_rate: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskReport {
    pub id: String,
    pub name: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_name: String,
    pub assigned_user_name: Option<String>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub item_count: usize,
    pub completed_item_count: usize,
}

/// 특정 시점의 리포트 스냅샷. 한 번 만들어지면 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub projects_summary: ProjectsSummary,
    pub users_summary: UsersSummary,
    pub tasks_summary: TasksSummary,
    pub project_reports: Vec<ProjectReport>,
    pub user_reports: Vec<UserReport>,
    pub task_reports: Vec<TaskReport>,
}

/// 집계 결과 묶음
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub projects: ProjectsSummary,
    pub users: UsersSummary,
    pub tasks: TasksSummary,
}

/// 0으로 나누는 경우 0을 돌려주는 평균
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    ratio(part, whole) * 100.0
}
