use colored::*;
use prettytable::{cell, Row, Table};
use serde::{Serialize, Deserialize};
use crate::renderer::{format_decimal, format_optional_timestamp};
use crate::report::{ProjectsSummary, Report, TasksSummary, UsersSummary};

/// `summary` 명령의 json/yaml 출력용 묶음
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTable {
    pub projects: ProjectsSummary,
    pub users: UsersSummary,
    pub tasks: TasksSummary,
}

impl From<&Report> for SummaryTable {
    fn from(report: &Report) -> Self {
        Self {
            projects: report.projects_summary.clone(),
            users: report.users_summary.clone(),
            tasks: report.tasks_summary.clone(),
        }
    }
}

/// 터미널 출력용 요약 표
pub fn render_summary_table(report: &Report) -> String {
    let p = &report.projects_summary;
    let u = &report.users_summary;
    let t = &report.tasks_summary;

    let mut rows: Vec<[String; 3]> = vec![
        ["Projects".into(), "Total".into(), p.total_projects.to_string()],
        ["".into(), "With Tasks".into(), p.projects_with_tasks.to_string()],
        ["".into(), "Without Tasks".into(), p.projects_without_tasks.to_string()],
        ["".into(), "Avg Tasks".into(), format_decimal(p.average_tasks_per_project)],
        ["".into(), "Oldest".into(), format_optional_timestamp(&p.oldest_project)],
        ["Users".into(), "Total".into(), u.total_users.to_string()],
        ["".into(), "With Tasks".into(), u.users_with_tasks.to_string()],
        ["".into(), "Avg Tasks".into(), format_decimal(u.average_tasks_per_user)],
        [
            "".into(),
            "Most Active".into(),
            u.most_active_user
                .as_ref()
                .map(|name| format!("{} ({})", name, u.most_active_user_task_count))
                .unwrap_or_else(|| "N/A".to_string()),
        ],
        ["Tasks".into(), "Total".into(), t.total_tasks.to_string()],
        ["".into(), "Unassigned".into(), t.unassigned_tasks.to_string()],
        ["".into(), "In Progress".into(), t.in_progress_tasks.to_string()],
        ["".into(), "Completed".into(), t.completed_tasks.to_string()],
        ["".into(), "Deferred".into(), t.deferred_tasks.to_string()],
        ["".into(), "This Week".into(), t.completed_this_week.to_string()],
        ["".into(), "This Month".into(), t.completed_this_month.to_string()],
    ];
    for (label, count) in &t.tasks_by_type {
        rows.push(["".into(), format!("Type: {label}"), count.to_string()]);
    }

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        cell!("구분".bright_cyan().bold()),
        cell!("항목".bright_cyan().bold()),
        cell!("값".bright_cyan().bold()),
    ]));
    for row in &rows {
        table.add_row(Row::new(row.iter().map(|c| cell!(c)).collect()));
    }

    table.to_string()
}
