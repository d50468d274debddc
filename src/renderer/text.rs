use std::collections::BTreeMap;
use std::fmt::Write;
use crate::renderer::{format_decimal, format_optional_timestamp, format_timestamp};
use crate::report::{ProjectsSummary, Report, TasksSummary, UsersSummary};

const RULE_WIDTH: usize = 60;

/// 리포트를 사람이 읽는 텍스트로 변환. 같은 리포트면 항상 같은 결과를 낸다.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("TASKBOARD REPORT\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    line(&mut out, "Generated", &format_timestamp(&report.generated_at));
    out.push('\n');

    write_projects_summary(&mut out, &report.projects_summary);
    write_users_summary(&mut out, &report.users_summary);
    write_tasks_summary(&mut out, &report.tasks_summary);

    section(&mut out, "PROJECT DETAILS");
    if report.project_reports.is_empty() {
        out.push_str("(none)\n");
    }
    for (i, project) in report.project_reports.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, project.title);
        field(&mut out, "ID", &project.id);
        field(&mut out, "Description", &project.description);
        field(&mut out, "Created", &format_timestamp(&project.created_at));
        field(&mut out, "Updated", &format_optional_timestamp(&project.updated_at));
        field(&mut out, "Tasks", &project.task_count.to_string());
        field(&mut out, "Completed", &project.completed_tasks.to_string());
        field(&mut out, "In Progress", &project.in_progress_tasks.to_string());
        field(&mut out, "Unassigned", &project.unassigned_tasks.to_string());
        field(&mut out, "Deferred", &project.deferred_tasks.to_string());
        field(&mut out, "Members", &project.user_count.to_string());
        field(&mut out, "Completion Rate", &format!("{}%", format_decimal(project.completion_rate)));
    }
    out.push('\n');

    section(&mut out, "USER DETAILS");
    if report.user_reports.is_empty() {
        out.push_str("(none)\n");
    }
    for (i, user) in report.user_reports.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, user.full_name);
        field(&mut out, "ID", &user.id);
        field(&mut out, "Roles", &join_or_none(&user.roles));
        field(&mut out, "Created", &format_timestamp(&user.created_at));
        field(&mut out, "Assigned Tasks", &user.task_count.to_string());
        field(&mut out, "Completed", &user.completed_tasks.to_string());
        field(&mut out, "In Progress", &user.in_progress_tasks.to_string());
        field(&mut out, "Projects", &user.project_count.to_string());
        field(&mut out, "Completion Rate", &format!("{}%", format_decimal(user.completion_rate)));
    }
    out.push('\n');

    section(&mut out, "TASK DETAILS");
    if report.task_reports.is_empty() {
        out.push_str("(none)\n");
    }
    for (i, task) in report.task_reports.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, task.name);
        field(&mut out, "ID", &task.id);
        field(&mut out, "Type", task.task_type.label());
        field(&mut out, "Status", task.status.label());
        field(&mut out, "Priority", task.priority.label());
        field(&mut out, "Project", &task.project_name);
        field(&mut out, "Assigned To", task.assigned_user_name.as_deref().unwrap_or("Unassigned"));
        field(&mut out, "Created", &format_timestamp(&task.created_at));
        field(&mut out, "Assigned", &format_optional_timestamp(&task.assigned_at));
        field(&mut out, "Completed", &format_optional_timestamp(&task.completed_at));
        field(&mut out, "Checklist", &format!("{}/{}", task.completed_item_count, task.item_count));
        if !task.comment.is_empty() {
            field(&mut out, "Comment", &task.comment);
        }
    }

    out
}

fn write_projects_summary(out: &mut String, summary: &ProjectsSummary) {
    section(out, "PROJECTS SUMMARY");
    line(out, "Total Projects", &summary.total_projects.to_string());
    line(out, "Projects With Tasks", &summary.projects_with_tasks.to_string());
    line(out, "Projects Without Tasks", &summary.projects_without_tasks.to_string());
    line(out, "Total Tasks Across Projects", &summary.total_tasks_across_projects.to_string());
    line(out, "Average Tasks Per Project", &format_decimal(summary.average_tasks_per_project));
    line(out, "Oldest Project", &format_optional_timestamp(&summary.oldest_project));
    line(out, "Newest Project", &format_optional_timestamp(&summary.newest_project));
    out.push('\n');
}

fn write_users_summary(out: &mut String, summary: &UsersSummary) {
    section(out, "USERS SUMMARY");
    line(out, "Total Users", &summary.total_users.to_string());
    line(out, "Users With Tasks", &summary.users_with_tasks.to_string());
    line(out, "Users Without Tasks", &summary.users_without_tasks.to_string());
    line(out, "Total Tasks Assigned", &summary.total_tasks_assigned.to_string());
    line(out, "Average Tasks Per User", &format_decimal(summary.average_tasks_per_user));
    let most_active = match &summary.most_active_user {
        Some(name) => format!("{} ({} tasks)", name, summary.most_active_user_task_count),
        None => "N/A".to_string(),
    };
    line(out, "Most Active User", &most_active);
    out.push('\n');
}

fn write_tasks_summary(out: &mut String, summary: &TasksSummary) {
    section(out, "TASKS SUMMARY");
    line(out, "Total Tasks", &summary.total_tasks.to_string());
    line(out, "Unassigned", &summary.unassigned_tasks.to_string());
    line(out, "In Progress", &summary.in_progress_tasks.to_string());
    line(out, "Completed", &summary.completed_tasks.to_string());
    line(out, "Deferred", &summary.deferred_tasks.to_string());
    line(out, "Completion Rate", &format!("{}%", format_decimal(summary.completion_rate)));
    line(out, "Completed This Week", &summary.completed_this_week.to_string());
    line(out, "Completed This Month", &summary.completed_this_month.to_string());
    line(out, "Oldest Task", &format_optional_timestamp(&summary.oldest_task));
    line(out, "Newest Task", &format_optional_timestamp(&summary.newest_task));
    grouped(out, "Tasks By Type", &summary.tasks_by_type);
    grouped(out, "Tasks By Priority", &summary.tasks_by_priority);
    out.push('\n');
}

fn section(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label}: {value}");
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "   {label}: {value}");
}

/// BTreeMap 순서 그대로 (키 오름차순)
fn grouped(out: &mut String, label: &str, counts: &BTreeMap<String, usize>) {
    let _ = writeln!(out, "{label}:");
    if counts.is_empty() {
        out.push_str("   (none)\n");
    }
    for (key, count) in counts {
        let _ = writeln!(out, "   {key}: {count}");
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::model::EntitySnapshot;
    use crate::report::ReportBuilder;

    #[test]
    fn empty_report_still_has_every_section_in_order() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let text = render_text(&ReportBuilder::build(&EntitySnapshot::default(), now));

        assert!(text.starts_with("TASKBOARD REPORT\n"));
        assert!(text.contains("Generated: 2026-10-19 12:00:00 UTC"));
        assert!(text.contains("Average Tasks Per Project: 0.00"));
        assert!(text.contains("Most Active User: N/A"));

        let order = [
            "PROJECTS SUMMARY",
            "USERS SUMMARY",
            "TASKS SUMMARY",
            "PROJECT DETAILS",
            "USER DETAILS",
            "TASK DETAILS",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
