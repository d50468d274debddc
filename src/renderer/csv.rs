use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use crate::error::ExportError;
use crate::renderer::{format_decimal, format_optional_timestamp, format_timestamp};
use crate::report::Report;

const PROJECT_HEADERS: [&str; 12] = [
    "ID", "Title", "Description", "Created", "Updated", "Tasks", "Completed",
    "In Progress", "Unassigned", "Deferred", "Members", "Completion Rate",
];

const USER_HEADERS: [&str; 9] = [
    "ID", "Name", "Roles", "Created", "Assigned Tasks", "Completed", "In Progress",
    "Projects", "Completion Rate",
];

const TASK_HEADERS: [&str; 13] = [
    "ID", "Name", "Type", "Status", "Priority", "Project", "Assigned To", "Comment",
    "Created", "Assigned", "Completed", "Checklist Items", "Checklist Completed",
];

/// PROJECTS, USERS, TASKS 세 블록을 빈 줄로 구분해 출력한다.
/// 구분자나 따옴표가 들어간 필드는 RFC 4180 방식으로 감싼다.
pub fn render_csv(report: &Report) -> Result<String, ExportError> {
    let projects = block(
        "PROJECTS",
        &PROJECT_HEADERS,
        report.project_reports.iter().map(|p| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.description.clone(),
                format_timestamp(&p.created_at),
                format_optional_timestamp(&p.updated_at),
                p.task_count.to_string(),
                p.completed_tasks.to_string(),
                p.in_progress_tasks.to_string(),
                p.unassigned_tasks.to_string(),
                p.deferred_tasks.to_string(),
                p.user_count.to_string(),
                format_decimal(p.completion_rate),
            ]
        }),
    )?;

    let users = block(
        "USERS",
        &USER_HEADERS,
        report.user_reports.iter().map(|u| {
            vec![
                u.id.clone(),
                u.full_name.clone(),
                u.roles.join("; "),
                format_timestamp(&u.created_at),
                u.task_count.to_string(),
                u.completed_tasks.to_string(),
                u.in_progress_tasks.to_string(),
                u.project_count.to_string(),
                format_decimal(u.completion_rate),
            ]
        }),
    )?;

    let tasks = block(
        "TASKS",
        &TASK_HEADERS,
        report.task_reports.iter().map(|t| {
            vec![
                t.id.clone(),
                t.name.clone(),
                t.task_type.label().to_string(),
                t.status.label().to_string(),
                t.priority.label().to_string(),
                t.project_name.clone(),
                t.assigned_user_name.clone().unwrap_or_default(),
                t.comment.clone(),
                format_timestamp(&t.created_at),
                format_optional_timestamp(&t.assigned_at),
                format_optional_timestamp(&t.completed_at),
                t.item_count.to_string(),
                t.completed_item_count.to_string(),
            ]
        }),
    )?;

    Ok([projects, users, tasks].join("\n"))
}

fn block<I>(label: &str, headers: &[&str], rows: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvBuffer(e.error().to_string()))?;

    let mut out = String::with_capacity(label.len() + 1 + bytes.len());
    out.push_str(label);
    out.push('\n');
    out.push_str(&String::from_utf8(bytes)?);
    Ok(out)
}
