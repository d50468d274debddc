use chrono::{DateTime, Utc};
use tracing::{debug, info};
use crate::error::ReportError;
use crate::model::{EntitySnapshot, Project, Task, TaskStatus, User};
use crate::report::aggregator::aggregate_indexed;
use crate::report::index::SnapshotIndex;
use crate::report::types::{
    percentage, ProjectReport, Report, TaskReport, UserReport,
};
use crate::store::EntityStore;

/// 프로젝트가 없는 작업에 표시하는 이름
pub const NO_PROJECT: &str = "No Project";

pub struct ReportBuilder;

impl ReportBuilder {
    /// 저장소에서 스냅샷을 가져와 리포트를 만든다. 조회 실패만 오류가 된다.
    pub fn generate(store: &dyn EntityStore, now: DateTime<Utc>) -> Result<Report, ReportError> {
        let snapshot = store.snapshot()?;
        let report = Self::build(&snapshot, now);

        info!(
            projects = report.project_reports.len(),
            users = report.user_reports.len(),
            tasks = report.task_reports.len(),
            "리포트 생성 완료"
        );

        Ok(report)
    }

    /// 순수 함수. 결과 행은 원본 엔티티를 참조하지 않는다.
    pub fn build(snapshot: &EntitySnapshot, now: DateTime<Utc>) -> Report {
        let index = SnapshotIndex::new(snapshot);

        let aggregates = aggregate_indexed(snapshot, &index, now);

        let project_reports = snapshot
            .projects
            .iter()
            .map(|project| project_row(project, &index))
            .collect();

        let user_reports = snapshot
            .users
            .iter()
            .map(|user| user_row(user, snapshot, &index))
            .collect();

        let task_reports = snapshot
            .tasks
            .iter()
            .map(|task| task_row(task, &index))
            .collect();

        debug!("상세 행 생성 완료");

        Report {
            generated_at: now,
            projects_summary: aggregates.projects,
            users_summary: aggregates.users,
            tasks_summary: aggregates.tasks,
            project_reports,
            user_reports,
            task_reports,
        }
    }
}

#[derive(Default)]
struct StatusCounts {
    unassigned: usize,
    in_progress: usize,
    completed: usize,
    deferred: usize,
}

impl StatusCounts {
    fn tally(tasks: &[&Task]) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::Unassigned => counts.unassigned += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Deferred => counts.deferred += 1,
                TaskStatus::Other(_) => {}
            }
        }
        counts
    }
}

fn project_row(project: &Project, index: &SnapshotIndex<'_>) -> ProjectReport {
    let tasks = index.tasks_of_project(&project.id);
    let counts = StatusCounts::tally(tasks);

    ProjectReport {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        created_at: project.created_at,
        updated_at: project.updated_at,
        task_count: tasks.len(),
        completed_tasks: counts.completed,
        in_progress_tasks: counts.in_progress,
        unassigned_tasks: counts.unassigned,
        deferred_tasks: counts.deferred,
        user_count: project.member_ids.len(),
        completion_rate: percentage(counts.completed, tasks.len()),
    }
}

fn user_row(user: &User, snapshot: &EntitySnapshot, index: &SnapshotIndex<'_>) -> UserReport {
    let tasks = index.tasks_of_user(&user.id);
    let counts = StatusCounts::tally(tasks);

    // 역할 id가 곧 이름이라 역할 목록에 없어도 그대로 표시한다
    let roles = user.role_ids.clone();
    let project_count = snapshot
        .projects
        .iter()
        .filter(|p| p.member_ids.iter().any(|id| id == &user.id))
        .count();

    UserReport {
        id: user.id.clone(),
        full_name: user.full_name(),
        roles,
        task_count: tasks.len(),
        completed_tasks: counts.completed,
        in_progress_tasks: counts.in_progress,
        project_count,
        completion_rate: percentage(counts.completed, tasks.len()),
        created_at: user.created_at,
    }
}

fn task_row(task: &Task, index: &SnapshotIndex<'_>) -> TaskReport {
    let project_name = task
        .project_id
        .as_deref()
        .and_then(|id| index.project(id))
        .map(|p| p.title.clone())
        .unwrap_or_else(|| NO_PROJECT.to_string());

    let assigned_user_name = task
        .assignee_id
        .as_deref()
        .and_then(|id| index.user(id))
        .map(User::full_name);

    TaskReport {
        id: task.id.clone(),
        name: task.name.clone(),
        task_type: task.task_type.clone(),
        status: task.status.clone(),
        priority: task.priority.clone(),
        project_name,
        assigned_user_name,
        comment: task.comment.clone(),
        created_at: task.created_at,
        assigned_at: task.assigned_at,
        completed_at: task.completed_at,
        item_count: task.items.len(),
        completed_item_count: task.items.iter().filter(|item| item.completed).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use crate::error::StoreError;
    use crate::model::{TaskItem, TaskPriority, TaskType};
    use crate::store::MemoryStore;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn snapshot() -> EntitySnapshot {
        let project = Project {
            id: "p1".to_string(),
            title: "Website".to_string(),
            description: "Public site".to_string(),
            created_at: now() - Duration::days(30),
            updated_at: None,
            member_ids: vec!["u1".to_string(), "u2".to_string()],
        };
        let users = vec![
            User {
                id: "u1".to_string(),
                first_name: "Mina".to_string(),
                last_name: "Park".to_string(),
                role_ids: vec!["Admin".to_string()],
                created_at: now(),
                updated_at: None,
            },
            User {
                id: "u2".to_string(),
                first_name: "Alex".to_string(),
                last_name: "Kim".to_string(),
                role_ids: Vec::new(),
                created_at: now(),
                updated_at: None,
            },
        ];
        let base = Task {
            id: String::new(),
            name: String::new(),
            task_type: TaskType::Bug,
            status: TaskStatus::Unassigned,
            priority: TaskPriority::High,
            comment: String::new(),
            created_at: now() - Duration::days(3),
            assigned_at: None,
            completed_at: None,
            updated_at: None,
            project_id: None,
            assignee_id: None,
            items: Vec::new(),
        };
        let tasks = vec![
            Task {
                id: "t1".to_string(),
                name: "Fix header".to_string(),
                status: TaskStatus::Completed,
                completed_at: Some(now() - Duration::days(1)),
                project_id: Some("p1".to_string()),
                assignee_id: Some("u1".to_string()),
                items: vec![
                    TaskItem { id: "i1".into(), title: "a".into(), completed: true },
                    TaskItem { id: "i2".into(), title: "b".into(), completed: false },
                ],
                ..base.clone()
            },
            Task {
                id: "t2".to_string(),
                name: "Footer".to_string(),
                status: TaskStatus::InProgress,
                project_id: Some("p1".to_string()),
                ..base.clone()
            },
            Task {
                id: "t3".to_string(),
                name: "Loose".to_string(),
                assignee_id: Some("ghost".to_string()),
                ..base
            },
        ];

        EntitySnapshot {
            projects: vec![project],
            users,
            tasks,
            roles: Vec::new(),
        }
    }

    #[test]
    fn project_row_counts_its_own_tasks() {
        let report = ReportBuilder::build(&snapshot(), now());
        let row = &report.project_reports[0];

        assert_eq!(row.task_count, 2);
        assert_eq!(row.completed_tasks, 1);
        assert_eq!(row.in_progress_tasks, 1);
        assert_eq!(row.user_count, 2);
        assert_eq!(row.completion_rate, 50.0);
    }

    #[test]
    fn user_row_counts_only_assigned_tasks() {
        let report = ReportBuilder::build(&snapshot(), now());

        let mina = &report.user_reports[0];
        assert_eq!(mina.task_count, 1);
        assert_eq!(mina.completed_tasks, 1);
        assert_eq!(mina.project_count, 1);
        assert_eq!(mina.roles, vec!["Admin".to_string()]);

        // 같은 프로젝트 멤버라도 담당이 아니면 세지 않는다
        let alex = &report.user_reports[1];
        assert_eq!(alex.task_count, 0);
        assert_eq!(alex.completion_rate, 0.0);
    }

    #[test]
    fn task_row_resolves_names() {
        let report = ReportBuilder::build(&snapshot(), now());

        let fixed = &report.task_reports[0];
        assert_eq!(fixed.project_name, "Website");
        assert_eq!(fixed.assigned_user_name.as_deref(), Some("Mina Park"));
        assert_eq!(fixed.item_count, 2);
        assert_eq!(fixed.completed_item_count, 1);

        let loose = &report.task_reports[2];
        assert_eq!(loose.project_name, NO_PROJECT);
        assert_eq!(loose.assigned_user_name, None);
    }

    #[test]
    fn report_is_detached_from_source_entities() {
        let mut source = snapshot();
        let report = ReportBuilder::build(&source, now());

        source.projects[0].title = "Renamed".to_string();
        source.tasks.clear();

        assert_eq!(report.task_reports[0].project_name, "Website");
        assert_eq!(report.project_reports[0].title, "Website");
    }

    #[test]
    fn generate_reads_from_store() {
        let store = MemoryStore::new(snapshot());
        let report = ReportBuilder::generate(&store, now()).unwrap();

        assert_eq!(report.generated_at, now());
        assert_eq!(report.tasks_summary.total_tasks, 3);
    }

    struct FailingStore;

    impl EntityStore for FailingStore {
        fn snapshot(&self) -> Result<EntitySnapshot, StoreError> {
            Err(StoreError::Read {
                path: "db.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        }
    }

    #[test]
    fn store_failure_surfaces_as_generation_error() {
        let err = ReportBuilder::generate(&FailingStore, now()).unwrap_err();
        let ReportError::Generation { source } = err;
        assert!(matches!(source, StoreError::Read { .. }));
    }

    #[test]
    fn summaries_match_standalone_aggregation() {
        let snapshot = snapshot();
        let report = ReportBuilder::build(&snapshot, now());
        let aggregates = crate::report::aggregate(&snapshot, now());

        assert_eq!(report.projects_summary, aggregates.projects);
        assert_eq!(report.users_summary, aggregates.users);
        assert_eq!(report.tasks_summary, aggregates.tasks);
    }
}
