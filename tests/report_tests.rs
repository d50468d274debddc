//! 집계와 리포트 생성 통합 테스트

mod common;

use chrono::Duration;
use common::*;
use proptest::prelude::*;
use taskboard_report::model::{EntitySnapshot, TaskPriority, TaskStatus, TaskType};
use taskboard_report::report::{aggregate, ReportBuilder, NO_PROJECT};
use taskboard_report::MemoryStore;

#[test]
fn projects_summary_counts_tasks_per_project() {
    let report = ReportBuilder::build(&scenario_snapshot(), now());
    let summary = &report.projects_summary;

    assert_eq!(summary.total_projects, 3);
    assert_eq!(summary.total_tasks_across_projects, 7);
    assert_eq!(summary.projects_with_tasks, 2);
    assert_eq!(summary.projects_without_tasks, 1);
    assert!((summary.average_tasks_per_project - 7.0 / 3.0).abs() < 1e-9);

    let acme = &report.project_reports[2];
    assert_eq!(acme.task_count, 5);
    assert_eq!(acme.completed_tasks, 2);
    assert_eq!(acme.in_progress_tasks, 1);
    assert_eq!(acme.unassigned_tasks, 2);
    assert!((acme.completion_rate - 40.0).abs() < 1e-9);
}

#[test]
fn most_active_user_has_most_assigned_tasks() {
    let report = ReportBuilder::build(&scenario_snapshot(), now());
    let summary = &report.users_summary;

    assert_eq!(summary.most_active_user.as_deref(), Some("Mina Park"));
    assert_eq!(summary.most_active_user_task_count, 4);
    assert_eq!(summary.users_with_tasks, 1);
    assert_eq!(summary.users_without_tasks, 1);
    assert_eq!(summary.total_tasks_assigned, 4);

    let mina = &report.user_reports[0];
    assert_eq!(mina.roles, vec!["admin".to_string()]);
    assert_eq!(mina.project_count, 2);
    assert_eq!(mina.completed_tasks, 2);
}

#[test]
fn completion_windows_follow_completed_at() {
    let mut recent = completed_days_ago("recent", 2);
    recent.status = TaskStatus::parse("COMPLETED");
    let snapshot = EntitySnapshot {
        tasks: vec![recent, completed_days_ago("old", 40)],
        ..Default::default()
    };

    let summary = aggregate(&snapshot, now()).tasks;
    assert_eq!(summary.completed_tasks, 2);
    assert_eq!(summary.completed_this_week, 1);
    assert_eq!(summary.completed_this_month, 1);
}

#[test]
fn empty_snapshot_yields_zeroed_report() {
    let report = ReportBuilder::generate(&MemoryStore::default(), now()).unwrap();

    assert_eq!(report.generated_at, now());
    assert_eq!(report.projects_summary.average_tasks_per_project, 0.0);
    assert_eq!(report.users_summary.average_tasks_per_user, 0.0);
    assert_eq!(report.users_summary.most_active_user, None);
    assert_eq!(report.tasks_summary.completion_rate, 0.0);
    assert!(report.tasks_summary.oldest_task.is_none());
    assert!(report.project_reports.is_empty());
    assert!(report.user_reports.is_empty());
    assert!(report.task_reports.is_empty());
}

#[test]
fn orphan_task_rows_use_placeholders() {
    let snapshot = EntitySnapshot {
        tasks: vec![in_project(task("t1", TaskStatus::Unassigned), "missing")],
        ..Default::default()
    };

    let report = ReportBuilder::build(&snapshot, now());
    let row = &report.task_reports[0];
    assert_eq!(row.project_name, NO_PROJECT);
    assert_eq!(row.assigned_user_name, None);
}

#[test]
fn same_input_builds_same_report() {
    let snapshot = scenario_snapshot();
    assert_eq!(
        ReportBuilder::build(&snapshot, now()),
        ReportBuilder::build(&snapshot, now())
    );
}

fn status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Unassigned),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Deferred),
        "[a-z]{1,8}".prop_map(|s| TaskStatus::parse(&s)),
    ]
}

fn snapshot_strategy() -> impl Strategy<Value = EntitySnapshot> {
    let spec = (
        status_strategy(),
        0i64..60,
        proptest::option::of(0usize..4),
        proptest::option::of(0usize..3),
        0usize..3,
    );
    (0usize..4, 0usize..3, proptest::collection::vec(spec, 0..25)).prop_map(
        |(project_count, user_count, specs)| {
            let projects = (0..project_count)
                .map(|i| project(&format!("p{i}"), &format!("Project {i}")))
                .collect();
            let users = (0..user_count)
                .map(|i| user(&format!("u{i}"), "User", &i.to_string()))
                .collect();
            let tasks = specs
                .into_iter()
                .enumerate()
                .map(|(i, (status, days, project, assignee, kind))| {
                    let mut t = task(&format!("t{i}"), status);
                    t.completed_at = Some(now() - Duration::days(days));
                    t.project_id = project.map(|p| format!("p{p}"));
                    t.assignee_id = assignee.map(|u| format!("u{u}"));
                    t.task_type = [TaskType::Feature, TaskType::Bug, TaskType::parse("Spike")][kind].clone();
                    t.priority = if kind == 0 { TaskPriority::High } else { TaskPriority::Low };
                    t
                })
                .collect();
            EntitySnapshot {
                projects,
                users,
                tasks,
                roles: Vec::new(),
            }
        },
    )
}

proptest! {
    #[test]
    fn summaries_partition_their_totals(snapshot in snapshot_strategy()) {
        let report = ReportBuilder::build(&snapshot, now());
        let projects = &report.projects_summary;
        let users = &report.users_summary;
        let tasks = &report.tasks_summary;

        prop_assert_eq!(projects.projects_with_tasks + projects.projects_without_tasks, projects.total_projects);
        prop_assert_eq!(users.users_with_tasks + users.users_without_tasks, users.total_users);
        prop_assert!(projects.total_tasks_across_projects <= tasks.total_tasks);
        prop_assert!(users.total_tasks_assigned <= tasks.total_tasks);
        prop_assert!(users.most_active_user_task_count <= users.total_tasks_assigned);

        let known = tasks.unassigned_tasks + tasks.in_progress_tasks + tasks.completed_tasks + tasks.deferred_tasks;
        prop_assert!(known <= tasks.total_tasks);
        prop_assert_eq!(tasks.tasks_by_type.values().sum::<usize>(), tasks.total_tasks);
        prop_assert_eq!(tasks.tasks_by_priority.values().sum::<usize>(), tasks.total_tasks);

        prop_assert!(tasks.completed_this_week <= tasks.completed_this_month);
        prop_assert!(tasks.completed_this_month <= tasks.completed_tasks);
        prop_assert!((0.0..=100.0).contains(&tasks.completion_rate));

        prop_assert_eq!(
            report.project_reports.iter().map(|p| p.task_count).sum::<usize>(),
            projects.total_tasks_across_projects
        );
        prop_assert_eq!(
            report.user_reports.iter().map(|u| u.task_count).sum::<usize>(),
            users.total_tasks_assigned
        );
        let rows_with = |status: TaskStatus| {
            report.task_reports.iter().filter(|t| t.status == status).count()
        };
        prop_assert_eq!(rows_with(TaskStatus::Unassigned), tasks.unassigned_tasks);
        prop_assert_eq!(rows_with(TaskStatus::InProgress), tasks.in_progress_tasks);
        prop_assert_eq!(rows_with(TaskStatus::Completed), tasks.completed_tasks);
        prop_assert_eq!(rows_with(TaskStatus::Deferred), tasks.deferred_tasks);

        prop_assert_eq!(report.project_reports.len(), projects.total_projects);
        prop_assert_eq!(report.user_reports.len(), users.total_users);
        prop_assert_eq!(report.task_reports.len(), tasks.total_tasks);
    }
}
