//! 통합 테스트용 엔티티 픽스처

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use taskboard_report::model::{
    EntitySnapshot, Project, Role, Task, TaskPriority, TaskStatus, TaskType, User,
};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        created_at: now() - Duration::days(60),
        updated_at: None,
        member_ids: Vec::new(),
    }
}

pub fn user(id: &str, first: &str, last: &str) -> User {
    User {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role_ids: Vec::new(),
        created_at: now() - Duration::days(90),
        updated_at: None,
    }
}

pub fn role(id: &str) -> Role {
    Role {
        id: id.to_string(),
        permissions: Vec::new(),
    }
}

pub fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        name: format!("Task {id}"),
        task_type: TaskType::Feature,
        status,
        priority: TaskPriority::Medium,
        comment: String::new(),
        created_at: now() - Duration::days(20),
        assigned_at: None,
        completed_at: None,
        updated_at: None,
        project_id: None,
        assignee_id: None,
        items: Vec::new(),
    }
}

pub fn in_project(mut task: Task, project_id: &str) -> Task {
    task.project_id = Some(project_id.to_string());
    task
}

pub fn assigned_to(mut task: Task, user_id: &str) -> Task {
    task.assignee_id = Some(user_id.to_string());
    task.assigned_at = Some(task.created_at + Duration::days(1));
    task
}

pub fn completed_days_ago(id: &str, days: i64) -> Task {
    let mut task = task(id, TaskStatus::Completed);
    task.completed_at = Some(now() - Duration::days(days));
    task
}

/// 프로젝트 3개 (작업 0, 2, 5개), 사용자 2명
pub fn scenario_snapshot() -> EntitySnapshot {
    let mut tasks = vec![
        in_project(completed_days_ago("b1", 2), "p2"),
        in_project(task("b2", TaskStatus::InProgress), "p2"),
        in_project(completed_days_ago("c1", 3), "p3"),
        in_project(completed_days_ago("c2", 40), "p3"),
        in_project(task("c3", TaskStatus::InProgress), "p3"),
        in_project(task("c4", TaskStatus::Unassigned), "p3"),
        in_project(task("c5", TaskStatus::Unassigned), "p3"),
    ];
    for id in ["b1", "b2", "c1", "c3"] {
        if let Some(t) = tasks.iter_mut().find(|t| t.id == id) {
            t.assignee_id = Some("u1".to_string());
        }
    }

    let mut lead = user("u1", "Mina", "Park");
    lead.role_ids = vec!["admin".to_string()];

    let mut website = project("p2", "Website");
    website.member_ids = vec!["u1".to_string()];
    let mut acme = project("p3", "Acme, \"Phase 2\"");
    acme.member_ids = vec!["u1".to_string(), "u2".to_string()];

    EntitySnapshot {
        projects: vec![project("p1", "Empty"), website, acme],
        users: vec![lead, user("u2", "Alex", "Kim")],
        tasks,
        roles: vec![role("admin")],
    }
}
