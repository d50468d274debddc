use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;
use crate::error::StoreError;
use crate::model::{
    EntitySnapshot, Project, Role, Task, TaskItem, TaskPriority, TaskStatus, TaskType, User,
};
use crate::store::{EntityStore, JsonFileStore};

const FIRST_NAMES: &[&str] = &["Mina", "Jisoo", "Alex", "Sam", "Hyun", "Dana", "Chris", "Yuna"];
const LAST_NAMES: &[&str] = &["Park", "Kim", "Lee", "Smith", "Choi", "Jung", "Brown", "Han"];
const PROJECT_NAMES: &[&str] = &[
    "Website Redesign", "Mobile App", "Billing Migration", "Data Warehouse",
    "Onboarding Flow", "Search Revamp", "Internal Tools", "Security Audit",
];
const TASK_VERBS: &[&str] = &["Design", "Implement", "Review", "Test", "Document", "Refactor"];
const TASK_NOUNS: &[&str] = &["login", "dashboard", "export", "API", "schema", "settings"];

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub projects: usize,
    pub users: usize,
    pub tasks: usize,
    pub rng_seed: u64,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            projects: 5,
            users: 4,
            tasks: 30,
            rng_seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { projects: usize, users: usize, tasks: usize },
    /// 저장소에 이미 데이터가 있어서 건너뜀
    AlreadyPopulated,
}

/// 저장소가 비어 있을 때만 샘플 데이터를 기록한다.
pub fn seed_if_empty(
    store: &JsonFileStore,
    options: &SeedOptions,
    now: DateTime<Utc>,
) -> Result<SeedOutcome, StoreError> {
    if store.exists() && !store.snapshot()?.is_empty() {
        info!(path = %store.path().display(), "저장소에 데이터가 있어 시드를 건너뜀");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let snapshot = sample_snapshot(options, now);
    store.save(&snapshot)?;
    info!(
        path = %store.path().display(),
        projects = snapshot.projects.len(),
        users = snapshot.users.len(),
        tasks = snapshot.tasks.len(),
        "샘플 데이터 생성"
    );

    Ok(SeedOutcome::Seeded {
        projects: snapshot.projects.len(),
        users: snapshot.users.len(),
        tasks: snapshot.tasks.len(),
    })
}

/// 같은 옵션과 기준 시각이면 항상 같은 스냅샷을 만든다.
pub fn sample_snapshot(options: &SeedOptions, now: DateTime<Utc>) -> EntitySnapshot {
    let mut rng = StdRng::seed_from_u64(options.rng_seed);

    let roles = vec![
        Role {
            id: "Admin".to_string(),
            permissions: vec!["read".into(), "write".into(), "delete".into(), "manage_users".into()],
        },
        Role {
            id: "Developer".to_string(),
            permissions: vec!["read".into(), "write".into()],
        },
        Role {
            id: "Viewer".to_string(),
            permissions: vec!["read".into()],
        },
    ];

    let users: Vec<User> = (0..options.users)
        .map(|i| {
            let role = &roles[i % roles.len()];
            User {
                id: format!("user-{}", i + 1),
                first_name: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
                last_name: LAST_NAMES[(i * 3 + 1) % LAST_NAMES.len()].to_string(),
                role_ids: vec![role.id.clone()],
                created_at: now - Duration::days(rng.gen_range(60..365)),
                updated_at: None,
            }
        })
        .collect();

    let projects: Vec<Project> = (0..options.projects)
        .map(|i| {
            let member_count = if users.is_empty() { 0 } else { rng.gen_range(1..=users.len()) };
            let member_ids = users
                .choose_multiple(&mut rng, member_count)
                .map(|u| u.id.clone())
                .collect();
            let base = PROJECT_NAMES[i % PROJECT_NAMES.len()];
            let title = if i < PROJECT_NAMES.len() {
                base.to_string()
            } else {
                format!("{} {}", base, i / PROJECT_NAMES.len() + 1)
            };
            Project {
                id: format!("project-{}", i + 1),
                title,
                description: format!("Sample project #{}", i + 1),
                created_at: now - Duration::days(rng.gen_range(30..180)),
                updated_at: None,
                member_ids,
            }
        })
        .collect();

    let statuses = [
        TaskStatus::Unassigned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Deferred,
    ];
    let priorities = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Enhancement,
    ];
    let types = [TaskType::Feature, TaskType::Bug, TaskType::Chore, TaskType::Research];

    let tasks = (0..options.tasks)
        .map(|i| {
            let status = statuses[rng.gen_range(0..statuses.len())].clone();
            let created_at = now - Duration::days(rng.gen_range(1..90));
            let assignee_id = match status {
                TaskStatus::Unassigned => None,
                _ => users.choose(&mut rng).map(|u| u.id.clone()),
            };
            // created_at은 최소 하루 전이라 배정 시각이 now를 넘지 않는다
            let assigned_at = assignee_id
                .as_ref()
                .map(|_| created_at + Duration::hours(rng.gen_range(1..24)));
            let completed_at = match status {
                TaskStatus::Completed => {
                    let start = assigned_at.unwrap_or(created_at);
                    let span_hours = (now - start).num_hours().max(0);
                    Some(start + Duration::hours(rng.gen_range(0..=span_hours)))
                }
                _ => None,
            };
            let item_count = rng.gen_range(0..4);
            let items = (0..item_count)
                .map(|n| TaskItem {
                    id: format!("task-{}-item-{}", i + 1, n + 1),
                    title: format!("Checklist step {}", n + 1),
                    completed: status == TaskStatus::Completed || rng.gen_bool(0.3),
                })
                .collect();

            Task {
                id: format!("task-{}", i + 1),
                name: format!(
                    "{} {}",
                    TASK_VERBS[rng.gen_range(0..TASK_VERBS.len())],
                    TASK_NOUNS[rng.gen_range(0..TASK_NOUNS.len())]
                ),
                task_type: types[rng.gen_range(0..types.len())].clone(),
                status,
                priority: priorities[rng.gen_range(0..priorities.len())].clone(),
                comment: String::new(),
                created_at,
                assigned_at,
                completed_at,
                updated_at: None,
                // 일부 작업은 프로젝트 없이 남겨둔다
                project_id: if rng.gen_bool(0.9) {
                    projects.choose(&mut rng).map(|p| p.id.clone())
                } else {
                    None
                },
                assignee_id,
                items,
            }
        })
        .collect();

    EntitySnapshot {
        projects,
        users,
        tasks,
        roles,
    }
}
