use std::collections::HashMap;
use crate::model::{EntitySnapshot, Project, Task, User};

/// 스냅샷 위에 만든 id 색인. 원본 엔티티는 빌려서 읽기만 한다.
pub(crate) struct SnapshotIndex<'a> {
    projects: HashMap<&'a str, &'a Project>,
    users: HashMap<&'a str, &'a User>,
    tasks_by_project: HashMap<&'a str, Vec<&'a Task>>,
    tasks_by_assignee: HashMap<&'a str, Vec<&'a Task>>,
}

impl<'a> SnapshotIndex<'a> {
    pub fn new(snapshot: &'a EntitySnapshot) -> Self {
        let mut projects = HashMap::with_capacity(snapshot.projects.len());
        for project in &snapshot.projects {
            // id가 중복되면 먼저 나온 엔티티를 쓴다
            projects.entry(project.id.as_str()).or_insert(project);
        }

        let mut users = HashMap::with_capacity(snapshot.users.len());
        for user in &snapshot.users {
            users.entry(user.id.as_str()).or_insert(user);
        }

        let mut tasks_by_project: HashMap<&str, Vec<&Task>> = HashMap::new();
        let mut tasks_by_assignee: HashMap<&str, Vec<&Task>> = HashMap::new();
        for task in &snapshot.tasks {
            if let Some(project_id) = task.project_id.as_deref() {
                tasks_by_project.entry(project_id).or_default().push(task);
            }
            if let Some(assignee_id) = task.assignee_id.as_deref() {
                tasks_by_assignee.entry(assignee_id).or_default().push(task);
            }
        }

        Self {
            projects,
            users,
            tasks_by_project,
            tasks_by_assignee,
        }
    }

    pub fn project(&self, id: &str) -> Option<&'a Project> {
        self.projects.get(id).copied()
    }

    pub fn user(&self, id: &str) -> Option<&'a User> {
        self.users.get(id).copied()
    }

    pub fn tasks_of_project(&self, project_id: &str) -> &[&'a Task] {
        self.tasks_by_project
            .get(project_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tasks_of_user(&self, user_id: &str) -> &[&'a Task] {
        self.tasks_by_assignee
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
