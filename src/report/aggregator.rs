use chrono::{DateTime, Duration, Months, Utc};
use std::collections::BTreeMap;
use tracing::debug;
use crate::model::{EntitySnapshot, Task, TaskStatus};
use crate::report::index::SnapshotIndex;
use crate::report::types::{
    percentage, ratio, Aggregates, ProjectsSummary, TasksSummary, UsersSummary,
};

const WEEK_DAYS: i64 = 7;
const MONTH_FALLBACK_DAYS: i64 = 30;

/// 완료 시각 집계 구간. 양 끝을 모두 포함한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CompletionWindow {
    pub fn trailing_week(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(WEEK_DAYS),
            end: now,
        }
    }

    pub fn trailing_month(now: DateTime<Utc>) -> Self {
        let start = now
            .checked_sub_months(Months::new(1))
            .unwrap_or_else(|| now - Duration::days(MONTH_FALLBACK_DAYS));
        Self { start, end: now }
    }

    /// 완료 상태이고 완료 시각이 구간 안에 있을 때만 참
    pub fn contains(&self, task: &Task) -> bool {
        if task.status != TaskStatus::Completed {
            return false;
        }
        match task.completed_at {
            Some(at) => at >= self.start && at <= self.end,
            None => false,
        }
    }
}

/// 스냅샷 전체를 한 번 훑어 세 가지 요약을 계산한다.
pub fn aggregate(snapshot: &EntitySnapshot, now: DateTime<Utc>) -> Aggregates {
    aggregate_indexed(snapshot, &SnapshotIndex::new(snapshot), now)
}

/// 이미 만들어 둔 인덱스를 재사용하는 집계
pub(crate) fn aggregate_indexed(
    snapshot: &EntitySnapshot,
    index: &SnapshotIndex<'_>,
    now: DateTime<Utc>,
) -> Aggregates {
    let aggregates = Aggregates {
        projects: summarize_projects(snapshot, index),
        users: summarize_users(snapshot, index),
        tasks: summarize_tasks(snapshot, now),
    };

    debug!(
        projects = aggregates.projects.total_projects,
        users = aggregates.users.total_users,
        tasks = aggregates.tasks.total_tasks,
        "집계 완료"
    );

    aggregates
}

pub(crate) fn summarize_projects(
    snapshot: &EntitySnapshot,
    index: &SnapshotIndex<'_>,
) -> ProjectsSummary {
    let total_projects = snapshot.projects.len();
    let mut projects_with_tasks = 0;
    let mut total_tasks = 0;

    for project in &snapshot.projects {
        let count = index.tasks_of_project(&project.id).len();
        if count > 0 {
            projects_with_tasks += 1;
        }
        total_tasks += count;
    }

    ProjectsSummary {
        total_projects,
        projects_with_tasks,
        projects_without_tasks: total_projects - projects_with_tasks,
        total_tasks_across_projects: total_tasks,
        average_tasks_per_project: ratio(total_tasks, total_projects),
        oldest_project: snapshot.projects.iter().map(|p| p.created_at).min(),
        newest_project: snapshot.projects.iter().map(|p| p.created_at).max(),
    }
}

pub(crate) fn summarize_users(snapshot: &EntitySnapshot, index: &SnapshotIndex<'_>) -> UsersSummary {
    let total_users = snapshot.users.len();
    let mut users_with_tasks = 0;
    let mut total_assigned = 0;
    // 동률이면 입력 순서상 먼저 나온 사용자를 유지한다
    let mut most_active: Option<(String, usize)> = None;

    for user in &snapshot.users {
        let count = index.tasks_of_user(&user.id).len();
        if count > 0 {
            users_with_tasks += 1;
        }
        total_assigned += count;

        let replace = match &most_active {
            Some((_, best)) => count > *best,
            None => true,
        };
        if replace {
            most_active = Some((user.full_name(), count));
        }
    }

    let (most_active_user, most_active_user_task_count) = match most_active {
        Some((name, count)) => (Some(name), count),
        None => (None, 0),
    };

    UsersSummary {
        total_users,
        users_with_tasks,
        users_without_tasks: total_users - users_with_tasks,
        total_tasks_assigned: total_assigned,
        average_tasks_per_user: ratio(total_assigned, total_users),
        most_active_user,
        most_active_user_task_count,
    }
}

pub(crate) fn summarize_tasks(snapshot: &EntitySnapshot, now: DateTime<Utc>) -> TasksSummary {
    let week = CompletionWindow::trailing_week(now);
    let month = CompletionWindow::trailing_month(now);

    let mut summary = TasksSummary {
        total_tasks: snapshot.tasks.len(),
        unassigned_tasks: 0,
        in_progress_tasks: 0,
        completed_tasks: 0,
        deferred_tasks: 0,
        tasks_by_type: BTreeMap::new(),
        tasks_by_priority: BTreeMap::new(),
        oldest_task: snapshot.tasks.iter().map(|t| t.created_at).min(),
        newest_task: snapshot.tasks.iter().map(|t| t.created_at).max(),
        completed_this_week: 0,
        completed_this_month: 0,
        completion_rate: 0.0,
    };

    for task in &snapshot.tasks {
        match task.status {
            TaskStatus::Unassigned => summary.unassigned_tasks += 1,
            TaskStatus::InProgress => summary.in_progress_tasks += 1,
            TaskStatus::Completed => summary.completed_tasks += 1,
            TaskStatus::Deferred => summary.deferred_tasks += 1,
            // 알 수 없는 상태는 총계에만 포함
            TaskStatus::Other(_) => {}
        }

        *summary
            .tasks_by_type
            .entry(task.task_type.label().to_string())
            .or_insert(0) += 1;
        *summary
            .tasks_by_priority
            .entry(task.priority.label().to_string())
            .or_insert(0) += 1;

        if week.contains(task) {
            summary.completed_this_week += 1;
        }
        if month.contains(task) {
            summary.completed_this_month += 1;
        }
    }

    summary.completion_rate = percentage(summary.completed_tasks, summary.total_tasks);
    summary
}
