use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::error::StoreError;
use crate::model::EntitySnapshot;
use crate::store::EntityStore;

/// `projects`, `users`, `tasks`, `roles` 배열을 담은 JSON 파일 저장소
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, snapshot: &EntitySnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl EntityStore for JsonFileStore {
    fn snapshot(&self) -> Result<EntitySnapshot, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let snapshot: EntitySnapshot =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            projects = snapshot.projects.len(),
            users = snapshot.users.len(),
            tasks = snapshot.tasks.len(),
            "스냅샷 로드"
        );

        Ok(snapshot)
    }
}
