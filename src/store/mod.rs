mod json;
mod seed;

pub use json::JsonFileStore;
pub use seed::{seed_if_empty, sample_snapshot, SeedOptions, SeedOutcome};

use crate::error::StoreError;
use crate::model::EntitySnapshot;

/// 외부 엔티티 저장소. 리포트 엔진은 스냅샷을 읽기만 한다.
pub trait EntityStore {
    fn snapshot(&self) -> Result<EntitySnapshot, StoreError>;
}

/// 메모리에 올려둔 스냅샷을 그대로 돌려주는 저장소
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: EntitySnapshot,
}

impl MemoryStore {
    pub fn new(snapshot: EntitySnapshot) -> Self {
        Self { snapshot }
    }
}

impl EntityStore for MemoryStore {
    fn snapshot(&self) -> Result<EntitySnapshot, StoreError> {
        Ok(self.snapshot.clone())
    }
}
