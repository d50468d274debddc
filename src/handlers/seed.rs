use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use std::path::Path;
use crate::store::{seed_if_empty, JsonFileStore, SeedOptions, SeedOutcome};

pub fn handle_seed(output: &Path, projects: usize, users: usize, tasks: usize, seed: u64) -> Result<()> {
    let store = JsonFileStore::new(output);
    let options = SeedOptions {
        projects,
        users,
        tasks,
        rng_seed: seed,
    };

    let outcome = seed_if_empty(&store, &options, Utc::now())
        .with_context(|| format!("샘플 데이터 생성 실패: {}", output.display()))?;

    match outcome {
        SeedOutcome::Seeded { projects, users, tasks } => {
            println!("{} {}", "샘플 데이터 생성:".green(), output.display());
            println!("  프로젝트 {projects} | 사용자 {users} | 작업 {tasks}");
        }
        SeedOutcome::AlreadyPopulated => {
            println!(
                "{} {}",
                "이미 데이터가 있어 건너뜁니다:".yellow(),
                output.display()
            );
        }
    }

    Ok(())
}
