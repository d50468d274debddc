use anyhow::{Context, Result};
use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Utc};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use crate::config::Config;
use crate::renderer::{self, render_summary_table, DocumentConfig, ExportFormat, SummaryTable};
use crate::report::{Report, ReportBuilder};
use crate::store::JsonFileStore;

pub async fn handle_generate(
    input: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    now: Option<&str>,
    config: &Config,
) -> Result<()> {
    let format = match format {
        Some(name) => name.parse::<ExportFormat>().map_err(anyhow::Error::msg)?,
        None => config.output.default_format,
    };
    let now = parse_now(now)?;

    // 바이너리는 터미널에 쓰지 않는다
    let destination = match output {
        Some(path) => Some(path.to_path_buf()),
        None if format.is_binary() => Some(default_output_path(config, format, now)),
        None => None,
    };

    let spinner = spinner(&format!("{} 리포트 생성 중...", format));
    let (report, bytes) = generate_in_background(input.to_path_buf(), now, format, config.document.clone()).await?;
    spinner.finish_and_clear();

    match destination {
        Some(path) => {
            write_output(&path, &bytes)?;
            let size = Byte::from_u64(bytes.len() as u64).get_appropriate_unit(UnitType::Decimal);
            info!(path = %path.display(), bytes = bytes.len(), format = %format, "리포트 저장");
            println!(
                "{} {} ({:.1})",
                "저장 완료:".green(),
                path.display(),
                size
            );
            println!(
                "  프로젝트 {} | 사용자 {} | 작업 {}",
                report.projects_summary.total_projects.to_string().yellow(),
                report.users_summary.total_users.to_string().yellow(),
                report.tasks_summary.total_tasks.to_string().yellow(),
            );
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub async fn handle_summary(input: &Path, format: &str, now: Option<&str>) -> Result<()> {
    let now = parse_now(now)?;
    let input = input.to_path_buf();

    let report = tokio::task::spawn_blocking(move || ReportBuilder::generate(&JsonFileStore::new(input), now))
        .await
        .context("리포트 작업 실행 실패")??;

    match format {
        "table" => {
            println!("{}", "리포트 요약".bright_cyan().bold());
            println!("{}", render_summary_table(&report));
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&SummaryTable::from(&report))?);
        }
        "yaml" => {
            println!("{}", serde_yaml::to_string(&SummaryTable::from(&report))?);
        }
        _ => {
            anyhow::bail!("지원하지 않는 형식: {}", format);
        }
    }

    Ok(())
}

/// 생성과 렌더링은 동기 계산이라 블로킹 스레드에서 돌린다
async fn generate_in_background(
    input: PathBuf,
    now: DateTime<Utc>,
    format: ExportFormat,
    document: DocumentConfig,
) -> Result<(Report, Vec<u8>)> {
    tokio::task::spawn_blocking(move || -> Result<(Report, Vec<u8>)> {
        let store = JsonFileStore::new(&input);
        let report = ReportBuilder::generate(&store, now)
            .with_context(|| format!("입력 파일: {}", input.display()))?;
        let bytes = renderer::export(&report, format, &document)
            .with_context(|| format!("{} 내보내기 실패", format))?;
        Ok((report, bytes))
    })
    .await
    .context("리포트 작업 실행 실패")?
}

pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("기준 시각 형식 오류 (RFC 3339 필요): {raw}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn default_output_path(config: &Config, format: ExportFormat, now: DateTime<Utc>) -> PathBuf {
    config.output.directory.join(format!(
        "taskboard-report-{}.{}",
        now.format("%Y%m%d-%H%M%S"),
        format.extension()
    ))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("출력 디렉토리 생성 실패: {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("파일 저장 실패: {}", path.display()))
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
