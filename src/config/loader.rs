use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use crate::config::types::Config;

pub const OUTPUT_DIR_ENV: &str = "TASKBOARD_OUTPUT_DIR";
pub const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG";

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;
    let config = load_config_from(&config_path)?;
    Ok(apply_env_overrides(config))
}

/// 파일이 없으면 기본 설정을 쓴다
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        debug!(path = %config_path.display(), "설정 파일 로드 중");

        let content = fs::read_to_string(config_path)
            .context("설정 파일 읽기 실패")?;

        toml::from_str(&content)
            .context("설정 파일 파싱 실패")
    } else {
        debug!("기본 설정 사용 중");
        Ok(Config::default())
    }
}

pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
        config.output.directory = PathBuf::from(dir);
    }

    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        config.logging.level = level;
    }

    config
}

pub fn save_config(config: &Config) -> Result<()> {
    let config_path = get_config_path()?;
    save_config_to(config, &config_path)
}

pub fn save_config_to(config: &Config, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .context("설정 디렉토리 생성 실패")?;
    }

    let content = toml::to_string_pretty(config)
        .context("설정 직렬화 실패")?;

    fs::write(config_path, content)
        .context("설정 파일 저장 실패")?;

    info!(path = %config_path.display(), "설정 저장 완료");
    Ok(())
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("설정 디렉토리를 찾을 수 없습니다")?;

    Ok(config_dir.join("taskboard").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ExportFormat;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("none.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[document]\nmargin = 48.0\n\n[output]\ndefault_format = \"pdf\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.document.margin, 48.0);
        assert_eq!(config.document.page_width, 612.0);
        assert_eq!(config.output.default_format, ExportFormat::Pdf);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.document.chart_top_n = 5;

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "document = [").unwrap();
        assert!(load_config_from(&path).is_err());
    }
}
