use anyhow::Result;
use colored::*;
use crate::config::{get_config_path, Config};

#[derive(clap::Subcommand)]
pub enum ConfigAction {
    /// 설정 보기
    Show,
    /// 설정 파일 경로
    Path,
    /// 기본 설정 파일 생성
    Init,
    /// 설정 초기화
    Reset,
}

pub fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", config.display());
        }
        ConfigAction::Path => {
            println!("{}", get_config_path()?.display());
        }
        ConfigAction::Init => {
            let path = get_config_path()?;
            if path.exists() {
                println!("{} {}", "설정 파일이 이미 있습니다:".yellow(), path.display());
            } else {
                Config::default().save()?;
                println!("{} {}", "설정 파일 생성:".green(), path.display());
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            println!("{}", "설정이 초기화되었습니다.".yellow());
        }
    }
    Ok(())
}
