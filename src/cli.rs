use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use crate::handlers::config::ConfigAction;

#[derive(Parser)]
#[clap(name = "taskboard")]
#[clap(about = "프로젝트/작업 리포트 생성 및 내보내기 CLI", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// 로그 상세 출력 (RUST_LOG보다 우선하지 않음)
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 리포트 생성 및 내보내기
    Generate {
        /// 엔티티 스냅샷 JSON 파일
        #[clap(short, long, env = "TASKBOARD_INPUT")]
        input: PathBuf,

        /// 출력 형식 (text, csv, pdf). 생략하면 설정의 기본 형식
        #[clap(short, long)]
        format: Option<String>,

        /// 저장 경로. 생략하면 text/csv는 표준 출력, pdf는 출력 디렉토리
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// 기준 시각 (RFC 3339). 생략하면 현재 시각
        #[clap(long)]
        now: Option<String>,
    },

    /// 요약만 출력
    Summary {
        /// 엔티티 스냅샷 JSON 파일
        #[clap(short, long, env = "TASKBOARD_INPUT")]
        input: PathBuf,

        /// 출력 형식 (table, json, yaml)
        #[clap(short, long, default_value = "table")]
        format: String,

        /// 기준 시각 (RFC 3339)
        #[clap(long)]
        now: Option<String>,
    },

    /// 비어 있는 스냅샷 파일에 샘플 데이터 생성
    Seed {
        /// 스냅샷 JSON 파일
        #[clap(short, long)]
        output: PathBuf,

        #[clap(long, default_value = "5")]
        projects: usize,

        #[clap(long, default_value = "4")]
        users: usize,

        #[clap(long, default_value = "30")]
        tasks: usize,

        /// 난수 시드
        #[clap(long, default_value = "42")]
        seed: u64,
    },

    /// 설정 관리
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },

    /// 쉘 완성 스크립트 생성
    Completion {
        /// 대상 쉘
        #[clap(value_enum)]
        shell: Shell,
    },
}
