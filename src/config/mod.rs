mod types;
mod loader;
mod validators;

pub use types::*;
pub use loader::{
    load_config, load_config_from, save_config, save_config_to, get_config_path,
    apply_env_overrides, OUTPUT_DIR_ENV, LOG_LEVEL_ENV,
};
pub use validators::{validate_config, validate_document};

use anyhow::Result;
use colored::*;

impl Config {
    pub fn load() -> Result<Self> {
        let config = load_config()?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        save_config(self)
    }

    pub fn reset() -> Result<()> {
        let config_path = get_config_path()?;
        if config_path.exists() {
            std::fs::remove_file(&config_path)?;
        }
        Ok(())
    }

    pub fn display(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "현재 설정:".bright_cyan().bold()));
        output.push_str(&format!("{}\n", "=".repeat(50).dimmed()));

        let doc = &self.document;
        output.push_str("문서 설정:\n");
        output.push_str(&format!("  페이지: {} x {} pt\n", doc.page_width, doc.page_height));
        output.push_str(&format!("  여백: {} pt\n", doc.margin.to_string().yellow()));
        output.push_str(&format!(
            "  행 높이: 프로젝트 {} / 사용자 {} / 작업 {}\n",
            doc.project_row_height, doc.user_row_height, doc.task_row_height
        ));
        output.push_str(&format!("  차트 상위 N: {}\n", doc.chart_top_n.to_string().yellow()));

        output.push_str("\n출력 설정:\n");
        output.push_str(&format!("  디렉토리: {}\n", self.output.directory.display()));
        output.push_str(&format!("  기본 형식: {}\n", self.output.default_format.to_string().yellow()));

        output.push_str("\n로깅:\n");
        output.push_str(&format!("  레벨: {}\n", self.logging.level.yellow()));

        output
    }
}
