use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;
use crate::config::types::Config;
use crate::renderer::document::tallest_block_height;
use crate::renderer::DocumentConfig;

pub fn validate_config(config: &Config) -> Result<()> {
    validate_document(&config.document)?;

    if EnvFilter::try_new(&config.logging.level).is_err() {
        return Err(anyhow!("logging.level 형식이 올바르지 않습니다: {}", config.logging.level));
    }

    Ok(())
}

pub fn validate_document(document: &DocumentConfig) -> Result<()> {
    if document.page_width <= 0.0 || document.page_height <= 0.0 {
        return Err(anyhow!("페이지 크기는 0보다 커야 합니다"));
    }

    if document.margin < 0.0 {
        return Err(anyhow!("margin은 음수일 수 없습니다"));
    }

    // 그릴 영역이 남아 있어야 한다
    if document.margin * 2.0 >= document.page_width || document.usable_height() <= 0.0 {
        return Err(anyhow!("margin이 너무 커서 그릴 영역이 없습니다"));
    }

    // 차트 같은 고정 높이 블록이 새 페이지에 통째로 들어가야 한다
    let tallest = tallest_block_height();
    if document.usable_height() < tallest {
        return Err(anyhow!(
            "페이지 높이가 너무 작습니다: 여백을 뺀 높이가 {tallest} 이상이어야 합니다"
        ));
    }

    let rows = [
        ("project_row_height", document.project_row_height, DocumentConfig::MIN_PROJECT_ROW_HEIGHT),
        ("user_row_height", document.user_row_height, DocumentConfig::MIN_USER_ROW_HEIGHT),
        ("task_row_height", document.task_row_height, DocumentConfig::MIN_TASK_ROW_HEIGHT),
    ];
    for (name, height, min) in rows {
        if height < min {
            return Err(anyhow!("{name}는 {min} 이상이어야 합니다"));
        }
        if height > document.usable_height() {
            return Err(anyhow!("{name}가 페이지 높이보다 큽니다"));
        }
    }

    if document.chart_top_n == 0 {
        return Err(anyhow!("chart_top_n은 0보다 커야 합니다"));
    }

    Ok(())
}
