mod layout;
mod chart;
mod pdf;

pub use layout::{layout_document, Bounds, Color, DocumentLayout, Element, Page, PageKind};
pub(crate) use layout::tallest_block_height;
pub use chart::{Bar, BarChart, ChartArea, RingChart};

use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::error::ExportError;
use crate::report::Report;

/// 문서 페이지 설정 (단위: pt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub project_row_height: f32,
    pub user_row_height: f32,
    pub task_row_height: f32,
    pub chart_top_n: usize,
}

impl DocumentConfig {
    /// 각 상세 행이 내용을 담기 위해 필요한 최소 높이
    pub const MIN_PROJECT_ROW_HEIGHT: f32 = 32.0;
    pub const MIN_USER_ROW_HEIGHT: f32 = 32.0;
    pub const MIN_TASK_ROW_HEIGHT: f32 = 44.0;

    pub fn usable_height(&self) -> f32 {
        self.page_height - self.margin * 2.0
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        // US Letter
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 60.0,
            project_row_height: 36.0,
            user_row_height: 36.0,
            task_row_height: 48.0,
            chart_top_n: 10,
        }
    }
}

/// 표지, 요약 3쪽(차트 포함), 상세 페이지로 이루어진 PDF를 만든다.
pub fn render_document(report: &Report, config: &DocumentConfig) -> Result<Vec<u8>, ExportError> {
    let layout = layout_document(report, config);
    debug!(
        pages = layout.pages.len(),
        warnings = layout.warnings.len(),
        "문서 배치 완료"
    );

    let title = format!(
        "Taskboard Report {}",
        report.generated_at.format("%Y-%m-%d")
    );
    pdf::write_pdf(&layout, &title)
}
