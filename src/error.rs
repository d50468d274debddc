use std::path::PathBuf;
use thiserror::Error;

/// 엔티티 저장소 오류
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("스냅샷 파일을 읽을 수 없습니다: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("스냅샷 파일을 쓸 수 없습니다: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("스냅샷 JSON 형식 오류: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("스냅샷 직렬화 실패")]
    Serialize(#[from] serde_json::Error),
}

/// 리포트 생성 오류. 엔티티 조회 실패만이 유일한 실패 경로다.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("리포트 생성 실패")]
    Generation {
        #[from]
        source: StoreError,
    },
}

/// 내보내기 오류
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV 작성 실패")]
    Csv(#[from] csv::Error),

    #[error("CSV 버퍼 회수 실패: {0}")]
    CsvBuffer(String),

    #[error("출력이 UTF-8이 아닙니다")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("PDF 생성 실패: {0}")]
    Pdf(String),
}

/// 차트 렌더링 오류. 문서 생성을 중단하지 않고 경고로만 남는다.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartError {
    #[error("'{0}' 차트에 표시할 데이터가 없습니다")]
    NoData(String),

    #[error("'{0}' 차트 영역이 너무 작습니다")]
    AreaTooSmall(String),
}
