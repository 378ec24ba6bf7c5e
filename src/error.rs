use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("엑셀 파일 읽기 오류: {0}")]
    Workbook(String),

    #[error("시트가 없습니다: {0}")]
    SheetNotFound(String),

    #[error("{file} 파일에 '{column}' 컬럼이 없습니다")]
    MissingColumn { file: String, column: String },

    #[error("Excel 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error("JSON 처리 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] heritage_recon_common::Error),
}

impl From<calamine::Error> for ReconError {
    fn from(e: calamine::Error) -> Self {
        ReconError::Workbook(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReconError>;
