//! 대사 설정 에러
//!
//! 코어는 데이터 구조 문제를 경고로 처리하므로, 여기 있는 에러는 모두
//! 데이터를 읽기 전 설정 단계에서만 발생한다.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("설정 파일을 읽을 수 없습니다: {0}")]
    Io(#[from] std::io::Error),

    #[error("설정 JSON 형식 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("매핑 항목이 없습니다")]
    EmptyMapping,

    #[error("빈 매핑 항목: '{category}' → '{partition}'")]
    BlankMapping { category: String, partition: String },

    #[error("지정구분 '{0}'이(가) 두 번 이상 매핑되었습니다")]
    DuplicateCategory(String),

    #[error("시트 '{0}'이(가) 두 번 이상 매핑되었습니다")]
    DuplicatePartition(String),

    #[error("시트 '{0}'에 제외 규칙이 두 개 이상 있습니다")]
    DuplicateExclusionRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
