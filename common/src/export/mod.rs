//! 보고서 출력 코어 (CLI 쪽 싱크에서 사용)

#[cfg(feature = "excel")]
pub mod excel_core;
