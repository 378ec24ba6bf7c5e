//! Excel 보고서 저장 (CLI 판)
//!
//! 통합 문서 생성은 공통 라이브러리의 excel_core가 맡는다.

use crate::error::{ReconError, Result};
use heritage_recon_common::export::excel_core::generate_report_buffer;
use heritage_recon_common::ReconciliationReport;
use std::path::Path;

pub fn generate_excel(report: &ReconciliationReport, output_path: &Path) -> Result<()> {
    let buffer = generate_report_buffer(report).map_err(ReconError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
