pub mod excel;

use crate::cli::ReportFormat;
use crate::error::Result;
use heritage_recon_common::{report, ReconciliationReport};
use std::path::{Path, PathBuf};

/// 보고서 머리말에 들어가는 입력 정보
#[derive(Debug, Clone)]
pub struct ReportSources {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
}

/// 머리말(생성 시각, 입력 파일)을 붙인 텍스트 보고서
pub fn render_text(report: &ReconciliationReport, sources: &ReportSources) -> String {
    let mut out = String::new();
    out.push_str("문화재 대장 대조 결과\n");
    out.push_str(&format!(
        "생성 시각: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("A 파일: {}\n", sources.file_a.display()));
    out.push_str(&format!("B 파일: {}\n\n", sources.file_b.display()));
    out.push_str(&report::format(report));
    out
}

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() {
        output.join(format!("result.{}", extension))
    } else {
        output.with_extension(extension)
    }
}

/// 보고서를 파일로 저장한다. UTF-8로 쓰므로 한글·한자가 그대로 보존된다
///
/// # Returns
/// 실제로 쓴 파일 경로 목록
pub fn export_report(
    report: &ReconciliationReport,
    format: &ReportFormat,
    output: &Path,
    sources: &ReportSources,
) -> Result<Vec<PathBuf>> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut written = Vec::new();

    for &extension in format.extensions() {
        let path = output_path_for_format(output, extension);
        match extension {
            "txt" => std::fs::write(&path, render_text(report, sources))?,
            "json" => std::fs::write(&path, serde_json::to_string_pretty(report)?)?,
            _ => excel::generate_excel(report, &path)?,
        }
        written.push(path);
    }

    Ok(written)
}
