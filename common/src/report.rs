//! 대사 결과 텍스트 보고서
//!
//! 단계별로 "A에만 있는 항목", "B에만 있는 항목" 표를 만든다.
//! 차이가 없으면 표 대신 전부 일치한다는 문장을, 비교한 쌍이 하나도 없으면
//! 비교하지 않았다는 문장을 출력한다.

use crate::reconciler::{PassResult, ReconciliationReport};
use crate::types::EntityRecord;
use unicode_width::UnicodeWidthStr;

pub const A_ONLY_HEADING: &str = "A 파일에는 있으나 B 파일에는 없는 항목 (지정구분, 연번, 원본문화재명):";
pub const B_ONLY_HEADING: &str = "B 파일에는 있으나 A 파일에는 없는 항목 (시트명, 지정번호, 원본문화재명):";
pub const A_RECONCILED: &str = "A 파일의 모든 항목이 B 파일에 존재합니다.";
pub const B_RECONCILED: &str = "B 파일의 모든 항목이 A 파일에 존재합니다.";
pub const NOT_CHECKED: &str = "비교한 분류가 없습니다.";

const A_COLUMNS: [&str; 3] = ["지정구분", "연번", "원본문화재명"];
const B_COLUMNS: [&str; 3] = ["시트명", "지정번호", "원본문화재명"];

/// 보고서 전체를 문자열로 만든다
pub fn format(report: &ReconciliationReport) -> String {
    let mut out = String::new();

    for pass in &report.passes {
        format_pass(&mut out, pass, report.mapping_count);
        out.push('\n');
    }

    if !report.warnings.is_empty() {
        out.push_str("==== 구조 경고 ====\n");
        for warning in &report.warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }

    out
}

fn format_pass(out: &mut String, pass: &PassResult, mapping_count: usize) {
    out.push_str(&format!("==== {} ====\n", pass.pass.title()));
    out.push_str(&format!(
        "검증한 분류: {}/{}\n\n",
        pass.pairs.len(),
        mapping_count
    ));

    if pass.pairs.is_empty() {
        out.push_str(NOT_CHECKED);
        out.push('\n');
        return;
    }

    let a_only: Vec<&EntityRecord> = pass.a_only().collect();
    if a_only.is_empty() {
        out.push_str(A_RECONCILED);
        out.push('\n');
    } else {
        out.push_str(A_ONLY_HEADING);
        out.push('\n');
        out.push_str(&render_table(&A_COLUMNS, &a_only));
    }

    out.push('\n');

    let b_only: Vec<&EntityRecord> = pass.b_only().collect();
    if b_only.is_empty() {
        out.push_str(B_RECONCILED);
        out.push('\n');
    } else {
        out.push_str(B_ONLY_HEADING);
        out.push('\n');
        out.push_str(&render_table(&B_COLUMNS, &b_only));
    }
}

/// 번호 열이 붙은 정렬 표
fn render_table(headers: &[&str; 3], records: &[&EntityRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                i.to_string(),
                cell_text(&r.label),
                cell_text(r.sequence_id.as_deref().unwrap_or("-")),
                cell_text(r.display_name()),
            ]
        })
        .collect();

    let header = [String::new(), headers[0].to_string(), headers[1].to_string(), headers[2].to_string()];

    let mut widths = [0usize; 4];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (w, value) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(display_width(value));
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(value, &w)| pad(value, w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// 셀 안의 개행은 한 줄로 보이도록 이스케이프한다
fn cell_text(value: &str) -> String {
    value.replace('\r', "").replace('\n', "\\n")
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(value));
    format!("{}{}", value, " ".repeat(fill))
}

/// 터미널 표시 폭 (한글·한자·이모지는 2칸, 결합 문자는 0칸)
pub fn display_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}
