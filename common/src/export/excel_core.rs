//! Excel 보고서 생성 (공통 라이브러리)
//!
//! 단계·방향별로 시트를 하나씩 만들고, 구조 경고는 마지막 시트에 모은다.

use crate::reconciler::{PassResult, ReconciliationReport};
use crate::report::{A_RECONCILED, B_RECONCILED, NOT_CHECKED};
use crate::types::EntityRecord;
use rust_xlsxwriter::*;

const A_HEADERS: [&str; 3] = ["지정구분", "연번", "원본문화재명"];
const B_HEADERS: [&str; 3] = ["시트명", "지정번호", "원본문화재명"];

/// 대사 결과를 xlsx 바이트열로 만든다
pub fn generate_report_buffer(report: &ReconciliationReport) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let note_format = Format::new()
        .set_italic()
        .set_font_color(Color::RGB(0x555555));

    for pass in &report.passes {
        let a_only: Vec<&EntityRecord> = pass.a_only().collect();
        let b_only: Vec<&EntityRecord> = pass.b_only().collect();

        let sheets = [
            (format!("{} A에만 있음", pass.pass), &A_HEADERS, a_only, A_RECONCILED),
            (format!("{} B에만 있음", pass.pass), &B_HEADERS, b_only, B_RECONCILED),
        ];

        for (name, headers, records, reconciled) in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&name)
                .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;

            for (col, width) in [(0u16, 20), (1, 12), (2, 40)] {
                worksheet
                    .set_column_width(col, width)
                    .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
            }

            for (col, header) in headers.iter().enumerate() {
                worksheet
                    .write_string_with_format(0, col as u16, *header, &header_format)
                    .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
            }

            if let Some(note) = empty_note(pass, records.is_empty(), reconciled) {
                worksheet
                    .write_string_with_format(1, 0, note, &note_format)
                    .map_err(|e| format!("셀 쓰기 오류: {}", e))?;
                continue;
            }

            for (i, record) in records.iter().enumerate() {
                let row = (i + 1) as u32;
                let values = [
                    record.label.as_str(),
                    record.sequence_id.as_deref().unwrap_or(""),
                    record.display_name(),
                ];
                for (col, value) in values.iter().enumerate() {
                    worksheet
                        .write_string(row, col as u16, *value)
                        .map_err(|e| format!("셀 쓰기 오류: {}", e))?;
                }
            }
        }
    }

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("구조 경고")
        .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;
    worksheet
        .set_column_width(0, 80)
        .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
    worksheet
        .write_string_with_format(0, 0, "경고", &header_format)
        .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
    for (i, warning) in report.warnings.iter().enumerate() {
        worksheet
            .write_string((i + 1) as u32, 0, warning.to_string())
            .map_err(|e| format!("셀 쓰기 오류: {}", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel 저장 오류: {}", e))
}

/// 표 대신 넣을 안내 문장
fn empty_note(pass: &PassResult, is_empty: bool, reconciled: &'static str) -> Option<&'static str> {
    if pass.pairs.is_empty() {
        Some(NOT_CHECKED)
    } else if is_empty {
        Some(reconciled)
    } else {
        None
    }
}
