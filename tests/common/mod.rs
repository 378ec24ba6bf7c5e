//! 테스트용 xlsx 픽스처
#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// 시트 이름과 행(첫 행은 헤더)으로 xlsx 파일을 만든다
///
/// 정수로 읽히는 값은 숫자 셀로, 빈 문자열은 빈 셀로 쓴다.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<&str>>)]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("시트 이름 설정 실패");

        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let (r, c) = (r as u32, c as u16);
                match value.parse::<i64>() {
                    Ok(n) => worksheet.write_number(r, c, n as f64),
                    Err(_) => worksheet.write_string(r, c, *value),
                }
                .expect("셀 쓰기 실패");
            }
        }
    }

    workbook.save(path).expect("xlsx 저장 실패");
}

/// A 대장 (지정구분, 연번, 문화재명(한글))
pub fn registry_a_rows<'a>(rows: &[(&'a str, &'a str, &'a str)]) -> Vec<Vec<&'a str>> {
    let mut out = vec![vec!["지정구분", "연번", "문화재명(한글)"]];
    out.extend(rows.iter().map(|(category, seq, name)| vec![*category, *seq, *name]));
    out
}
