//! 대장 미리보기
//!
//! 매핑표나 컬럼명을 정하기 전에 두 파일의 구조(컬럼, 앞쪽 몇 행)를 확인한다.

use heritage_recon_common::report::display_width;
use heritage_recon_common::{PartitionedRegistry, Table};

/// 표 하나의 컬럼과 앞쪽 `rows`행
pub fn preview_table(title: &str, table: &Table, rows: usize) -> String {
    let mut out = format!("--- {} ({}행) ---\n", title, table.len());

    let shown: Vec<Vec<String>> = table
        .rows
        .iter()
        .take(rows)
        .map(|row| {
            row.iter()
                .map(|c| c.as_deref().unwrap_or("NaN").replace('\n', "\\n"))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| display_width(c)).collect();
    for row in &shown {
        for (w, value) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(value));
        }
    }

    let render = |cells: &[String]| -> String {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(value, &w)| format!("{}{}", value, " ".repeat(w.saturating_sub(display_width(value)))))
            .collect();
        line.join(" | ").trim_end().to_string()
    };

    out.push_str(&render(table.columns.as_slice()));
    out.push('\n');
    for row in &shown {
        out.push_str(&render(row.as_slice()));
        out.push('\n');
    }

    out.push_str(&format!("컬럼: {:?}\n", table.columns));
    out
}

/// A·B 두 대장의 미리보기
pub fn preview_registries(a: &Table, b: &PartitionedRegistry, rows: usize) -> String {
    let mut out = String::from("파일 A 미리보기:\n");
    out.push_str(&preview_table("A", a, rows));

    out.push_str("\n파일 B 각 시트 미리보기:\n");
    for sheet in b.sheets() {
        out.push_str(&preview_table(&format!("시트: {}", sheet.name), &sheet.table, rows));
        out.push('\n');
    }
    out
}
