//! 대장 파일 로더
//!
//! calamine으로 xlsx/xls/ods 파일을 읽어 `Table`로 바꾼다.
//! - A 대장: 첫 번째 시트 하나
//! - B 대장: 모든 시트 (시트 이름 = 파티션 이름)
//!
//! 첫 번째 비어 있지 않은 행을 헤더로 쓰고, 컬럼명의 앞뒤 공백은 제거한다.

pub mod preview;

use crate::error::{ReconError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use heritage_recon_common::{PartitionedRegistry, Table};
use std::path::Path;
use tracing::{debug, info};

/// A 대장 읽기
///
/// `name_column`을 주면 그 컬럼이 없을 때 에러로 처리한다.
pub fn load_registry_a(path: &Path, name_column: Option<&str>) -> Result<Table> {
    let mut workbook = open(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReconError::SheetNotFound(path.display().to_string()))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let table = range_to_table(&range);
    info!("A 대장 '{}' 시트: {}행", sheet_name, table.len());

    if let Some(column) = name_column {
        if !table.has_column(column) {
            return Err(ReconError::MissingColumn {
                file: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }

    Ok(table)
}

/// B 대장 읽기 (모든 시트)
pub fn load_registry_b(path: &Path) -> Result<PartitionedRegistry> {
    let mut workbook = open(path)?;
    let mut registry = PartitionedRegistry::new();

    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;
        let table = range_to_table(&range);
        debug!("B 대장 '{}' 시트: {}행, 컬럼 {:?}", sheet_name, table.len(), table.columns);
        registry.insert(sheet_name, table);
    }

    info!("B 대장 시트 {}개", registry.len());
    Ok(registry)
}

/// 두 대장을 동시에 읽는다
pub fn load_registries(
    path_a: &Path,
    path_b: &Path,
    name_column_a: Option<&str>,
) -> Result<(Table, PartitionedRegistry)> {
    let (a, b) = rayon::join(
        || load_registry_a(path_a, name_column_a),
        || load_registry_b(path_b),
    );
    Ok((a?, b?))
}

fn open(path: &Path) -> Result<calamine::Sheets<std::io::BufReader<std::fs::File>>> {
    if !path.exists() {
        return Err(ReconError::FileNotFound(path.display().to_string()));
    }
    Ok(open_workbook_auto(path)?)
}

/// 시트 범위를 Table로 변환
///
/// 완전히 빈 행은 건너뛴다. 이름이 빈 헤더는 `Unnamed: {열번호}`가 된다.
pub fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
        .filter(|row| row.iter().any(Option::is_some));

    let header = match rows.next() {
        Some(header) => header,
        None => return Table::default(),
    };

    let columns = header
        .into_iter()
        .enumerate()
        .map(|(i, name)| match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => format!("Unnamed: {}", i),
        });

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row);
    }
    table
}

/// 셀 값을 문자열로. 빈 셀·에러 셀은 None
///
/// 정수로 떨어지는 실수는 소수점 없이 쓴다 (연번 `1.0` → `1`).
pub fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(n) => Some(if n.fract() == 0.0 && n.abs() < 1e15 {
            format!("{}", *n as i64)
        } else {
            format!("{}", n)
        }),
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        other => Some(other.to_string()),
    }
}
