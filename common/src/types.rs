//! 대장 데이터 타입 정의
//!
//! CLI 로더와 대사(reconcile) 코어가 공유하는 타입:
//! - Table: 시트 하나 분량의 표 데이터 (헤더 + 행)
//! - PartitionedRegistry: 시트 이름별 Table 모음 (B 대장)
//! - EntityRecord: 비교 대상 한 건 (원본 이름 + 파생 비교 키)

use crate::hangul::extract_hangul;
use crate::normalizer::Normalizer;
use serde::{Deserialize, Serialize};

/// 시트 하나 분량의 표 데이터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// 헤더 (앞뒤 공백 제거된 컬럼명)
    pub columns: Vec<String>,
    /// 행 데이터. 빈 셀은 None
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(|c| c.into().trim().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// 행 추가. 컬럼 수에 맞춰 부족분은 None으로 채우고 초과분은 버린다
    pub fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 이름이 붙은 시트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

/// 시트(파티션) 단위로 나뉜 대장 (B 대장)
///
/// 시트 순서는 파일에 나타난 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionedRegistry {
    sheets: Vec<Sheet>,
}

impl PartitionedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 시트 추가. 같은 이름이 이미 있으면 교체한다
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        let name = name.into();
        match self.sheets.iter_mut().find(|s| s.name == name) {
            Some(sheet) => sheet.table = table,
            None => self.sheets.push(Sheet { name, table }),
        }
    }

    pub fn partition(&self, name: &str) -> Option<&Table> {
        self.sheets.iter().find(|s| s.name == name).map(|s| &s.table)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// 비교 대상 레코드
///
/// `raw_name`은 보고서 출력용으로 그대로 보존되고,
/// `canonical_name`(1차 키)과 `hangul_name`(2차 키)은 생성 시 한 번 계산된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// A 대장: 지정구분 / B 대장: 시트명
    pub label: String,
    /// A 대장: 연번 / B 대장: 지정번호
    pub sequence_id: Option<String>,
    /// 원본 문화재명 (빈 셀이면 None)
    pub raw_name: Option<String>,
    pub canonical_name: String,
    pub hangul_name: String,
}

impl EntityRecord {
    pub fn new(
        label: impl Into<String>,
        sequence_id: Option<String>,
        raw_name: Option<String>,
        normalizer: &Normalizer,
        remove_latin: bool,
    ) -> Self {
        let canonical_name = normalizer.normalize(raw_name.as_deref(), remove_latin);
        let hangul_name = extract_hangul(Some(&canonical_name));
        Self {
            label: label.into(),
            sequence_id,
            raw_name,
            canonical_name,
            hangul_name,
        }
    }

    /// 보고서용 원본 이름 (없으면 빈 문자열)
    pub fn display_name(&self) -> &str {
        self.raw_name.as_deref().unwrap_or("")
    }
}
