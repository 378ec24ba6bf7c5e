//! 대사(reconcile) 모듈
//!
//! 매핑표 순서대로 (지정구분, 시트) 쌍마다 양쪽 대장을 걸러내고 정규화한 뒤
//! 집합 차이를 구한다. 1차는 정규화 이름, 2차는 한글 음절만으로 비교한다.
//!
//! ## 처리 흐름
//! 1. A 대장에서 지정구분이 일치하는 행 선택 (없으면 해당 쌍은 비교하지 않음)
//! 2. B 대장에서 시트 조회, 이름 컬럼 확인 (없으면 경고 후 건너뜀)
//! 3. 시트별 제외 규칙 적용
//! 4. 비교 키 계산 후 1차·2차 차집합 계산
//!
//! 구조 문제는 경고로 기록할 뿐 전체 실행을 중단하지 않는다.

use crate::error::Result;
use crate::mapping::{CategoryMapping, ReconciliationConfig};
use crate::normalizer::Normalizer;
use crate::types::{EntityRecord, PartitionedRegistry, Table};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// 비교 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pass {
    /// 1차: 정규화 이름
    Canonical,
    /// 2차: 한글 음절만
    HangulOnly,
}

impl Pass {
    pub const ALL: [Pass; 2] = [Pass::Canonical, Pass::HangulOnly];

    /// 이 단계의 비교 키 추출 함수
    pub fn key_fn(self) -> fn(&EntityRecord) -> &str {
        match self {
            Pass::Canonical => canonical_key,
            Pass::HangulOnly => hangul_key,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pass::Canonical => "1차 검증 (정규화 이름 비교)",
            Pass::HangulOnly => "2차 검증 (한글만 비교)",
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Canonical => write!(f, "1차"),
            Pass::HangulOnly => write!(f, "2차"),
        }
    }
}

fn canonical_key(record: &EntityRecord) -> &str {
    &record.canonical_name
}

fn hangul_key(record: &EntityRecord) -> &str {
    &record.hangul_name
}

/// 어느 대장인지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrySide {
    A,
    B,
}

impl std::fmt::Display for RegistrySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrySide::A => write!(f, "A"),
            RegistrySide::B => write!(f, "B"),
        }
    }
}

/// 비교를 건너뛴 이유
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReconWarning {
    /// B 대장에 매핑된 시트가 없음
    MissingPartition { category: String, partition: String },
    /// 필요한 컬럼이 없음. A 대장은 시트가 하나뿐이라 `sheet`가 없다
    MissingColumn {
        side: RegistrySide,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sheet: Option<String>,
        column: String,
    },
    /// A 대장에 해당 지정구분 행이 하나도 없음
    EmptyCategory { category: String, partition: String },
}

impl std::fmt::Display for ReconWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconWarning::MissingPartition { category, partition } => write!(
                f,
                "시트 '{}'가 B 파일에 없습니다 (지정구분 '{}' 비교 건너뜀)",
                partition, category
            ),
            ReconWarning::MissingColumn { side, sheet: Some(sheet), column } => write!(
                f,
                "{} 파일 '{}' 시트에 '{}' 컬럼이 없습니다",
                side, sheet, column
            ),
            ReconWarning::MissingColumn { side, sheet: None, column } => write!(
                f,
                "{} 파일에 '{}' 컬럼이 없습니다 (모든 비교 건너뜀)",
                side, column
            ),
            ReconWarning::EmptyCategory { category, partition } => write!(
                f,
                "A 파일에 지정구분 '{}' 항목이 없습니다 ('{}' 시트 비교 건너뜀, 이 시트의 B 항목은 대조되지 않았습니다)",
                category, partition
            ),
        }
    }
}

/// (지정구분, 시트) 한 쌍의 차이
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDiff {
    pub category: String,
    pub partition: String,
    /// A에는 있으나 B에는 없는 항목 (A 행 순서)
    pub a_only: Vec<EntityRecord>,
    /// B에는 있으나 A에는 없는 항목 (B 행 순서)
    pub b_only: Vec<EntityRecord>,
}

impl PairDiff {
    pub fn is_reconciled(&self) -> bool {
        self.a_only.is_empty() && self.b_only.is_empty()
    }
}

/// 한 단계의 결과. `pairs`에는 실제로 비교한 쌍만 매핑 순서대로 들어 있다
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassResult {
    pub pass: Pass,
    pub pairs: Vec<PairDiff>,
}

impl PassResult {
    pub fn a_only(&self) -> impl Iterator<Item = &EntityRecord> {
        self.pairs.iter().flat_map(|p| p.a_only.iter())
    }

    pub fn b_only(&self) -> impl Iterator<Item = &EntityRecord> {
        self.pairs.iter().flat_map(|p| p.b_only.iter())
    }

    pub fn is_reconciled(&self) -> bool {
        self.pairs.iter().all(PairDiff::is_reconciled)
    }
}

/// 대사 결과 전체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// 매핑표 항목 수
    pub mapping_count: usize,
    /// 1차, 2차 순서
    pub passes: Vec<PassResult>,
    pub warnings: Vec<ReconWarning>,
}

impl ReconciliationReport {
    pub fn pass(&self, pass: Pass) -> Option<&PassResult> {
        self.passes.iter().find(|p| p.pass == pass)
    }

    /// 실제로 비교한 쌍의 수
    pub fn checked_count(&self) -> usize {
        self.passes.first().map(|p| p.pairs.len()).unwrap_or(0)
    }
}

/// 비교 준비가 끝난 한 쌍
#[derive(Debug)]
struct PreparedPair<'c> {
    mapping: &'c CategoryMapping,
    a_records: Vec<EntityRecord>,
    b_records: Vec<EntityRecord>,
    drop_empty_unmatched: bool,
}

/// A 대장 컬럼 위치
#[derive(Debug, Clone, Copy)]
struct AColumns {
    category: usize,
    sequence: Option<usize>,
    name: usize,
}

/// 대사 실행기
#[derive(Debug, Clone)]
pub struct Reconciler {
    config: ReconciliationConfig,
    normalizer: Normalizer,
}

impl Reconciler {
    /// 설정을 검증하고 실행기를 만든다
    pub fn new(config: ReconciliationConfig) -> Result<Self> {
        config.validate()?;
        let normalizer = config.normalization.normalizer();
        Ok(Self { config, normalizer })
    }

    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// 두 대장을 대사한다
    ///
    /// # Arguments
    /// * `registry_a` - 단일 시트 A 대장
    /// * `registry_b` - 시트별 B 대장
    pub fn reconcile(
        &self,
        registry_a: &Table,
        registry_b: &PartitionedRegistry,
    ) -> ReconciliationReport {
        let mapping_count = self.config.mappings.len();

        let a_columns = match self.locate_a_columns(registry_a) {
            Ok(columns) => columns,
            Err(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
                return ReconciliationReport {
                    mapping_count,
                    passes: Pass::ALL
                        .iter()
                        .map(|&pass| PassResult { pass, pairs: Vec::new() })
                        .collect(),
                    warnings,
                };
            }
        };

        // 쌍끼리는 독립적이므로 병렬로 준비하고, collect로 매핑 순서를 유지한다
        let prepared: Vec<std::result::Result<PreparedPair, ReconWarning>> = self
            .config
            .mappings
            .par_iter()
            .map(|mapping| self.prepare_pair(mapping, registry_a, a_columns, registry_b))
            .collect();

        let mut ready = Vec::new();
        let mut warnings = Vec::new();
        for outcome in prepared {
            match outcome {
                Ok(pair) => ready.push(pair),
                Err(warning) => {
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        let passes = Pass::ALL
            .iter()
            .map(|&pass| PassResult {
                pass,
                pairs: ready.iter().map(|pair| diff_pair(pair, pass)).collect(),
            })
            .collect();

        ReconciliationReport {
            mapping_count,
            passes,
            warnings,
        }
    }

    fn locate_a_columns(&self, table: &Table) -> std::result::Result<AColumns, Vec<ReconWarning>> {
        let names = &self.config.registry_a;
        let missing = |column: &str| ReconWarning::MissingColumn {
            side: RegistrySide::A,
            sheet: None,
            column: column.to_string(),
        };

        let category = table.column_index(&names.category);
        let name = table.column_index(&names.name);
        match (category, name) {
            (Some(category), Some(name)) => Ok(AColumns {
                category,
                sequence: table.column_index(&names.sequence),
                name,
            }),
            (category, name) => {
                let mut warnings = Vec::new();
                if category.is_none() {
                    warnings.push(missing(&names.category));
                }
                if name.is_none() {
                    warnings.push(missing(&names.name));
                }
                Err(warnings)
            }
        }
    }

    fn prepare_pair<'c>(
        &'c self,
        mapping: &'c CategoryMapping,
        registry_a: &Table,
        a_columns: AColumns,
        registry_b: &PartitionedRegistry,
    ) -> std::result::Result<PreparedPair<'c>, ReconWarning> {
        let policy = &self.config.normalization;

        let a_records: Vec<EntityRecord> = registry_a
            .rows
            .iter()
            .filter(|row| cell(row, Some(a_columns.category)) == Some(mapping.category.as_str()))
            .map(|row| {
                EntityRecord::new(
                    mapping.category.as_str(),
                    cell(row, a_columns.sequence).map(str::to_string),
                    cell(row, Some(a_columns.name)).map(str::to_string),
                    &self.normalizer,
                    policy.remove_latin_a,
                )
            })
            .collect();

        if a_records.is_empty() {
            return Err(ReconWarning::EmptyCategory {
                category: mapping.category.clone(),
                partition: mapping.partition.clone(),
            });
        }

        let sheet = registry_b
            .partition(&mapping.partition)
            .ok_or_else(|| ReconWarning::MissingPartition {
                category: mapping.category.clone(),
                partition: mapping.partition.clone(),
            })?;

        let b_names = &self.config.registry_b;
        let name_col = sheet
            .column_index(&b_names.name)
            .ok_or_else(|| ReconWarning::MissingColumn {
                side: RegistrySide::B,
                sheet: Some(mapping.partition.clone()),
                column: b_names.name.clone(),
            })?;
        let identifier_col = sheet.column_index(&b_names.identifier);

        let rule = self.config.get_exclusion_rule(&mapping.partition);
        let exclusion = rule.and_then(|r| {
            sheet
                .column_index(&r.column)
                .map(|col| (col, r.forbidden_value.as_str()))
        });

        let mut excluded = 0usize;
        let b_records: Vec<EntityRecord> = sheet
            .rows
            .iter()
            .filter(|row| match exclusion {
                Some((col, forbidden)) if cell(row, Some(col)) == Some(forbidden) => {
                    excluded += 1;
                    false
                }
                _ => true,
            })
            .map(|row| {
                EntityRecord::new(
                    mapping.partition.as_str(),
                    cell(row, identifier_col).map(str::to_string),
                    cell(row, Some(name_col)).map(str::to_string),
                    &self.normalizer,
                    policy.remove_latin_b,
                )
            })
            .collect();

        debug!(
            "{} ↔ {}: A {}건, B {}건 (제외 {}건)",
            mapping.category,
            mapping.partition,
            a_records.len(),
            b_records.len(),
            excluded
        );

        Ok(PreparedPair {
            mapping,
            a_records,
            b_records,
            drop_empty_unmatched: rule.map(|r| r.drop_empty_unmatched).unwrap_or(false),
        })
    }
}

fn cell(row: &[Option<String>], col: Option<usize>) -> Option<&str> {
    col.and_then(|c| row.get(c)).and_then(|v| v.as_deref())
}

/// 한 쌍의 양방향 차집합
///
/// 1차·2차 모두 이 함수를 쓰고 비교 키 추출만 다르다.
/// 빈 키 B 전용 항목 제거는 1차에만 적용된다.
fn diff_pair(pair: &PreparedPair, pass: Pass) -> PairDiff {
    let key = pass.key_fn();
    let drop_empty = pair.drop_empty_unmatched && pass == Pass::Canonical;

    let keys_a: HashSet<&str> = pair.a_records.iter().map(key).collect();
    let keys_b: HashSet<&str> = pair.b_records.iter().map(key).collect();

    let a_only = pair
        .a_records
        .iter()
        .filter(|r| !keys_b.contains(key(r)))
        .cloned()
        .collect();

    let b_only = pair
        .b_records
        .iter()
        .filter(|r| !keys_a.contains(key(r)))
        .filter(|r| !(drop_empty && key(r).is_empty()))
        .cloned()
        .collect();

    PairDiff {
        category: pair.mapping.category.clone(),
        partition: pair.mapping.partition.clone(),
        a_only,
        b_only,
    }
}
