//! 분류 매핑 모듈
//!
//! A 대장의 지정구분과 B 대장의 시트 이름 사이의 대응표, 시트별 제외 규칙,
//! 컬럼명과 정규화 정책을 하나의 설정 값(`ReconciliationConfig`)으로 묶는다.

use crate::error::{Error, Result};
use crate::normalizer::Normalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 지정구분 ↔ 시트 대응 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// A 대장의 지정구분 값
    pub category: String,
    /// B 대장의 시트 이름
    pub partition: String,
}

impl CategoryMapping {
    pub fn new(category: impl Into<String>, partition: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            partition: partition.into(),
        }
    }
}

/// 시트별 제외 규칙
///
/// `column` 값이 `forbidden_value`와 같은 행은 비교 전에 제외된다.
/// 해당 컬럼이 시트에 없으면 규칙은 적용되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRule {
    pub partition: String,
    pub column: String,
    pub forbidden_value: String,
    /// 1차 비교에서 정규화 결과가 빈 문자열인 B 전용 항목을 버린다
    #[serde(default)]
    pub drop_empty_unmatched: bool,
}

/// A 대장 컬럼명
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryAColumns {
    pub category: String,
    pub sequence: String,
    pub name: String,
}

impl Default for RegistryAColumns {
    fn default() -> Self {
        Self {
            category: "지정구분".into(),
            sequence: "연번".into(),
            name: "문화재명(한글)".into(),
        }
    }
}

/// B 대장 컬럼명
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryBColumns {
    pub name: String,
    pub identifier: String,
}

impl Default for RegistryBColumns {
    fn default() -> Self {
        Self {
            name: "문화재명".into(),
            identifier: "지정번호".into(),
        }
    }
}

/// 정규화 정책
///
/// 영문 제거는 A 대장에만 적용하는 것이 기본값이다. 원본 자료의 관례를 따른 것으로,
/// 실제 데이터로 확인하기 전에는 바꾸지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationPolicy {
    pub strict_charset: bool,
    pub remove_latin_a: bool,
    pub remove_latin_b: bool,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            strict_charset: true,
            remove_latin_a: true,
            remove_latin_b: false,
        }
    }
}

impl NormalizationPolicy {
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.strict_charset)
    }
}

/// 대사(reconcile) 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    #[serde(default)]
    pub registry_a: RegistryAColumns,
    #[serde(default)]
    pub registry_b: RegistryBColumns,
    /// 매핑 순서가 곧 보고서 출력 순서
    pub mappings: Vec<CategoryMapping>,
    #[serde(default)]
    pub exclusion_rules: Vec<ExclusionRule>,
    #[serde(default)]
    pub normalization: NormalizationPolicy,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self::heritage_preset()
    }
}

impl ReconciliationConfig {
    /// 서울 문화재 대장 기본 설정
    pub fn heritage_preset() -> Self {
        Self {
            registry_a: RegistryAColumns::default(),
            registry_b: RegistryBColumns::default(),
            mappings: vec![
                CategoryMapping::new("국가지정문화재", "국가 지정문화재"),
                CategoryMapping::new("국가등록문화재", "국가 등록문화재"),
                CategoryMapping::new("시도지정문화재", "서울시 지정문화재"),
                CategoryMapping::new("시등록문화재", "서울시 등록문화재"),
            ],
            exclusion_rules: vec![
                ExclusionRule {
                    partition: "서울시 지정문화재".into(),
                    column: "문화유산".into(),
                    forbidden_value: "무형문화유산".into(),
                    drop_empty_unmatched: true,
                },
                ExclusionRule {
                    partition: "국가 지정문화재".into(),
                    column: "종목".into(),
                    forbidden_value: "국가무형유산".into(),
                    drop_empty_unmatched: false,
                },
            ],
            normalization: NormalizationPolicy::default(),
        }
    }

    /// JSON 파일에서 읽기
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 읽기
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 매핑표 (출력 순서대로)
    pub fn get_mapping(&self) -> &[CategoryMapping] {
        &self.mappings
    }

    pub fn get_exclusion_rule(&self, partition: &str) -> Option<&ExclusionRule> {
        self.exclusion_rules.iter().find(|r| r.partition == partition)
    }

    /// 매핑표가 일대일인지 검사
    ///
    /// 지정구분·시트 이름이 비었거나 중복되면 에러.
    /// 제외 규칙은 시트당 하나까지.
    pub fn validate(&self) -> Result<()> {
        if self.mappings.is_empty() {
            return Err(Error::EmptyMapping);
        }

        let mut categories = HashSet::new();
        let mut partitions = HashSet::new();
        for mapping in &self.mappings {
            if mapping.category.trim().is_empty() || mapping.partition.trim().is_empty() {
                return Err(Error::BlankMapping {
                    category: mapping.category.clone(),
                    partition: mapping.partition.clone(),
                });
            }
            if !categories.insert(mapping.category.as_str()) {
                return Err(Error::DuplicateCategory(mapping.category.clone()));
            }
            if !partitions.insert(mapping.partition.as_str()) {
                return Err(Error::DuplicatePartition(mapping.partition.clone()));
            }
        }

        let mut ruled = HashSet::new();
        for rule in &self.exclusion_rules {
            if !ruled.insert(rule.partition.as_str()) {
                return Err(Error::DuplicateExclusionRule(rule.partition.clone()));
            }
        }

        Ok(())
    }
}
