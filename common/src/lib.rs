//! Heritage Recon Common Library
//!
//! 문화재 대장 대사(reconcile) 코어. 파일 입출력 없이 이미 표 형태로 읽힌
//! 데이터만 다룬다.

pub mod types;
pub mod error;
pub mod normalizer;
pub mod hangul;
pub mod mapping;
pub mod reconciler;
pub mod report;
pub mod export;

pub use types::{EntityRecord, PartitionedRegistry, Sheet, Table};
pub use error::{Error, Result};
pub use normalizer::Normalizer;
pub use hangul::extract_hangul;
pub use mapping::{CategoryMapping, ExclusionRule, NormalizationPolicy, ReconciliationConfig};
pub use reconciler::{
    PairDiff, Pass, PassResult, ReconWarning, ReconciliationReport, Reconciler, RegistrySide,
};
