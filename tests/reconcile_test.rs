//! 파일 읽기부터 보고서까지의 통합 테스트
//!
//! xlsx 픽스처를 만들어 로더 → 대조 → 텍스트 보고서 순으로 검증

mod common;

use common::{registry_a_rows, write_workbook};
use heritage_recon::error::ReconError;
use heritage_recon::loader;
use heritage_recon_common::report::{self, A_ONLY_HEADING, A_RECONCILED, B_RECONCILED};
use heritage_recon_common::{Pass, ReconWarning, ReconciliationConfig, Reconciler};
use tempfile::tempdir;

const NAME_COLUMN: Option<&str> = Some("문화재명(한글)");

/// 뒤쪽 공백만 다른 이름은 1차에서 일치
#[test]
fn test_trailing_space_is_reconciled() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("a.xlsx");
    let path_b = dir.path().join("b.xlsx");

    write_workbook(&path_a, &[("Sheet1", registry_a_rows(&[("국가지정문화재", "1", "숭례문")]))]);
    write_workbook(
        &path_b,
        &[("국가 지정문화재", vec![vec!["지정번호", "문화재명"], vec!["1", "숭례문 "]])],
    );

    let (a, b) = loader::load_registries(&path_a, &path_b, NAME_COLUMN).expect("읽기 실패");
    let result = Reconciler::new(ReconciliationConfig::default())
        .unwrap()
        .reconcile(&a, &b);

    let first = result.pass(Pass::Canonical).unwrap();
    assert_eq!(first.pairs.len(), 1);
    assert!(first.is_reconciled());

    let text = report::format(&result);
    assert!(text.contains(A_RECONCILED));
    assert!(text.contains(B_RECONCILED));
    assert!(!text.contains(A_ONLY_HEADING));
}

/// 서로 다른 이름은 1차·2차 모두 양쪽에 보고된다
#[test]
fn test_mismatch_reported_in_both_passes() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("a.xlsx");
    let path_b = dir.path().join("b.xlsx");

    write_workbook(&path_a, &[("Sheet1", registry_a_rows(&[("국가지정문화재", "1", "숭례문")]))]);
    write_workbook(
        &path_b,
        &[("국가 지정문화재", vec![vec!["지정번호", "문화재명"], vec!["1", "남대문"]])],
    );

    let (a, b) = loader::load_registries(&path_a, &path_b, NAME_COLUMN).unwrap();
    let result = Reconciler::new(ReconciliationConfig::default())
        .unwrap()
        .reconcile(&a, &b);

    for pass in Pass::ALL {
        let pass_result = result.pass(pass).unwrap();

        let a_only: Vec<_> = pass_result
            .a_only()
            .map(|r| (r.label.as_str(), r.sequence_id.as_deref(), r.display_name()))
            .collect();
        assert_eq!(a_only, vec![("국가지정문화재", Some("1"), "숭례문")]);

        let b_only: Vec<_> = pass_result
            .b_only()
            .map(|r| (r.label.as_str(), r.display_name()))
            .collect();
        assert_eq!(b_only, vec![("국가 지정문화재", "남대문")]);
    }
}

/// 네 가지 분류 전체, 제외 규칙, 한자 병기, 헤더 공백이 섞인 실전형 데이터
#[test]
fn test_full_heritage_workbooks() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("문화재정보A.xlsx");
    let path_b = dir.path().join("문화재정보B.xlsx");

    write_workbook(
        &path_a,
        &[(
            "Sheet1",
            registry_a_rows(&[
                ("국가지정문화재", "1", "서울 숭례문"),
                ("국가지정문화재", "2", "서울 흥인지문"),
                ("국가등록문화재", "3", "구 서울역사 (Old Seoul Station)"),
                ("시도지정문화재", "4", "독립문\n獨立門"),
                ("시도지정문화재", "5", "서울 문묘"),
                ("시등록문화재", "6", "딜쿠샤"),
            ]),
        )],
    );

    write_workbook(
        &path_b,
        &[
            (
                "국가 지정문화재",
                vec![
                    vec![" 지정번호 ", " 문화재명 ", "종목"],
                    vec!["1", "서울 숭례문", "국보"],
                    vec!["2", "서울 흥인지문", "보물"],
                    vec!["3", "종묘제례악", "국가무형유산"],
                ],
            ),
            (
                "국가 등록문화재",
                vec![vec!["지정번호", "문화재명"], vec!["1", "구 서울역사"]],
            ),
            (
                "서울시 지정문화재",
                vec![
                    vec!["지정번호", "문화재명", "문화유산"],
                    vec!["1", "독립문", "유형문화유산"],
                    vec!["2", "서울 문묘", "유형문화유산"],
                    vec!["3", "송파산대놀이", "무형문화유산"],
                    vec!["4", "-", "유형문화유산"],
                    vec!["5", "경교장", "유형문화유산"],
                ],
            ),
            (
                "서울시 등록문화재",
                vec![vec!["지정번호", "문화재명"], vec!["1", "딜쿠샤 (Dilkusha)"]],
            ),
        ],
    );

    let (a, b) = loader::load_registries(&path_a, &path_b, NAME_COLUMN).unwrap();
    assert_eq!(b.names().len(), 4);

    let result = Reconciler::new(ReconciliationConfig::default())
        .unwrap()
        .reconcile(&a, &b);

    assert!(result.warnings.is_empty(), "경고: {:?}", result.warnings);
    assert_eq!(result.checked_count(), 4);

    let first = result.pass(Pass::Canonical).unwrap();
    assert_eq!(first.a_only().count(), 0);
    // 무형문화유산·국가무형유산은 제외되고, "-"는 빈 키로 버려진다
    let b_only: Vec<_> = first.b_only().map(|r| r.display_name()).collect();
    assert_eq!(b_only, vec!["경교장"]);

    // 2차에서는 빈 키 항목이 다시 보인다
    let second = result.pass(Pass::HangulOnly).unwrap();
    let b_only: Vec<_> = second.b_only().map(|r| r.display_name()).collect();
    assert_eq!(b_only, vec!["-", "경교장"]);
}

/// B에 시트가 없으면 경고만 남기고 나머지는 계속 비교
#[test]
fn test_missing_sheet_is_not_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("a.xlsx");
    let path_b = dir.path().join("b.xlsx");

    write_workbook(
        &path_a,
        &[(
            "Sheet1",
            registry_a_rows(&[
                ("국가지정문화재", "1", "숭례문"),
                ("국가등록문화재", "2", "구 서울역사"),
            ]),
        )],
    );
    write_workbook(
        &path_b,
        &[("국가 지정문화재", vec![vec!["지정번호", "문화재명"], vec!["1", "숭례문"]])],
    );

    let (a, b) = loader::load_registries(&path_a, &path_b, NAME_COLUMN).unwrap();
    let result = Reconciler::new(ReconciliationConfig::default())
        .unwrap()
        .reconcile(&a, &b);

    assert_eq!(result.checked_count(), 1);
    assert!(result.warnings.contains(&ReconWarning::MissingPartition {
        category: "국가등록문화재".into(),
        partition: "국가 등록문화재".into(),
    }));

    let text = report::format(&result);
    assert!(text.contains("구조 경고"));
    assert!(text.contains("검증한 분류: 1/4"));
}

/// A 파일에 이름 컬럼이 없으면 읽기 단계에서 에러
#[test]
fn test_registry_a_without_name_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("a.xlsx");

    write_workbook(
        &path_a,
        &[("Sheet1", vec![vec!["지정구분", "연번", "명칭"], vec!["국가지정문화재", "1", "숭례문"]])],
    );

    let result = loader::load_registry_a(&path_a, NAME_COLUMN);
    assert!(matches!(result, Err(ReconError::MissingColumn { ref column, .. }) if column == "문화재명(한글)"));

    // 미리보기는 이름 컬럼 없이도 읽힌다
    let table = loader::load_registry_a(&path_a, None).unwrap();
    assert_eq!(table.columns, vec!["지정구분", "연번", "명칭"]);
}

/// 연번 숫자 셀은 소수점 없이 읽힌다
#[test]
fn test_sequence_numbers_read_as_integers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("a.xlsx");

    write_workbook(&path_a, &[("Sheet1", registry_a_rows(&[("국가지정문화재", "12", "숭례문")]))]);

    let table = loader::load_registry_a(&path_a, NAME_COLUMN).unwrap();
    assert_eq!(table.cell(0, 1), Some("12"));
}

/// 사용자 매핑으로 대조
#[test]
fn test_custom_mapping_from_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path_a = dir.path().join("a.xlsx");
    let path_b = dir.path().join("b.xlsx");

    write_workbook(
        &path_a,
        &[(
            "대장",
            vec![vec!["구분", "번호", "이름"], vec!["사적", "1", "풍납동 토성"]],
        )],
    );
    write_workbook(
        &path_b,
        &[("사적 목록", vec![vec!["명칭"], vec!["풍납동토성"]])],
    );

    let config = ReconciliationConfig::from_json(
        r#"{
            "registry_a": {"category": "구분", "sequence": "번호", "name": "이름"},
            "registry_b": {"name": "명칭", "identifier": "번호"},
            "mappings": [{"category": "사적", "partition": "사적 목록"}]
        }"#,
    )
    .unwrap();

    let (a, b) = loader::load_registries(&path_a, &path_b, Some("이름")).unwrap();
    let result = Reconciler::new(config).unwrap().reconcile(&a, &b);

    assert!(result.warnings.is_empty());
    assert!(result.passes.iter().all(|p| p.is_reconciled()));
    assert_eq!(result.checked_count(), 1);
}
