//! 문화재명 정규화 모듈
//!
//! 원본 문화재명을 비교용 키(canonical name)로 변환한다.
//!
//! ## 처리 순서 (순서 변경 금지)
//! 1. 유니코드 정규화 (NFKC)
//! 2. NBSP → 공백, 폭 없는 공백(U+200B) 제거
//! 3. 개행이 있으면 한자가 처음 나오는 줄부터 끝까지 버리고 나머지 줄을 이어 붙임
//! 4. 괄호 `(` `)` 와 큰따옴표 제거
//! 5. 모든 공백 제거
//! 6. (옵션) 영문 알파벳 제거
//! 7. (옵션) 숫자·한글 음절 이외의 문자 모두 제거
//!
//! 4~7단계에서 문자가 빠지면 조합 문자끼리 새로 인접할 수 있으므로
//! 마지막에 NFKC를 한 번 더 적용한다. 결과는 재적용해도 변하지 않는다.

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

lazy_static::lazy_static! {
    /// CJK 통합 한자 (U+4E00–U+9FFF)
    static ref CJK_RE: Regex = Regex::new(r"[\x{4E00}-\x{9FFF}]").unwrap();
    static ref PAREN_QUOTE_RE: Regex = Regex::new(r#"[()"]"#).unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref LATIN_RE: Regex = Regex::new(r"[A-Za-z]").unwrap();
    static ref STRICT_CHARSET_RE: Regex = Regex::new(r"[^0-9가-힣]").unwrap();
}

/// 정규화 정책
///
/// `strict_charset`은 호출 위치마다 바꾸지 않고 두 대장에 동일하게 적용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalizer {
    /// 숫자와 한글 음절(`[0-9가-힣]`)만 남긴다
    pub strict_charset: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { strict_charset: true }
    }
}

impl Normalizer {
    pub fn new(strict_charset: bool) -> Self {
        Self { strict_charset }
    }

    /// 원본 이름을 비교 키로 변환한다
    ///
    /// # Arguments
    /// * `raw` - 원본 문화재명 (빈 셀은 None)
    /// * `remove_latin` - 영문 알파벳 제거 여부
    ///
    /// # Returns
    /// 정규화된 비교 키. None·빈 문자열이면 빈 문자열
    pub fn normalize(&self, raw: Option<&str>, remove_latin: bool) -> String {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return String::new(),
        };

        let mut text: String = raw.nfkc().collect();
        text = text.replace('\u{00A0}', " ").replace('\u{200B}', "");

        if text.contains('\n') {
            text = drop_glossed_lines(&text);
        }

        text = PAREN_QUOTE_RE.replace_all(&text, "").into_owned();
        text = WHITESPACE_RE.replace_all(&text, "").into_owned();

        if remove_latin {
            text = LATIN_RE.replace_all(&text, "").into_owned();
        }

        if self.strict_charset {
            text = STRICT_CHARSET_RE.replace_all(&text, "").into_owned();
        }

        text.nfkc().collect()
    }
}

/// 한자 표기가 들어간 줄과 그 뒤의 줄을 모두 버린다
///
/// 원본 자료에서 한글 이름 다음 줄에 한자 병기가 붙는 경우가 있다.
/// 예: "독립문\n獨立門" → "독립문"
fn drop_glossed_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .take_while(|line| !CJK_RE.is_match(line))
        .collect()
}
