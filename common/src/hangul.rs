//! 한글 음절 추출 (2차 비교 키)

/// 한글 음절 범위 (가–힣)
const HANGUL_SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

pub fn is_hangul_syllable(c: char) -> bool {
    HANGUL_SYLLABLES.contains(&c)
}

/// 한글 음절만 순서대로 남긴다. 숫자·기호·한자·자모는 모두 버린다
pub fn extract_hangul(text: Option<&str>) -> String {
    text.map(|t| t.chars().filter(|&c| is_hangul_syllable(c)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hangul() {
        assert_eq!(extract_hangul(Some("경복궁慶福宮")), "경복궁");
        assert_eq!(extract_hangul(Some("석탑1기")), "석탑기");
        assert_eq!(extract_hangul(Some("Gyeongbokgung궁")), "궁");
        assert_eq!(extract_hangul(Some("ㄱㅏ")), "");
    }

    #[test]
    fn test_extract_hangul_null() {
        assert_eq!(extract_hangul(None), "");
        assert_eq!(extract_hangul(Some("")), "");
    }

    #[test]
    fn test_extract_hangul_idempotent_subsequence() {
        let input = "서울 (1) 문묘·성균관 明倫堂";
        let once = extract_hangul(Some(input));
        assert_eq!(once, "서울문묘성균관");
        assert_eq!(extract_hangul(Some(&once)), once);

        // 입력의 부분 수열인지 확인
        let mut source = input.chars();
        assert!(once.chars().all(|c| source.any(|s| s == c)));
    }

    #[test]
    fn test_boundaries() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('\u{D7A4}'));
        assert!(!is_hangul_syllable('\u{1100}'));
    }
}
