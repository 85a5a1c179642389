//! 변환 함수 모듈
//!
//! 텍스트 ↔ 이진수, 텍스트 → 리트 문자 변환과 이진수 입력 검사를 담당합니다.
//! 모든 함수는 입력 문자열만 보고 결과를 만드는 순수 함수입니다.

use crate::error::{BinTextError, Result};

/// 리트 문자 치환 표 (대소문자 모두 같은 숫자로 치환)
pub const LEET_TABLE: [(char, char); 10] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('l', '1'),
    ('g', '9'),
    ('b', '8'),
    ('z', '2'),
];

/// 문자 하나의 리트 치환 결과
///
/// 치환 표에 없는 문자는 `None`을 반환합니다.
pub fn leet_substitute(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let lower = c.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|&(_, to)| to)
}

/// 문자 하나를 8자리 이상 이진수 문자열로 변환
pub fn char_to_binary(c: char) -> String {
    format!("{:08b}", u32::from(c))
}

/// 텍스트를 공백으로 구분된 8비트 이진수로 변환
///
/// # Examples
/// ```
/// use bintext::converter::text_to_binary;
///
/// assert_eq!(text_to_binary("AB"), "01000001 01000010");
/// assert_eq!(text_to_binary(""), "");
/// ```
pub fn text_to_binary(text: &str) -> String {
    text.chars()
        .map(char_to_binary)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 공백으로 구분된 이진수를 텍스트로 변환
///
/// 각 청크는 앞쪽의 연속된 `0`/`1` 자리만 읽습니다. 읽을 자리가 없는 청크는
/// 결과에 아무것도 남기지 않습니다. 값이 유효한 문자가 아니면 에러입니다.
///
/// # Examples
/// ```
/// use bintext::converter::binary_to_text;
///
/// assert_eq!(binary_to_text("01000001 01000010").unwrap(), "AB");
/// assert_eq!(binary_to_text("").unwrap(), "");
/// ```
pub fn binary_to_text(binary: &str) -> Result<String> {
    let mut text = String::new();

    for chunk in binary_chunks(binary) {
        if let Some(c) = decode_chunk(chunk)? {
            text.push(c);
        }
    }

    Ok(text)
}

/// 텍스트를 리트 문자로 변환
///
/// # Examples
/// ```
/// use bintext::converter::text_to_leet;
///
/// assert_eq!(text_to_leet("Leet"), "1337");
/// ```
pub fn text_to_leet(text: &str) -> String {
    text.chars()
        .map(|c| leet_substitute(c).unwrap_or(c))
        .collect()
}

/// 이진수 입력 유효성 검사
///
/// 공백을 모두 제거한 뒤 `0`과 `1`만 남으면 유효합니다. 빈 입력도 유효합니다.
pub fn is_valid_binary(binary: &str) -> bool {
    binary
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| c == '0' || c == '1')
}

/// 이진수 입력을 공백 단위 청크로 분리
pub fn binary_chunks(binary: &str) -> impl Iterator<Item = &str> {
    binary.split_whitespace()
}

/// 청크 앞쪽의 이진수 자리를 숫자로 해석
///
/// 이진수 자리가 하나도 없으면 `None`을 반환합니다.
pub fn parse_chunk(chunk: &str) -> Result<Option<u32>> {
    let digits: Vec<u32> = chunk
        .chars()
        .map_while(|c| c.to_digit(2))
        .collect();

    if digits.is_empty() {
        return Ok(None);
    }

    let mut value: u32 = 0;
    for digit in digits {
        value = value
            .checked_mul(2)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| BinTextError::Conversion {
                reason: format!("binary chunk '{}' is too large", chunk),
            })?;
    }

    Ok(Some(value))
}

/// 청크 하나를 문자로 해석
pub fn decode_chunk(chunk: &str) -> Result<Option<char>> {
    match parse_chunk(chunk)? {
        Some(code) => char::from_u32(code)
            .map(Some)
            .ok_or_else(|| BinTextError::Conversion {
                reason: format!("code point {:#x} is not a valid character", code),
            }),
        None => Ok(None),
    }
}
