//! 변환 모드 모듈
//!
//! 세 가지 변환 모드와 모드별 안내 문구, 저장 파일 라벨, 단계 표시 개수를 정의합니다.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 변환 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// 텍스트 → 이진수
    #[default]
    TextToBinary,
    /// 이진수 → 텍스트
    BinaryToText,
    /// 텍스트 → 리트 문자
    TextToLeet,
}

impl Mode {
    /// 모든 모드 목록
    pub const ALL: [Mode; 3] = [Mode::TextToBinary, Mode::BinaryToText, Mode::TextToLeet];

    /// 입력 안내 문구
    pub fn input_placeholder(self) -> &'static str {
        match self {
            Mode::TextToBinary => "Enter text to convert to binary...",
            Mode::BinaryToText => "Enter binary (0s and 1s) to convert to text...",
            Mode::TextToLeet => "Enter text to convert to leet speak...",
        }
    }

    /// 출력 안내 문구
    pub fn output_placeholder(self) -> &'static str {
        match self {
            Mode::TextToBinary => "Binary output will appear here...",
            Mode::BinaryToText => "Text output will appear here...",
            Mode::TextToLeet => "Leet speak output will appear here...",
        }
    }

    /// 저장 파일 이름에 들어가는 라벨
    pub fn file_label(self) -> &'static str {
        match self {
            Mode::TextToBinary => "binary",
            Mode::BinaryToText => "text",
            Mode::TextToLeet => "leet",
        }
    }

    /// 변환 단계 설명에 표시할 최대 단계 수
    pub fn step_limit(self) -> usize {
        match self {
            Mode::TextToBinary | Mode::BinaryToText => 3,
            Mode::TextToLeet => 5,
        }
    }

    /// CLI 이름(`text-to-binary` 등) 또는 파일 라벨(`binary` 등)로 모드 찾기
    pub fn from_name(name: &str) -> Option<Mode> {
        let name = name.trim();
        Mode::ALL.into_iter().find(|mode| {
            mode.to_string().eq_ignore_ascii_case(name) || mode.file_label().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::TextToBinary => write!(f, "text-to-binary"),
            Mode::BinaryToText => write!(f, "binary-to-text"),
            Mode::TextToLeet => write!(f, "text-to-leet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(Mode::default(), Mode::TextToBinary);
    }

    #[test]
    fn test_step_limits() {
        assert_eq!(Mode::TextToBinary.step_limit(), 3);
        assert_eq!(Mode::BinaryToText.step_limit(), 3);
        assert_eq!(Mode::TextToLeet.step_limit(), 5);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Mode::from_name("binary-to-text"), Some(Mode::BinaryToText));
        assert_eq!(Mode::from_name("LEET"), Some(Mode::TextToLeet));
        assert_eq!(Mode::from_name(" binary "), Some(Mode::TextToBinary));
        assert_eq!(Mode::from_name("hex"), None);
    }

    #[test]
    fn test_serde_names_match_display() {
        for mode in Mode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
    }
}
