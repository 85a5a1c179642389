//! 에러 타입 정의 모듈
//!
//! bintext에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// 이진수 입력 검증 실패 시 사용자에게 보여줄 메시지
pub const INVALID_BINARY_MESSAGE: &str = "Invalid binary input. Please use only 0s, 1s, and spaces.";

/// bintext에서 발생할 수 있는 에러 타입
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinTextError {
    /// 0, 1, 공백 이외의 문자가 포함된 이진수 입력
    #[error("{}", INVALID_BINARY_MESSAGE)]
    InvalidBinary,

    /// 변환 도중 발생한 그 밖의 실패
    #[error("Conversion error: {reason}")]
    Conversion { reason: String },

    /// 저장할 출력이 비어 있음
    #[error("Nothing to download!")]
    EmptyOutput,

    /// 출력 파일이 이미 존재 (Error 모드에서)
    #[error("출력 파일이 이미 존재합니다: {path}")]
    OutputExists { path: PathBuf },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// 입력 파일 읽기 실패
    #[error("입력 파일을 읽을 수 없습니다 ({path}): {reason}")]
    InputRead { path: PathBuf, reason: String },

    /// 설정 파일 읽기 실패
    #[error("설정 파일을 읽을 수 없습니다 ({path}): {reason}")]
    SettingsRead { path: PathBuf, reason: String },

    /// 설정 파일 쓰기 실패
    #[error("설정 파일을 저장할 수 없습니다 ({path}): {reason}")]
    SettingsWrite { path: PathBuf, reason: String },
}

/// bintext 결과 타입 별칭
pub type Result<T> = std::result::Result<T, BinTextError>;
