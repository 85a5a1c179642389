//! bintext - BINARY / LEET TEXT CONVERTER
//!
//! 텍스트를 8비트 이진수로, 이진수를 텍스트로, 텍스트를 리트 문자로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔢 **이진수 변환**: 문자마다 8자리 이진수, 공백으로 구분
//! - 🔤 **텍스트 복원**: 공백으로 구분된 이진수 청크를 문자로 복원
//! - 🕶️ **리트 문자**: `Leet` → `1337`
//! - 📊 **통계**: 문자 수, 단어 수, 비트 길이, 바이트 수
//! - 🔎 **변환 단계**: 앞부분 몇 글자의 변환 과정 설명
//! - 💬 **대화형 모드**: 한 줄 입력마다 즉시 변환, 모드 전환
//! - 💾 **저장**: `bintext_<모드>_<날짜>.txt` 파일로 저장
//! - 🎨 **테마**: 밝은/어두운 테마 설정 저장
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! bintext "Hello"
//!
//! # 이진수를 텍스트로
//! bintext -m binary-to-text "01001000 01101001"
//!
//! # 리트 문자와 변환 단계
//! bintext -m text-to-leet "Leet speak" --steps
//! ```

pub mod cli;
pub mod controller;
pub mod converter;
pub mod error;
pub mod export;
pub mod mode;
pub mod settings;
pub mod stats;
pub mod steps;

// Re-exports for convenient access
pub use cli::{Args, WriteMode};
pub use controller::{convert, ConversionView, ModeController};
pub use converter::{binary_to_text, is_valid_binary, text_to_binary, text_to_leet};
pub use error::{BinTextError, Result};
pub use mode::Mode;
pub use settings::{Settings, Theme};
pub use stats::{format_bytes, ConversionStats};
pub use steps::{explain, Step, StepTrace};
