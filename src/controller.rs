//! 모드 컨트롤러 모듈
//!
//! 현재 모드와 입력/출력/에러 상태를 소유하고, 입력이나 모드가 바뀔 때마다
//! 변환 파이프라인을 다시 실행합니다.

use serde::Serialize;
use tracing::{debug, trace};

use crate::converter::{binary_to_text, is_valid_binary, text_to_binary, text_to_leet};
use crate::error::{BinTextError, Result};
use crate::mode::Mode;
use crate::stats::ConversionStats;
use crate::steps::{explain, StepTrace};

/// 현재 모드로 입력 하나를 변환
///
/// 이진수 → 텍스트 모드에서는 먼저 입력을 검사합니다.
pub fn convert(input: &str, mode: Mode) -> Result<String> {
    match mode {
        Mode::TextToBinary => Ok(text_to_binary(input)),
        Mode::BinaryToText => {
            if !is_valid_binary(input) {
                return Err(BinTextError::InvalidBinary);
            }
            binary_to_text(input)
        }
        Mode::TextToLeet => Ok(text_to_leet(input)),
    }
}

/// 화면에 보여줄 컨트롤러 상태 스냅샷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionView<'a> {
    pub mode: Mode,
    pub input: &'a str,
    pub output: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 리트 출력 전용 스타일 적용 여부
    pub leet: bool,
    pub stats: &'a ConversionStats,
    pub steps: &'a StepTrace,
}

/// 모드 컨트롤러
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
    input: String,
    output: String,
    error: Option<BinTextError>,
    leet: bool,
    stats: ConversionStats,
    steps: StepTrace,
}

impl ModeController {
    /// 기본 모드(텍스트 → 이진수)로 컨트롤러 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정한 모드로 컨트롤러 생성
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// 마지막 변환 에러
    pub fn error(&self) -> Option<&BinTextError> {
        self.error.as_ref()
    }

    /// 리트 출력 스타일 여부
    pub fn is_leet(&self) -> bool {
        self.leet
    }

    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    pub fn steps(&self) -> &StepTrace {
        &self.steps
    }

    /// 현재 모드의 입력 안내 문구
    pub fn input_placeholder(&self) -> &'static str {
        self.mode.input_placeholder()
    }

    /// 현재 모드의 출력 안내 문구
    pub fn output_placeholder(&self) -> &'static str {
        self.mode.output_placeholder()
    }

    /// 입력 변경 후 변환
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.run();
    }

    /// 모드 전환
    ///
    /// 출력을 비우고, 입력이 있으면 새 모드로 다시 변환합니다.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("Setting mode to: {}", mode);
        self.mode = mode;
        self.output.clear();
        self.leet = false;
        self.error = None;

        if self.input.trim().is_empty() {
            self.refresh();
        } else {
            self.run();
        }
    }

    /// 입력과 출력을 모두 비움
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.leet = false;
        self.error = None;
        self.refresh();
    }

    /// 현재 상태 스냅샷
    pub fn view(&self) -> ConversionView<'_> {
        ConversionView {
            mode: self.mode,
            input: &self.input,
            output: &self.output,
            error: self.error.as_ref().map(|e| e.to_string()),
            leet: self.leet,
            stats: &self.stats,
            steps: &self.steps,
        }
    }

    /// 변환 파이프라인 실행
    fn run(&mut self) {
        self.error = None;

        if self.input.trim().is_empty() {
            self.output.clear();
            self.leet = false;
            self.refresh();
            return;
        }

        match convert(&self.input, self.mode) {
            Ok(output) => {
                trace!("Converted {} chars in {} mode", self.input.len(), self.mode);
                self.output = output;
                self.leet = self.mode == Mode::TextToLeet;
                self.stats = ConversionStats::compute(&self.input, &self.output, self.mode);
                self.steps = explain(&self.input, self.mode);
            }
            Err(e) => {
                debug!("Conversion failed: {}", e);
                self.output.clear();
                self.error = Some(e);
                self.stats = ConversionStats::compute(&self.input, &self.output, self.mode);
                self.steps = StepTrace::placeholder();
            }
        }
    }

    /// 현재 입력/출력 기준으로 통계와 단계 설명만 갱신
    fn refresh(&mut self) {
        self.stats = ConversionStats::compute(&self.input, &self.output, self.mode);
        self.steps = explain(&self.input, self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_BINARY_MESSAGE;

    #[test]
    fn test_initial_state() {
        let controller = ModeController::new();
        assert_eq!(controller.mode(), Mode::TextToBinary);
        assert_eq!(controller.output(), "");
        assert!(controller.steps().is_placeholder());
        assert_eq!(controller.input_placeholder(), "Enter text to convert to binary...");
    }

    #[test]
    fn test_text_to_binary_pipeline() {
        let mut controller = ModeController::new();
        controller.set_input("Hi");

        assert_eq!(controller.output(), "01001000 01101001");
        assert!(controller.error().is_none());
        assert!(!controller.is_leet());
        assert_eq!(controller.stats().binary_length, 16);
        assert_eq!(controller.steps().steps().len(), 2);
    }

    #[test]
    fn test_blank_input_clears_output() {
        let mut controller = ModeController::with_mode(Mode::TextToLeet);
        controller.set_input("leet");
        assert!(controller.is_leet());

        controller.set_input("   ");
        assert_eq!(controller.output(), "");
        assert!(!controller.is_leet());
        assert!(controller.error().is_none());
        assert_eq!(controller.stats().word_count, 0);
        assert!(controller.steps().is_placeholder());
    }

    #[test]
    fn test_invalid_binary_sets_error() {
        let mut controller = ModeController::with_mode(Mode::BinaryToText);
        controller.set_input("0102");

        assert_eq!(controller.output(), "");
        assert_eq!(controller.error(), Some(&BinTextError::InvalidBinary));
        assert_eq!(
            controller.view().error.as_deref(),
            Some(INVALID_BINARY_MESSAGE)
        );
        assert!(controller.steps().is_placeholder());

        // 입력을 고치면 에러가 사라짐
        controller.set_input("01000001");
        assert_eq!(controller.output(), "A");
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_conversion_error_message() {
        let mut controller = ModeController::with_mode(Mode::BinaryToText);
        controller.set_input("1101100000000000");

        assert_eq!(controller.output(), "");
        let message = controller.view().error.unwrap();
        assert!(message.starts_with("Conversion error: "));
    }

    #[test]
    fn test_set_mode_reconverts() {
        let mut controller = ModeController::new();
        controller.set_input("Tesla");
        controller.set_mode(Mode::TextToLeet);

        assert_eq!(controller.output(), "73514");
        assert!(controller.is_leet());
        assert_eq!(controller.output_placeholder(), "Leet speak output will appear here...");
        assert_eq!(controller.stats().binary_length, 40);
    }

    #[test]
    fn test_set_mode_to_binary_with_text_input_errors() {
        let mut controller = ModeController::new();
        controller.set_input("hello");
        controller.set_mode(Mode::BinaryToText);

        assert_eq!(controller.output(), "");
        assert_eq!(controller.error(), Some(&BinTextError::InvalidBinary));
    }

    #[test]
    fn test_set_mode_blank_input() {
        let mut controller = ModeController::new();
        controller.set_mode(Mode::BinaryToText);

        assert_eq!(controller.mode(), Mode::BinaryToText);
        assert_eq!(*controller.stats(), ConversionStats::default());
        assert!(controller.steps().is_placeholder());
    }

    #[test]
    fn test_clear() {
        let mut controller = ModeController::with_mode(Mode::TextToLeet);
        controller.set_input("abc");
        controller.clear();

        assert_eq!(controller.input(), "");
        assert_eq!(controller.output(), "");
        assert!(!controller.is_leet());
        assert_eq!(controller.mode(), Mode::TextToLeet);
    }

    #[test]
    fn test_view_serializes() {
        let mut controller = ModeController::new();
        controller.set_input("A");

        let json = serde_json::to_value(controller.view()).unwrap();
        assert_eq!(json["mode"], "text-to-binary");
        assert_eq!(json["output"], "01000001");
        assert_eq!(json["stats"]["byte_count"], 1);
        assert_eq!(json["steps"]["kind"], "steps");
        assert!(json.get("error").is_none());
    }
}
