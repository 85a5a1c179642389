//! 변환 단계 설명 모듈
//!
//! 입력의 앞부분 몇 단위가 어떻게 변환되는지 사람이 읽을 수 있는 단계 목록으로 만듭니다.

use colored::Colorize;
use serde::Serialize;

use crate::converter::{binary_chunks, char_to_binary, leet_substitute, parse_chunk};
use crate::mode::Mode;
use crate::settings::Theme;

/// 입력이 비어 있을 때 보여줄 안내 문구
pub const STEPS_PLACEHOLDER: &str = "Enter text to see conversion steps...";

/// 변환 단계 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 단계 제목
    pub title: String,
    /// 단계 상세 (요약 항목에는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Step {
    fn new(title: String, detail: String) -> Self {
        Self {
            title,
            detail: Some(detail),
        }
    }

    fn summary(title: String) -> Self {
        Self {
            title,
            detail: None,
        }
    }
}

/// 단계 설명 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum StepTrace {
    /// 입력이 없을 때의 안내 문구
    Placeholder(String),
    /// 단계 목록
    Steps(Vec<Step>),
}

impl Default for StepTrace {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl StepTrace {
    /// 안내 문구 상태
    pub fn placeholder() -> Self {
        StepTrace::Placeholder(STEPS_PLACEHOLDER.to_string())
    }

    /// 단계 목록 (안내 문구 상태면 빈 슬라이스)
    pub fn steps(&self) -> &[Step] {
        match self {
            StepTrace::Placeholder(_) => &[],
            StepTrace::Steps(steps) => steps,
        }
    }

    /// 안내 문구 상태인지 확인
    pub fn is_placeholder(&self) -> bool {
        matches!(self, StepTrace::Placeholder(_))
    }

    /// 단계 설명 출력
    pub fn print(&self, theme: Theme) {
        println!("\n{}", " 🔎 변환 단계".bright_white().bold());
        match self {
            StepTrace::Placeholder(message) => println!("  {}", message.dimmed()),
            StepTrace::Steps(steps) => {
                for step in steps {
                    println!("  {} {}", "•".bright_cyan(), theme.accent(&step.title));
                    if let Some(ref detail) = step.detail {
                        println!("    {}", detail);
                    }
                }
            }
        }
    }
}

/// 입력과 모드로부터 단계 설명 생성
///
/// 모드별 최대 단계 수를 넘는 부분은 "... and N more" 요약 항목 하나로 표시합니다.
///
/// # Examples
/// ```
/// use bintext::{explain, Mode};
///
/// let trace = explain("Hello", Mode::TextToBinary);
/// assert_eq!(trace.steps().len(), 4);
/// assert_eq!(trace.steps()[3].title, "... and 2 more characters");
/// ```
pub fn explain(input: &str, mode: Mode) -> StepTrace {
    if input.trim().is_empty() {
        return StepTrace::placeholder();
    }

    let limit = mode.step_limit();
    let steps = match mode {
        Mode::TextToBinary => explain_units(input.chars(), limit, "characters", |index, c: char| {
            Step::new(
                format!("Step {}: '{}'", index, c),
                format!("ASCII: {} → Binary: {}", u32::from(c), char_to_binary(c)),
            )
        }),
        Mode::BinaryToText => explain_units(binary_chunks(input), limit, "chunks", |index, chunk: &str| {
            Step::new(
                format!("Step {}: {}", index, chunk),
                describe_chunk(chunk),
            )
        }),
        Mode::TextToLeet => explain_units(input.chars(), limit, "characters", |index, c: char| {
            let detail = match leet_substitute(c) {
                Some(leet) => format!("'{}' → '{}'", c, leet),
                None => format!("No mapping, keep as '{}'", c),
            };
            Step::new(format!("Step {}: '{}'", index, c), detail)
        }),
    };

    StepTrace::Steps(steps)
}

/// 앞쪽 `limit`개 단위를 설명하고 나머지는 요약 항목으로 묶음
fn explain_units<T, I, F>(units: I, limit: usize, unit_name: &str, describe: F) -> Vec<Step>
where
    I: Iterator<Item = T>,
    F: Fn(usize, T) -> Step,
{
    let mut steps = Vec::with_capacity(limit + 1);
    let mut remaining = 0usize;

    for (index, unit) in units.enumerate() {
        if index < limit {
            steps.push(describe(index + 1, unit));
        } else {
            remaining += 1;
        }
    }

    if remaining > 0 {
        steps.push(Step::summary(format!(
            "... and {} more {}",
            remaining, unit_name
        )));
    }

    steps
}

/// 이진수 청크의 십진값과 문자 설명
fn describe_chunk(chunk: &str) -> String {
    match parse_chunk(chunk) {
        Ok(Some(value)) => match char::from_u32(value) {
            Some(c) => format!("Binary → ASCII: {} → '{}'", value, c),
            None => format!("Binary → ASCII: {} → (no character)", value),
        },
        Ok(None) => "Binary → ASCII: not a binary number".to_string(),
        Err(e) => e.to_string(),
    }
}
