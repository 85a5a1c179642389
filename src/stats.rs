//! 통계 및 유틸리티 모듈
//!
//! 현재 입력/출력/모드로부터 문자 수, 단어 수, 비트 길이, 바이트 수를 계산하고
//! 포맷팅을 담당합니다.

use colored::Colorize;
use serde::Serialize;

use crate::mode::Mode;
use crate::settings::Theme;

/// 변환 통계 구조체
///
/// 입력이 바뀔 때마다 새로 계산되며 저장되지 않습니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// 입력 문자 수
    pub char_count: usize,
    /// 입력 단어 수
    pub word_count: usize,
    /// 비트 길이
    pub binary_length: usize,
    /// 바이트 수 (비트 길이 / 8, 올림)
    pub byte_count: usize,
}

impl ConversionStats {
    /// 입력, 출력, 모드로부터 통계 계산
    ///
    /// # Examples
    /// ```
    /// use bintext::{ConversionStats, Mode};
    ///
    /// let output = bintext::converter::text_to_binary("Hello World");
    /// let stats = ConversionStats::compute("Hello World", &output, Mode::TextToBinary);
    /// assert_eq!(stats.word_count, 2);
    /// assert_eq!(stats.byte_count, 11);
    /// ```
    pub fn compute(input: &str, output: &str, mode: Mode) -> Self {
        let char_count = input.chars().count();
        let word_count = input.split_whitespace().count();

        let binary_length = match mode {
            Mode::TextToBinary => count_non_whitespace(output),
            Mode::BinaryToText => count_non_whitespace(input),
            // 리트 모드는 실제 비트 수가 아닌 근사값
            Mode::TextToLeet => char_count * 8,
        };

        Self {
            char_count,
            word_count,
            binary_length,
            byte_count: binary_length.div_ceil(8),
        }
    }

    /// 통계 요약 출력
    pub fn print_summary(&self, mode: Mode, theme: Theme) {
        println!("\n{}", theme.rule());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", theme.rule());

        println!("  {} 모드:         {}", "⚙️".bright_yellow(), theme.accent(&mode.to_string()));
        println!("  {} 문자 수:      {}", "🔤".bright_cyan(), self.char_count);
        println!("  {} 단어 수:      {}", "📝".bright_cyan(), self.word_count);
        println!(
            "  {} 비트 길이:    {}",
            "🧮".bright_magenta(),
            self.binary_length.to_string().green()
        );
        println!(
            "  {} 바이트 수:    {}",
            "📦".bright_magenta(),
            self.byte_count.to_string().green()
        );

        println!("{}", theme.rule());
    }
}

/// 공백을 제외한 문자 수
fn count_non_whitespace(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use bintext::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{text_to_binary, text_to_leet};

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_stats_text_to_binary() {
        let input = "Hello World";
        let stats = ConversionStats::compute(input, &text_to_binary(input), Mode::TextToBinary);

        assert_eq!(
            stats,
            ConversionStats {
                char_count: 11,
                word_count: 2,
                binary_length: 88,
                byte_count: 11,
            }
        );
    }

    #[test]
    fn test_stats_binary_to_text_rounds_up() {
        let stats = ConversionStats::compute("01000001 101", "A\u{5}", Mode::BinaryToText);

        assert_eq!(stats.char_count, 12);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.binary_length, 11);
        assert_eq!(stats.byte_count, 2);
    }

    #[test]
    fn test_stats_leet_approximation() {
        let input = "leet speak";
        let stats = ConversionStats::compute(input, &text_to_leet(input), Mode::TextToLeet);

        assert_eq!(stats.char_count, 10);
        assert_eq!(stats.binary_length, 80);
        assert_eq!(stats.byte_count, 10);
    }

    #[test]
    fn test_stats_blank_input() {
        let stats = ConversionStats::compute("   ", "", Mode::TextToBinary);

        assert_eq!(stats.char_count, 3);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.binary_length, 0);
        assert_eq!(stats.byte_count, 0);
    }
}
