//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::export::download_path;
use crate::mode::Mode;
use crate::settings::{Settings, Theme};

/// 출력 파일 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum WriteMode {
    /// 기존 파일이 있으면 덮어쓰기
    #[default]
    Overwrite,
    /// 기존 파일에 추가
    Append,
    /// 기존 파일이 있으면 에러
    Error,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Overwrite => write!(f, "Overwrite"),
            WriteMode::Append => write!(f, "Append"),
            WriteMode::Error => write!(f, "Error"),
        }
    }
}

/// bintext CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "bintext",
    author = "YourName <your@email.com>",
    version,
    about = "BINTEXT - 텍스트 ↔ 이진수, 텍스트 → 리트 문자 변환 CLI 도구",
    long_about = r#"
BINTEXT CONVERTER
=================

텍스트를 8비트 이진수로, 이진수를 텍스트로,
텍스트를 리트 문자(1337)로 변환합니다.

특징:
  • 세 가지 변환 모드 (text-to-binary / binary-to-text / text-to-leet)
  • 문자 수, 단어 수, 비트 길이, 바이트 수 통계
  • 앞부분 변환 단계 설명
  • 대화형 모드 (한 줄 입력마다 즉시 변환)
  • 결과 파일 저장 및 JSON 리포트

예제:
  bintext "Hello"
  bintext -m binary-to-text "01001000 01101001"
  bintext -m text-to-leet "Leet speak" --steps
  echo "Hello" | bintext --json
  bintext -i note.txt --save-dir ./out
  bintext --interactive
"#
)]
pub struct Args {
    /// 변환할 텍스트 (없으면 --input 파일 또는 표준 입력)
    pub text: Option<String>,

    /// 변환할 텍스트 파일 경로
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// 변환 모드
    #[arg(short, long, value_enum, default_value_t = Mode::TextToBinary)]
    pub mode: Mode,

    /// 결과를 저장할 파일 경로
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 결과를 bintext_<모드>_<날짜>.txt 이름으로 저장할 폴더
    #[arg(long, conflicts_with = "output")]
    pub save_dir: Option<PathBuf>,

    /// 출력 파일 모드
    #[arg(short, long, value_enum, default_value_t = WriteMode::Overwrite)]
    pub write_mode: WriteMode,

    /// 변환 단계 설명 표시
    #[arg(long)]
    pub steps: bool,

    /// 통계 숨기기
    #[arg(long)]
    pub no_stats: bool,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,

    /// 대화형 모드 (한 줄 입력마다 변환)
    #[arg(long, conflicts_with_all = ["text", "input", "json"])]
    pub interactive: bool,

    /// 테마 설정 후 저장
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// 테마 전환 후 저장
    #[arg(long, conflicts_with = "theme")]
    pub toggle_theme: bool,

    /// 설정 파일 경로 (기본값: ~/.bintext.json)
    #[arg(long, env = "BINTEXT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// 진단 로그 출력 (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// 설정 파일 경로
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(Settings::default_path)
    }

    /// 결과 저장 경로 (저장하지 않으면 None)
    pub fn output_path(&self) -> Option<PathBuf> {
        match (&self.output, &self.save_dir) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(download_path(dir, self.mode)),
            (None, None) => None,
        }
    }

    /// 테마 변경 요청 여부
    pub fn changes_theme(&self) -> bool {
        self.theme.is_some() || self.toggle_theme
    }
}
