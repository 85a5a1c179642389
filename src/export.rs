//! 출력 저장 모듈
//!
//! 변환 결과를 텍스트 파일로 저장하고, 저장 파일 이름
//! (`bintext_<모드>_<YYYY-MM-DD>.txt`)을 만듭니다.

use chrono::NaiveDate;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::WriteMode;
use crate::error::{BinTextError, Result};
use crate::mode::Mode;

/// 저장 파일 이름 생성
///
/// # Examples
/// ```
/// use bintext::export::download_file_name;
/// use bintext::Mode;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(download_file_name(Mode::TextToLeet, date), "bintext_leet_2024-03-05.txt");
/// ```
pub fn download_file_name(mode: Mode, date: NaiveDate) -> String {
    format!("bintext_{}_{}.txt", mode.file_label(), date.format("%Y-%m-%d"))
}

/// 오늘 날짜(UTC)로 저장 파일 경로 생성
pub fn download_path(dir: &Path, mode: Mode) -> PathBuf {
    let today = chrono::Utc::now().date_naive();
    dir.join(download_file_name(mode, today))
}

/// 출력 모드 확인
fn check_output_mode(path: &Path, mode: WriteMode) -> Result<()> {
    if mode == WriteMode::Error && path.exists() {
        return Err(BinTextError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// 출력 파일 열기
fn open_output_file(path: &Path, mode: WriteMode) -> std::io::Result<File> {
    match mode {
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
        _ => File::create(path),
    }
}

/// 변환 결과를 파일로 저장
///
/// # Arguments
/// * `output` - 저장할 변환 결과
/// * `path` - 저장 경로
/// * `mode` - 기존 파일 처리 방식
///
/// # Returns
/// 기록한 바이트 수
pub fn save_output(output: &str, path: &Path, mode: WriteMode) -> Result<u64> {
    if output.is_empty() {
        return Err(BinTextError::EmptyOutput);
    }

    check_output_mode(path, mode)?;

    let write_error = |e: std::io::Error| BinTextError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut file = open_output_file(path, mode).map_err(write_error)?;
    file.write_all(output.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    debug!("Wrote {} bytes to {} ({})", output.len(), path.display(), mode);
    Ok(output.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_download_file_name_per_mode() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(
            download_file_name(Mode::TextToBinary, date),
            "bintext_binary_2025-12-31.txt"
        );
        assert_eq!(
            download_file_name(Mode::BinaryToText, date),
            "bintext_text_2025-12-31.txt"
        );
    }

    #[test]
    fn test_download_path_in_dir() {
        let path = download_path(Path::new("out"), Mode::TextToLeet);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(path.starts_with("out"));
        assert!(name.starts_with("bintext_leet_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_save_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "old content").unwrap();

        let written = save_output("01000001", &path, WriteMode::Overwrite).unwrap();

        assert_eq!(written, 8);
        assert_eq!(fs::read_to_string(&path).unwrap(), "01000001");
    }

    #[test]
    fn test_save_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        save_output("AB", &path, WriteMode::Append).unwrap();
        save_output("CD", &path, WriteMode::Append).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ABCD");
    }

    #[test]
    fn test_save_error_mode_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "keep").unwrap();

        let result = save_output("new", &path, WriteMode::Error);

        assert!(matches!(result, Err(BinTextError::OutputExists { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    }

    #[test]
    fn test_save_empty_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        assert_eq!(
            save_output("", &path, WriteMode::Overwrite),
            Err(BinTextError::EmptyOutput)
        );
        assert!(!path.exists());
    }
}
