//! 설정 모듈
//!
//! 유일하게 저장되는 사용자 설정인 테마를 JSON 파일로 읽고 씁니다.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{BinTextError, Result};

/// 설정 파일 기본 이름
pub const SETTINGS_FILE_NAME: &str = ".bintext.json";

/// 출력 색상 테마
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 반대 테마
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 테마 아이콘
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// 강조 색상 적용
    pub fn accent(self, text: &str) -> ColoredString {
        match self {
            Theme::Light => text.blue().bold(),
            Theme::Dark => text.bright_cyan().bold(),
        }
    }

    /// 구분선
    pub fn rule(self) -> ColoredString {
        let line = "═".repeat(50);
        match self {
            Theme::Light => line.blue(),
            Theme::Dark => line.bright_blue(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// 저장되는 사용자 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

impl Settings {
    /// 기본 설정 파일 경로 (`$HOME/.bintext.json`, 없으면 현재 폴더)
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SETTINGS_FILE_NAME)
    }

    /// 설정 파일 읽기
    ///
    /// 파일이 없으면 기본 설정을 반환합니다.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| BinTextError::SettingsRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| BinTextError::SettingsRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 설정 파일 읽기 (실패 시 경고 후 기본 설정)
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                Self::default()
            }
        }
    }

    /// 설정 파일 저장
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BinTextError::SettingsWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        fs::write(path, json).map_err(|e| BinTextError::SettingsWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Saved theme '{}' to {}", self.theme, path.display());
        Ok(())
    }

    /// 테마를 전환하고 새 테마 반환
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_dir.path().join("none.json")).unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE_NAME);

        let settings = Settings { theme: Theme::Dark };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
        assert!(fs::read_to_string(&path).unwrap().contains("\"dark\""));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(BinTextError::SettingsRead { .. })
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_toggle_theme() {
        let mut settings = Settings::default();
        assert_eq!(settings.toggle_theme(), Theme::Dark);
        assert_eq!(settings.toggle_theme(), Theme::Light);
    }

    #[test]
    fn test_empty_object_uses_default_theme() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }
}
