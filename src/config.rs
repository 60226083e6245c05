use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::catalog::{Catalog, CatalogError};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" | "fr" | "en" | "ko"
    pub language: String,
    /// 기본 카탈로그 대신 읽을 TOML 파일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    /// 열 배치 출력 시 열마다 차단기 목록을 보여줄지 여부
    pub show_row_details: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            catalog_path: None,
            log_level: "info".to_string(),
            show_row_details: true,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(DEFAULT_CONFIG_PATH)
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 써 두고 돌려준다.
pub fn load_or_default_at(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if let Some(cfg) = load_existing(path)? {
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "기본 설정 파일을 생성했습니다");
        Ok(cfg)
    }
}

/// 파일이 있을 때만 읽는다. 없으면 `None`이며 아무것도 쓰지 않는다.
pub fn load_existing(path: impl AsRef<Path>) -> Result<Option<Config>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(DEFAULT_CONFIG_PATH)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정된 카탈로그 파일, 없으면 기본 카탈로그.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                info!(path = %path.display(), version = %catalog.version, "카탈로그 로드");
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}
