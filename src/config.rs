use crate::error::{CatalogSyncError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SPREADSHEET_ID_ENV: &str = "CATALOG_SYNC_SPREADSHEET_ID";
pub const OUTPUT_ENV: &str = "CATALOG_SYNC_OUTPUT";

/// シートごとのgid（スプレッドシート内のタブ識別子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetGids {
    pub categories: u64,
    pub products: u64,
    pub addons: u64,
}

impl Default for SheetGids {
    fn default() -> Self {
        Self {
            categories: 512714440,
            products: 1610198502,
            addons: 1688740072,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spreadsheet_id: String,
    pub sheets: SheetGids,
    pub output_path: PathBuf,
    pub base_url: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: "14zzAWJNgDxZgXAm713sq3K8fhWDNJPZ49SGYssBQH00".into(),
            sheets: SheetGids::default(),
            output_path: PathBuf::from("items").join("products.json"),
            base_url: crate::fetcher::DEFAULT_BASE_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_overrides())
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogSyncError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("catalog-sync").join("config.json"))
    }

    fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(SPREADSHEET_ID_ENV).ok(),
            std::env::var(OUTPUT_ENV).ok().map(PathBuf::from),
        )
    }

    /// CLI引数・環境変数による上書き（空文字列は無視）
    pub fn with_overrides(mut self, spreadsheet_id: Option<String>, output: Option<PathBuf>) -> Self {
        if let Some(id) = spreadsheet_id.filter(|id| !id.trim().is_empty()) {
            self.spreadsheet_id = id;
        }
        if let Some(path) = output.filter(|p| !p.as_os_str().is_empty()) {
            self.output_path = path;
        }
        self
    }

    pub fn set_spreadsheet_id(&mut self, id: String) -> Result<()> {
        if id.trim().is_empty() {
            return Err(CatalogSyncError::Config("スプレッドシートIDが空です".into()));
        }
        self.spreadsheet_id = id;
        self.save()
    }

    pub fn set_output_path(&mut self, path: PathBuf) -> Result<()> {
        self.output_path = path;
        self.save()
    }
}
