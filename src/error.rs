use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogSyncError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] catalog_sync_common::Error),
}

pub type Result<T> = std::result::Result<T, CatalogSyncError>;
