//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 数値部分が取り出せない価格文字列
    #[error("Invalid price: {value:?}")]
    InvalidPrice { value: String },

    /// シートのヘッダーに必要な列がない（上流でシートが編集された場合など）
    #[error("Missing column {column:?} in sheet {sheet}")]
    MissingColumn { sheet: String, column: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
