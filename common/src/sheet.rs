//! CSVシートの読み込み
//!
//! スプレッドシートのCSVエクスポートを行レコードと列ビューに変換する。

use crate::error::{Error, Result};
use std::collections::HashMap;

/// 1行分のレコード（列名 → 値）
pub type Row = HashMap<String, String>;

/// シート1枚分の読み込み結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetResult {
    /// ヘッダー行（取得失敗時は空）
    pub headers: Vec<String>,
    /// データ行（出現順）
    pub rows: Vec<Row>,
    /// 列名 → 空でない値のリスト（行の順序を保持）
    pub cols: HashMap<String, Vec<String>>,
}

impl SheetResult {
    /// 取得失敗時の空の結果
    pub fn empty() -> Self {
        Self::default()
    }

    /// ヘッダーのない（取得に失敗した）シートか
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// 列の空でない値を取得（列がなければNone）
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.cols.get(name).map(Vec::as_slice)
    }

    /// 必要な列がヘッダーにすべて含まれているか検証
    ///
    /// 空のシートは検証しない。
    pub fn require_columns(&self, sheet: &str, columns: &[&str]) -> Result<()> {
        if self.headers.is_empty() {
            return Ok(());
        }

        for column in columns {
            if !self.headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn {
                    sheet: sheet.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// CSVテキストをパース
///
/// 先頭行をヘッダーとして扱う。
/// - 先頭のUTF-8 BOMは取り除く
/// - フィールドが足りない行は空文字列で埋める、余分なフィールドは無視する
pub fn parse_csv(text: &str) -> Result<SheetResult> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut result = SheetResult {
        headers,
        ..Default::default()
    };

    for record in reader.records() {
        let record = record?;

        let mut row = Row::with_capacity(result.headers.len());
        for (idx, key) in result.headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or_default().to_string();

            if !value.is_empty() {
                result
                    .cols
                    .entry(key.clone())
                    .or_default()
                    .push(value.clone());
            }
            row.insert(key.clone(), value);
        }
        result.rows.push(row);
    }

    Ok(result)
}

/// 行から列の値を取得
///
/// 列がない場合は `MissingColumn` エラー。
pub fn field<'a>(row: &'a Row, sheet: &str, column: &str) -> Result<&'a str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingColumn {
            sheet: sheet.to_string(),
            column: column.to_string(),
        })
}
