//! シート取得モジュール
//!
//! スプレッドシートのgvizエンドポイントからタブ1枚をCSVで取得する。
//! ステータスが200以外の場合は空のシートを返して処理を継続する。

use crate::config::Config;
use crate::error::Result;
use catalog_sync_common::{parse_csv, SheetResult};
use reqwest::StatusCode;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://docs.google.com";

pub struct SheetFetcher {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
}

impl SheetFetcher {
    pub fn new(spreadsheet_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, spreadsheet_id, None)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(
            &config.base_url,
            &config.spreadsheet_id,
            config.timeout_seconds.map(Duration::from_secs),
        )
    }

    /// gvizエクスポートのURL（クエリ抜き）
    pub fn endpoint(&self) -> String {
        format!("{}/spreadsheets/d/{}/gviz/tq", self.base_url, self.spreadsheet_id)
    }

    /// タブ1枚を取得してパース
    ///
    /// - 200: 本文をCSVとしてパース
    /// - それ以外: 空のシート（エラーにしない）
    /// - 通信自体の失敗: エラー
    pub async fn fetch_sheet(&self, name: &str, gid: u64) -> Result<SheetResult> {
        let url = self.endpoint();
        tracing::debug!(sheet = name, gid, %url, "fetching sheet");

        let response = self
            .client
            .get(&url)
            .query(&[("gid", gid.to_string()), ("tqx", "out:csv".to_string())])
            .send()
            .await?;

        let status = response.status();
        println!("    {}: HTTP {}", name, status.as_u16());

        if status != StatusCode::OK {
            tracing::warn!(sheet = name, gid, status = status.as_u16(), "sheet unavailable, continuing with empty sheet");
            return Ok(SheetResult::empty());
        }

        let body = response.text().await?;
        let sheet = parse_csv(&body)?;
        tracing::debug!(sheet = name, rows = sheet.rows.len(), columns = sheet.headers.len(), "sheet parsed");

        Ok(sheet)
    }
}
