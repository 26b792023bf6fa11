//! 同期パイプライン
//!
//! Categories → Products → Add-ons の順に取得・変換し、
//! 1つのCatalogDocumentにまとめてJSONとして書き出す。

use crate::config::{Config, SheetGids};
use crate::error::Result;
use crate::fetcher::SheetFetcher;
use catalog_sync_common::transform::{addons, categories, products};
use catalog_sync_common::{apply_addons, apply_categories, apply_products, CatalogDocument};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 3枚のシートを順に取得してドキュメントを組み立てる
///
/// 取得はすべて逐次。どこかで致命的なエラーが起きた時点で中断する。
pub async fn sync_catalog(fetcher: &SheetFetcher, gids: &SheetGids) -> Result<CatalogDocument> {
    let mut doc = CatalogDocument::new();

    println!("[1/4] カテゴリを取得中...");
    let sheet = fetcher.fetch_sheet(categories::SHEET, gids.categories).await?;
    apply_categories(&mut doc, &sheet)?;
    println!(
        "✔ 製品カテゴリ {}件 / アドオンカテゴリ {}件\n",
        doc.product_categories.len(),
        doc.addon_categories.len()
    );

    println!("[2/4] 製品を取得中...");
    let sheet = fetcher.fetch_sheet(products::SHEET, gids.products).await?;
    apply_products(&mut doc, &sheet)?;
    println!("✔ 製品 {}件\n", doc.products.len());

    println!("[3/4] アドオンを取得中...");
    let sheet = fetcher.fetch_sheet(addons::SHEET, gids.addons).await?;
    apply_addons(&mut doc, &sheet)?;
    println!("✔ アドオン {}件\n", doc.addons.len());

    Ok(doc)
}

/// 設定に従って取得から書き出しまで一括実行
pub async fn run_sync(config: &Config) -> Result<CatalogDocument> {
    let fetcher = SheetFetcher::from_config(config)?;
    let doc = sync_catalog(&fetcher, &config.sheets).await?;

    println!("[4/4] 書き出し中: {}", config.output_path.display());
    write_document(&doc, &config.output_path)?;
    println!("✔ 結果を保存: {}", config.output_path.display());

    Ok(doc)
}

/// ドキュメントをJSONで書き出す（インデント4、非ASCIIはそのまま）
///
/// 既存ファイルは上書き。親ディレクトリは作成しない。
pub fn write_document(doc: &CatalogDocument, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    doc.serialize(&mut ser)?;

    writer.flush()?;
    Ok(())
}
