//! カタログの型定義
//!
//! CLIと下流のCPQツールで共有される型:
//! - Product: 製品シートの1行
//! - Addon: アドオンシートの1行（互換/非互換SKUリスト付き）
//! - CatalogDocument: 最終出力（JSON）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 製品レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    pub manufacturer: String,
    pub sku: String,              // マップのキーと同じ
    pub name: String,
    pub description: String,
    pub unit_price: f64,
}

/// アドオンレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub category: String,
    pub manufacturer: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub unit_price: f64,

    /// 取り付け可能な親製品のSKU
    pub parent_skus: Vec<String>,

    /// 同時に選択できないアドオンのSKU
    pub incompatible_skus: Vec<String>,
}

/// 出力ドキュメント
///
/// SKUが重複した場合は後の行で上書きされる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub product_categories: Vec<String>,
    pub addon_categories: Vec<String>,
    pub products: BTreeMap<String, Product>,
    pub addons: BTreeMap<String, Addon>,
}

impl CatalogDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 製品を追加（同じSKUは上書き）
    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(product.sku.clone(), product);
    }

    /// アドオンを追加（同じSKUは上書き）
    pub fn insert_addon(&mut self, addon: Addon) {
        self.addons.insert(addon.sku.clone(), addon);
    }
}
