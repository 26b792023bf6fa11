//! シート行 → カタログレコード変換
//!
//! 列名はスプレッドシートのヘッダーと完全一致で参照する。

use crate::error::Result;
use crate::parser::{parse_sku_list, price_string_to_float};
use crate::sheet::{field, Row, SheetResult};
use crate::types::{Addon, CatalogDocument, Product};

/// カテゴリシートの列
pub mod categories {
    pub const SHEET: &str = "Categories";
    pub const PRODUCT_CATEGORIES: &str = "Product Categories";
    pub const ADDON_CATEGORIES: &str = "Add-on Categories";

    pub const COLUMNS: &[&str] = &[PRODUCT_CATEGORIES, ADDON_CATEGORIES];
}

/// 製品シートの列
pub mod products {
    pub const SHEET: &str = "Products";
    pub const CATEGORY: &str = "Product Category";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const SKU: &str = "Product SKU";
    pub const NAME: &str = "Product Name";
    pub const DESCRIPTION: &str = "Product Description";
    pub const PRICE: &str = "Our Price";

    pub const COLUMNS: &[&str] = &[CATEGORY, MANUFACTURER, SKU, NAME, DESCRIPTION, PRICE];
}

/// アドオンシートの列
pub mod addons {
    pub const SHEET: &str = "Add-ons";
    pub const CATEGORY: &str = "Add-on Category";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const SKU: &str = "Add-on SKU";
    pub const NAME: &str = "Add-on Name";
    pub const DESCRIPTION: &str = "Add-on Description";
    pub const PRICE: &str = "Our Price";
    pub const PARENT_SKUS: &str = "Compatible Parent SKUs";
    pub const INCOMPATIBLE_SKUS: &str = "Incompatible Add-on SKUs";

    pub const COLUMNS: &[&str] = &[
        CATEGORY,
        MANUFACTURER,
        SKU,
        NAME,
        DESCRIPTION,
        PRICE,
        PARENT_SKUS,
        INCOMPATIBLE_SKUS,
    ];
}

/// 製品シートの1行を変換
pub fn product_from_row(row: &Row) -> Result<Product> {
    use products::*;

    Ok(Product {
        category: field(row, SHEET, CATEGORY)?.to_string(),
        manufacturer: field(row, SHEET, MANUFACTURER)?.to_string(),
        sku: field(row, SHEET, SKU)?.to_string(),
        name: field(row, SHEET, NAME)?.to_string(),
        description: field(row, SHEET, DESCRIPTION)?.to_string(),
        unit_price: price_string_to_float(field(row, SHEET, PRICE)?)?,
    })
}

/// アドオンシートの1行を変換
pub fn addon_from_row(row: &Row) -> Result<Addon> {
    use addons::*;

    Ok(Addon {
        category: field(row, SHEET, CATEGORY)?.to_string(),
        manufacturer: field(row, SHEET, MANUFACTURER)?.to_string(),
        sku: field(row, SHEET, SKU)?.to_string(),
        name: field(row, SHEET, NAME)?.to_string(),
        description: field(row, SHEET, DESCRIPTION)?.to_string(),
        unit_price: price_string_to_float(field(row, SHEET, PRICE)?)?,
        parent_skus: parse_sku_list(field(row, SHEET, PARENT_SKUS)?),
        incompatible_skus: parse_sku_list(field(row, SHEET, INCOMPATIBLE_SKUS)?),
    })
}

/// カテゴリシートをドキュメントに反映
///
/// 列に空でない値が1つもなければ空のリストになる。
pub fn apply_categories(doc: &mut CatalogDocument, sheet: &SheetResult) -> Result<()> {
    sheet.require_columns(categories::SHEET, categories::COLUMNS)?;

    doc.product_categories = sheet
        .column(categories::PRODUCT_CATEGORIES)
        .map(<[String]>::to_vec)
        .unwrap_or_default();
    doc.addon_categories = sheet
        .column(categories::ADDON_CATEGORIES)
        .map(<[String]>::to_vec)
        .unwrap_or_default();
    Ok(())
}

/// 製品シートをドキュメントに反映
pub fn apply_products(doc: &mut CatalogDocument, sheet: &SheetResult) -> Result<()> {
    sheet.require_columns(products::SHEET, products::COLUMNS)?;

    for row in &sheet.rows {
        doc.insert_product(product_from_row(row)?);
    }
    Ok(())
}

/// アドオンシートをドキュメントに反映
pub fn apply_addons(doc: &mut CatalogDocument, sheet: &SheetResult) -> Result<()> {
    sheet.require_columns(addons::SHEET, addons::COLUMNS)?;

    for row in &sheet.rows {
        doc.insert_addon(addon_from_row(row)?);
    }
    Ok(())
}
