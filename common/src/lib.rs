//! Catalog Sync Common Library
//!
//! CLIと下流ツールで共有されるカタログの型とシートパーサー

pub mod types;
pub mod error;
pub mod parser;
pub mod sheet;
pub mod transform;

pub use types::{Addon, CatalogDocument, Product};
pub use error::{Error, Result};
pub use parser::{parse_sku_list, price_string_to_float};
pub use sheet::{parse_csv, Row, SheetResult};
pub use transform::{addon_from_row, apply_addons, apply_categories, apply_products, product_from_row};
