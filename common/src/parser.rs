//! セル値パーサー
//!
//! スプレッドシートのセル文字列をカタログの値に変換する:
//! - 通貨表記の価格 → f64
//! - カンマ区切りのSKU列 → Vec<String>

use crate::error::{Error, Result};
use regex::Regex;

/// 通貨表記の価格文字列を数値に変換
///
/// 数字と小数点以外の文字をすべて取り除いてからパースする。
/// 通貨記号・桁区切り・マイナス記号も取り除かれるため、結果は常に0以上。
/// 全角数字などUnicodeの10進数字もASCIIに読み替えて数値として扱う。
///
/// # Arguments
/// * `s` - 価格文字列（例: `"$1,234.50"`）
///
/// # Returns
/// * `Ok(f64)` - パース成功
/// * `Err(Error::InvalidPrice)` - 数値部分がない、小数点が複数ある、または有限値にならない
///
/// # Examples
/// ```
/// use catalog_sync_common::price_string_to_float;
///
/// assert_eq!(price_string_to_float("$1,234.50").unwrap(), 1234.50);
/// assert_eq!(price_string_to_float("€99").unwrap(), 99.0);
/// assert_eq!(price_string_to_float("¥１,９８０").unwrap(), 1980.0);
/// assert!(price_string_to_float("N/A").is_err());
/// ```
pub fn price_string_to_float(s: &str) -> Result<f64> {
    let invalid = || Error::InvalidPrice {
        value: s.to_string(),
    };

    let digits: String = s
        .chars()
        .filter_map(|c| {
            if c == '.' {
                Some('.')
            } else {
                decimal_value(c).and_then(|v| char::from_digit(v, 10))
            }
        })
        .collect();

    let value = digits.parse::<f64>().map_err(|_| invalid())?;
    // 桁数が多すぎるとinfになり、JSONに書き出せない
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Unicodeの10進数字（Nd）の値
///
/// Nd数字は0〜9が連続したコードポイントに並ぶため、
/// 連続する数字ブロックの先頭からのオフセット mod 10 が値になる。
fn decimal_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

fn is_decimal_digit(c: char) -> bool {
    lazy_static::lazy_static! {
        // regexの\dはUnicodeのNdにマッチする
        static ref DIGIT_RE: Regex = Regex::new(r"^\d$").unwrap();
    }

    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// カンマ区切りのSKU列を分割
///
/// 空白をすべて取り除いてからカンマで分割する。
/// 空文字列は要素1つ（空文字列）のリストになる。
///
/// # Examples
/// ```
/// use catalog_sync_common::parse_sku_list;
///
/// assert_eq!(parse_sku_list("SKU1, SKU2 ,SKU3"), vec!["SKU1", "SKU2", "SKU3"]);
/// assert_eq!(parse_sku_list(""), vec![""]);
/// ```
pub fn parse_sku_list(s: &str) -> Vec<String> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    compact.split(',').map(str::to_string).collect()
}
