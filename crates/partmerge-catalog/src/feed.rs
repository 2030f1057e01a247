//! Loader for the ITL Canada CSV price feed.
//!
//! The feed is synced to local disk by an FTP job (out of scope here) and
//! read from `ITL_FEED_PATH`. Observed shape:
//!
//! ```text
//! Part no,DescriptionFR,DescriptionEN,Cost,Retail,qty,MAP,OEM,Part no without hyphen,UPC 1,UPC 2
//! 12-345,BLOUSON (S),JACKET (S),80.00,159.99,4,149.99,KLIM,12345,0123456789012,
//! ```
//!
//! The file is not quoted: a `"` is an ordinary character and every `,` is a
//! field separator. Rows may carry fewer fields than the header; missing
//! trailing fields are treated as empty.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use partmerge_core::{CatalogItem, Price, ProductStatus, StockLevel, Supplier};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::FeedError;
use crate::variants::Described;

/// Currency of every ITL price.
const FEED_CURRENCY: &str = "CAD";

const COL_PART_NO: &str = "Part no";
const COL_DESCRIPTION_FR: &str = "DescriptionFR";
const COL_DESCRIPTION_EN: &str = "DescriptionEN";
const COL_COST: &str = "Cost";
const COL_RETAIL: &str = "Retail";
const COL_QTY: &str = "qty";
const COL_MAP: &str = "MAP";
const COL_OEM: &str = "OEM";
const COL_PART_NO_WITHOUT_HYPHEN: &str = "Part no without hyphen";
const COL_UPC1: &str = "UPC 1";
const COL_UPC2: &str = "UPC 2";

/// One row of the ITL feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedRow {
    pub part_no: String,
    pub description_fr: String,
    pub description_en: String,
    /// Dealer cost.
    pub cost: Decimal,
    pub retail: Decimal,
    pub qty: i64,
    /// Minimum advertised price.
    pub map: Decimal,
    /// Brand / manufacturer name.
    pub oem: String,
    pub part_no_without_hyphen: String,
    pub upc1: String,
    pub upc2: String,
}

impl FeedRow {
    /// Converts the row into the supplier-neutral catalog shape.
    #[must_use]
    pub fn to_catalog_item(&self) -> CatalogItem {
        let upc = [&self.upc1, &self.upc2]
            .into_iter()
            .find(|u| !u.is_empty())
            .cloned();

        CatalogItem {
            supplier: Supplier::Itl,
            sku: self.part_no.clone(),
            description: self.description().to_string(),
            price: Price {
                retail: self.retail,
                dealer: None,
                net: Some(self.cost),
                currency: Some(FEED_CURRENCY.to_string()),
            },
            stock: vec![StockLevel::from_quantity(self.qty)],
            product_status: Some(ProductStatus::default()),
            weight: None,
            brand: Some(self.oem.clone()).filter(|b| !b.is_empty()),
            upc,
            image: None,
        }
    }
}

impl Described for FeedRow {
    /// English description, falling back to French when English is blank.
    fn description(&self) -> &str {
        if self.description_en.is_empty() {
            &self.description_fr
        } else {
            &self.description_en
        }
    }
}

/// Reads and parses the feed at `path`.
///
/// A missing file is logged and yields an empty list, matching the behaviour
/// of a feed that has not been synced yet.
///
/// # Errors
///
/// Returns [`FeedError::Io`] if the file exists but cannot be read.
pub fn load_feed(path: &Path) -> Result<Vec<FeedRow>, FeedError> {
    tracing::info!(path = %path.display(), "loading ITL feed");

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "feed file not found");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(FeedError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let rows = parse_feed(&content);
    tracing::info!(rows = rows.len(), "parsed ITL feed");
    if !rows.is_empty() && rows.iter().all(|r| r.description_en.is_empty()) {
        tracing::warn!("no feed rows carry an English description");
    }
    Ok(rows)
}

/// Parses feed content whose first non-blank line is the header row.
#[must_use]
pub fn parse_feed(content: &str) -> Vec<FeedRow> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = Columns::from_header(header.trim_start_matches('\u{feff}'));

    lines
        .enumerate()
        .filter_map(|(idx, line)| {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let row = columns.row(&fields);
            if row.is_none() {
                tracing::debug!(row = idx + 1, "skipping feed row without part number");
            }
            row
        })
        .collect()
}

/// Header name to field index lookup.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_header(header: &str) -> Self {
        Self(
            header
                .split(',')
                .enumerate()
                .map(|(idx, name)| (name.trim().to_string(), idx))
                .collect(),
        )
    }

    fn get<'a>(&self, fields: &[&'a str], name: &str) -> &'a str {
        self.0
            .get(name)
            .and_then(|&idx| fields.get(idx))
            .copied()
            .unwrap_or("")
    }

    fn row(&self, fields: &[&str]) -> Option<FeedRow> {
        let part_no = self.get(fields, COL_PART_NO);
        if part_no.is_empty() {
            return None;
        }

        Some(FeedRow {
            part_no: part_no.to_string(),
            description_fr: self.get(fields, COL_DESCRIPTION_FR).to_string(),
            description_en: self.get(fields, COL_DESCRIPTION_EN).to_string(),
            cost: parse_amount(self.get(fields, COL_COST)),
            retail: parse_amount(self.get(fields, COL_RETAIL)),
            qty: parse_quantity(self.get(fields, COL_QTY)),
            map: parse_amount(self.get(fields, COL_MAP)),
            oem: self.get(fields, COL_OEM).to_string(),
            part_no_without_hyphen: self.get(fields, COL_PART_NO_WITHOUT_HYPHEN).to_string(),
            upc1: self.get(fields, COL_UPC1).to_string(),
            upc2: self.get(fields, COL_UPC2).to_string(),
        })
    }
}

/// Lenient money parse; anything unreadable is zero.
fn parse_amount(raw: &str) -> Decimal {
    let raw = raw.trim_start_matches('$');
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

/// Lenient quantity parse; decimals are truncated, anything unreadable is zero.
fn parse_quantity(raw: &str) -> i64 {
    raw.parse::<i64>()
        .ok()
        .or_else(|| Decimal::from_str(raw).ok().and_then(|d| d.trunc().to_i64()))
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
