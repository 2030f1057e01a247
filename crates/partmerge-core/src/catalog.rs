use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upstream source of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Supplier {
    Thibault,
    Motovan,
    #[serde(rename = "ITL")]
    Itl,
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Supplier::Thibault => write!(f, "Thibault"),
            Supplier::Motovan => write!(f, "Motovan"),
            Supplier::Itl => write!(f, "ITL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub retail: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer: Option<Decimal>,
    /// Supplier cost to us.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<Decimal>,
    /// ISO 4217 code, e.g. `"CAD"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub quantity: i64,
    /// Human-readable status, e.g. `"In Stock"`, `"Backorder"`, `"Discontinued"`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
}

impl StockLevel {
    /// Builds a stock level whose status is derived from the quantity.
    #[must_use]
    pub fn from_quantity(quantity: i64) -> Self {
        let status = if quantity > 0 {
            "In Stock"
        } else {
            "Out of Stock"
        };
        Self {
            quantity,
            status: status.to_string(),
            warehouse: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProductStatus {
    #[serde(default)]
    pub discontinued: bool,
    #[serde(default)]
    pub special_order: bool,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub oversized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: Decimal,
    pub unit: String,
}

/// A single supplier SKU as seen by the grouping and publishing layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub supplier: Supplier,
    pub sku: String,
    /// Free-text supplier description, e.g. `"PRIORITY GTX JACKET - BLACK (S)"`.
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub stock: Vec<StockLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogItem {
    /// Sum of quantities across all warehouses.
    #[must_use]
    pub fn total_stock(&self) -> i64 {
        self.stock.iter().map(|s| s.quantity).sum()
    }

    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.total_stock() > 0
    }
}

/// One member of a [`ProductFamily`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOffer {
    pub sku: String,
    /// Differentiating value, e.g. `"L"` or `"BLACK/GREY (S)"`.
    pub option_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

/// Several supplier SKUs merged under one base name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFamily {
    /// Shared base name used as the storefront product title.
    pub title: String,
    /// Storefront option label, e.g. `"Size"`.
    pub option_name: String,
    /// First member of the family; its description is replaced by `title`.
    pub parent: CatalogItem,
    pub variants: Vec<VariantOffer>,
}

/// Output of catalog grouping: either a standalone item or a variant family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogEntry {
    Single(CatalogItem),
    Family(ProductFamily),
}

impl CatalogEntry {
    /// SKU of the standalone item, or of the family's first member.
    #[must_use]
    pub fn sku(&self) -> &str {
        match self {
            CatalogEntry::Single(item) => &item.sku,
            CatalogEntry::Family(family) => &family.parent.sku,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            CatalogEntry::Single(item) => &item.description,
            CatalogEntry::Family(family) => &family.title,
        }
    }

    /// Number of purchasable SKUs represented by this entry.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        match self {
            CatalogEntry::Single(_) => 1,
            CatalogEntry::Family(family) => family.variants.len(),
        }
    }

    #[must_use]
    pub fn is_family(&self) -> bool {
        matches!(self, CatalogEntry::Family(_))
    }
}

/// Storefront product-creation payload, built before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub body_html: String,
    /// Option labels; empty for single-variant products.
    #[serde(default)]
    pub options: Vec<String>,
    pub variants: Vec<DraftVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftVariant {
    /// Value for the first (and only) option; absent on single-variant products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    pub sku: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    pub weight_unit: String,
    pub inventory_management: String,
    pub inventory_policy: String,
}
