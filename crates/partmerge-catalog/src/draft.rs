//! Storefront product payloads built from one or more catalog items.
//!
//! Only the payload is produced here; submitting it to the storefront API is
//! the caller's job.

use partmerge_core::{CatalogItem, DraftVariant, ProductDraft};

use crate::error::DraftError;
use crate::variants::detect_common_pattern;
use crate::variants::option_names::VARIANT;

const DEFAULT_WEIGHT_UNIT: &str = "lb";

/// User-supplied values that take precedence over detected ones.
#[derive(Debug, Clone, Default)]
pub struct DraftOverrides {
    pub title: Option<String>,
    pub option_name: Option<String>,
    /// Plain-text description, converted to HTML for the product body.
    pub description: Option<String>,
}

/// Builds a product draft from `items`.
///
/// More than one item produces a multi-variant product: the common pattern
/// across the item descriptions supplies the title, the option label and one
/// option value per item. A single item produces a product with no options.
///
/// # Errors
///
/// Returns [`DraftError::NoItems`] when `items` is empty.
pub fn build_draft(
    items: &[CatalogItem],
    overrides: &DraftOverrides,
) -> Result<ProductDraft, DraftError> {
    let first = items.first().ok_or(DraftError::NoItems)?;

    let body_html = match overrides.description.as_deref() {
        Some(text) if !text.trim().is_empty() => text_to_html(text),
        _ => format!(
            "<strong>Brand:</strong> {}<br><strong>Supplier:</strong> {}",
            escape_html(first.brand.as_deref().unwrap_or("N/A")),
            first.supplier
        ),
    };

    let draft = if items.len() > 1 {
        let descriptions: Vec<&str> = items.iter().map(|i| i.description.as_str()).collect();
        let pattern = detect_common_pattern(&descriptions);

        let option_name = non_blank(overrides.option_name.as_deref())
            .or_else(|| non_blank(Some(pattern.option_name.as_str())))
            .unwrap_or(VARIANT)
            .to_string();
        let title = non_blank(overrides.title.as_deref())
            .or_else(|| non_blank(Some(pattern.common_base_name.as_str())))
            .unwrap_or(&first.description)
            .to_string();

        let variants = items
            .iter()
            .zip(pattern.variants)
            .map(|(item, parsed)| draft_variant(item, Some(parsed.option_value)))
            .collect();

        ProductDraft {
            title,
            body_html,
            options: vec![option_name],
            variants,
        }
    } else {
        let title = non_blank(overrides.title.as_deref())
            .unwrap_or(&first.description)
            .to_string();
        ProductDraft {
            title,
            body_html,
            options: Vec::new(),
            variants: vec![draft_variant(first, None)],
        }
    };

    tracing::debug!(
        title = %draft.title,
        variants = draft.variants.len(),
        "built product draft"
    );
    Ok(draft)
}

/// Picks the items whose SKU appears in `skus`, in the order of `skus`.
///
/// # Errors
///
/// Returns [`DraftError::UnknownSku`] for the first SKU with no matching item.
pub fn select_items_by_sku<S: AsRef<str>>(
    items: &[CatalogItem],
    skus: &[S],
) -> Result<Vec<CatalogItem>, DraftError> {
    skus.iter()
        .map(|sku| {
            let sku = sku.as_ref();
            items
                .iter()
                .find(|item| item.sku == sku)
                .cloned()
                .ok_or_else(|| DraftError::UnknownSku(sku.to_string()))
        })
        .collect()
}

fn draft_variant(item: &CatalogItem, option1: Option<String>) -> DraftVariant {
    DraftVariant {
        option1,
        sku: item.sku.clone(),
        price: item.price.retail,
        barcode: item.upc.clone().filter(|u| !u.is_empty()),
        weight: item.weight.as_ref().map(|w| w.value),
        weight_unit: item
            .weight
            .as_ref()
            .map_or(DEFAULT_WEIGHT_UNIT, |w| w.unit.as_str())
            .to_lowercase(),
        inventory_management: "shopify".to_string(),
        inventory_policy: "deny".to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Plain text to HTML: blank lines separate paragraphs, single newlines
/// become line breaks.
fn text_to_html(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(|p| p.trim_matches('\n'))
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p).replace('\n', "<br>")))
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use partmerge_core::{Price, StockLevel, Supplier, Weight};
    use rust_decimal::Decimal;

    use super::*;

    fn item(sku: &str, description: &str, retail: i64) -> CatalogItem {
        CatalogItem {
            supplier: Supplier::Itl,
            sku: sku.to_string(),
            description: description.to_string(),
            price: Price {
                retail: Decimal::new(retail, 2),
                dealer: None,
                net: None,
                currency: Some("CAD".to_string()),
            },
            stock: vec![StockLevel::from_quantity(1)],
            product_status: None,
            weight: None,
            brand: Some("KLIM".to_string()),
            upc: Some("0123".to_string()),
            image: None,
        }
    }

    fn jackets() -> Vec<CatalogItem> {
        vec![
            item("J-S", "PRIORITY GTX JACKET - BLACK (S)", 49_999),
            item("J-M", "PRIORITY GTX JACKET - BLACK (M)", 49_999),
            item("J-L", "PRIORITY GTX JACKET - BLACK (L)", 52_999),
        ]
    }

    #[test]
    fn empty_items_is_an_error() {
        let err = build_draft(&[], &DraftOverrides::default()).unwrap_err();
        assert!(matches!(err, DraftError::NoItems));
    }

    #[test]
    fn single_item_has_no_options() {
        let draft = build_draft(&[item("A-1", "BRAKE PAD SET", 4999)], &DraftOverrides::default())
            .unwrap();
        assert_eq!(draft.title, "BRAKE PAD SET");
        assert!(draft.options.is_empty());
        assert_eq!(draft.variants.len(), 1);
        assert!(draft.variants[0].option1.is_none());
        assert_eq!(draft.variants[0].sku, "A-1");
        assert_eq!(draft.variants[0].price, Decimal::new(4999, 2));
        assert_eq!(draft.variants[0].barcode.as_deref(), Some("0123"));
        assert_eq!(draft.variants[0].weight_unit, "lb");
        assert_eq!(draft.variants[0].inventory_policy, "deny");
    }

    #[test]
    fn multiple_items_use_detected_pattern() {
        let draft = build_draft(&jackets(), &DraftOverrides::default()).unwrap();
        assert_eq!(draft.title, "PRIORITY GTX JACKET - BLACK");
        assert_eq!(draft.options, ["Size"]);
        let values: Vec<Option<&str>> = draft
            .variants
            .iter()
            .map(|v| v.option1.as_deref())
            .collect();
        assert_eq!(values, [Some("S"), Some("M"), Some("L")]);
        assert_eq!(draft.variants[2].price, Decimal::new(52_999, 2));
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = DraftOverrides {
            title: Some("Priority GTX Jacket".to_string()),
            option_name: Some("Taille".to_string()),
            description: None,
        };
        let draft = build_draft(&jackets(), &overrides).unwrap();
        assert_eq!(draft.title, "Priority GTX Jacket");
        assert_eq!(draft.options, ["Taille"]);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let overrides = DraftOverrides {
            title: Some("   ".to_string()),
            option_name: Some(String::new()),
            description: Some("\n".to_string()),
        };
        let draft = build_draft(&jackets(), &overrides).unwrap();
        assert_eq!(draft.title, "PRIORITY GTX JACKET - BLACK");
        assert_eq!(draft.options, ["Size"]);
        assert!(draft.body_html.starts_with("<strong>Brand:</strong>"));
    }

    #[test]
    fn default_body_names_brand_and_supplier() {
        let draft = build_draft(&jackets(), &DraftOverrides::default()).unwrap();
        assert_eq!(
            draft.body_html,
            "<strong>Brand:</strong> KLIM<br><strong>Supplier:</strong> ITL"
        );
    }

    #[test]
    fn default_body_without_brand() {
        let mut single = item("A-1", "PLUG", 100);
        single.brand = None;
        let draft = build_draft(&[single], &DraftOverrides::default()).unwrap();
        assert!(draft.body_html.contains("N/A"));
    }

    #[test]
    fn description_override_becomes_paragraphs() {
        let overrides = DraftOverrides {
            description: Some(
                "Waterproof & breathable.\nGore-Tex shell.\n\nFits <tall> riders.".to_string(),
            ),
            ..DraftOverrides::default()
        };
        let draft = build_draft(&jackets(), &overrides).unwrap();
        assert_eq!(
            draft.body_html,
            "<p>Waterproof &amp; breathable.<br>Gore-Tex shell.</p><p>Fits &lt;tall&gt; riders.</p>"
        );
    }

    #[test]
    fn weight_is_carried_with_lowercase_unit() {
        let mut single = item("A-1", "PLUG", 100);
        single.weight = Some(Weight {
            value: Decimal::new(25, 1),
            unit: "KG".to_string(),
        });
        let draft = build_draft(&[single], &DraftOverrides::default()).unwrap();
        assert_eq!(draft.variants[0].weight, Some(Decimal::new(25, 1)));
        assert_eq!(draft.variants[0].weight_unit, "kg");
    }

    #[test]
    fn select_items_keeps_requested_order() {
        let items = jackets();
        let picked = select_items_by_sku(&items, &["J-L", "J-S"]).unwrap();
        let skus: Vec<&str> = picked.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, ["J-L", "J-S"]);
    }

    #[test]
    fn select_items_reports_unknown_sku() {
        let items = jackets();
        let err = select_items_by_sku(&items, &["J-S", "NOPE"]).unwrap_err();
        assert!(matches!(err, DraftError::UnknownSku(ref sku) if sku == "NOPE"));
    }
}
