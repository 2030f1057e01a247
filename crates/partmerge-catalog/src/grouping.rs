//! Feed rows to storefront-ready catalog entries.
//!
//! Rows are bucketed by the base name [`crate::variants::parse`] extracts from
//! their description. Singletons stay standalone; larger buckets become a
//! [`ProductFamily`] whose option label comes from the first member.

use partmerge_core::{CatalogEntry, ProductFamily, VariantOffer};

use crate::feed::FeedRow;
use crate::variants::{group_items, parse, Described};

/// Groups feed rows into standalone items and variant families.
///
/// Entries come out in the order each base name first appears in `rows`.
#[must_use]
pub fn group_catalog<'a, I>(rows: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = &'a FeedRow>,
{
    let groups = group_items(rows);
    let row_count = groups.item_count();

    let entries: Vec<CatalogEntry> = groups
        .into_iter()
        .filter_map(|(base_name, members)| build_entry(base_name, &members))
        .collect();

    let families = entries.iter().filter(|e| e.is_family()).count();
    tracing::debug!(
        rows = row_count,
        singles = entries.len() - families,
        families,
        "grouped catalog rows"
    );
    entries
}

fn build_entry(base_name: String, members: &[&FeedRow]) -> Option<CatalogEntry> {
    match members {
        [] => None,
        [only] => Some(CatalogEntry::Single(only.to_catalog_item())),
        [first, ..] => {
            let mut parent = first.to_catalog_item();
            parent.description.clone_from(&base_name);

            let option_name = parse(first.description()).option_name;
            let variants = members
                .iter()
                .map(|row| VariantOffer {
                    sku: row.part_no.clone(),
                    option_value: parse(row.description()).option_value,
                    price: Some(row.retail),
                    stock: Some(row.qty),
                })
                .collect();

            Some(CatalogEntry::Family(ProductFamily {
                title: base_name,
                option_name,
                parent,
                variants,
            }))
        }
    }
}
