//! Feed-backed command handlers for the CLI.
//!
//! Each handler loads the ITL feed (from `--feed` or `ITL_FEED_PATH`) and runs
//! one catalog operation. `main` prints the result as pretty JSON on stdout;
//! logs go to stderr so the output can be piped.

use std::path::Path;

use anyhow::Context;
use partmerge_catalog::{
    build_draft, group_catalog, load_feed, search_feed, select_items_by_sku, DraftOverrides,
    FeedRow,
};
use partmerge_core::{AppConfig, CatalogEntry, ProductDraft};
use serde::Serialize;

/// Serializes `value` as pretty JSON for stdout.
pub(crate) fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

fn load_rows(config: &AppConfig, feed: Option<&Path>) -> anyhow::Result<Vec<FeedRow>> {
    let path = feed.unwrap_or(config.feed_path.as_path());
    let rows = load_feed(path)?;
    if rows.is_empty() {
        tracing::warn!(path = %path.display(), "feed is empty; run the FTP sync first");
    }
    Ok(rows)
}

/// Group the feed (optionally narrowed by `query`) into catalog entries.
///
/// # Errors
///
/// Returns an error if the feed cannot be read.
pub(crate) fn group_entries(
    config: &AppConfig,
    feed: Option<&Path>,
    query: Option<&str>,
) -> anyhow::Result<Vec<CatalogEntry>> {
    let rows = load_rows(config, feed)?;
    let selected = search_feed(&rows, query.unwrap_or(""));
    let entries = group_catalog(selected);
    tracing::info!(entries = entries.len(), "grouped feed");
    Ok(entries)
}

/// Feed rows matching `query`, capped at the configured limit.
///
/// # Errors
///
/// Returns an error if the feed cannot be read.
pub(crate) fn search_rows(
    config: &AppConfig,
    feed: Option<&Path>,
    query: &str,
) -> anyhow::Result<Vec<FeedRow>> {
    let rows = load_rows(config, feed)?;
    let matches = search_feed(&rows, query);
    if matches.len() > config.search_limit {
        tracing::info!(
            matches = matches.len(),
            limit = config.search_limit,
            "truncating search results"
        );
    }
    Ok(matches
        .into_iter()
        .take(config.search_limit)
        .cloned()
        .collect())
}

/// Build a product draft from the feed rows with the given part numbers.
///
/// # Errors
///
/// Returns an error if the feed cannot be read, a SKU is not in the feed, or
/// no SKUs were given.
pub(crate) fn draft_product(
    config: &AppConfig,
    feed: Option<&Path>,
    skus: &[String],
    overrides: &DraftOverrides,
) -> anyhow::Result<ProductDraft> {
    let rows = load_rows(config, feed)?;
    let items: Vec<_> = rows.iter().map(FeedRow::to_catalog_item).collect();
    let selected = select_items_by_sku(&items, skus)?;
    build_draft(&selected, overrides).context("failed to build product draft")
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
