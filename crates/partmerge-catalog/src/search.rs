use crate::feed::FeedRow;

/// Returns the rows matching every whitespace-separated token of `query`.
///
/// Matching is a case-insensitive substring test against the part numbers,
/// both descriptions and the OEM name. An empty query matches every row.
#[must_use]
pub fn search_feed<'a>(rows: &'a [FeedRow], query: &str) -> Vec<&'a FeedRow> {
    let query = query.to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let matches: Vec<&FeedRow> = rows
        .iter()
        .filter(|row| {
            let haystack = searchable_text(row);
            tokens.iter().all(|token| haystack.contains(token))
        })
        .collect();

    tracing::debug!(
        query = %query,
        rows = rows.len(),
        matches = matches.len(),
        "searched feed"
    );
    matches
}

fn searchable_text(row: &FeedRow) -> String {
    format!(
        "{} {} {} {} {}",
        row.part_no, row.part_no_without_hyphen, row.description_en, row.description_fr, row.oem
    )
    .to_lowercase()
}
