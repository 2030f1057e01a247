use std::sync::LazyLock;

use regex::Regex;

use super::option_names::{COLOR, OPTION, SIZE};

/// Apparel letter sizes: `S`, `M`, `L`, `XS`, `XXL`, `XXXL`, `2XL`, `3XS`, ...
static LETTER_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:[1-5]X|X{1,3})?[SL]|M)$").expect("valid letter size regex")
});

/// Numeric sizes with an optional unit: `32`, `10.5`, `110/90`, `12oz`.
static NUMERIC_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^[0-9]+(?:[.,/-][0-9]+)?(?:cm|mm|in|"|'|oz|lbs)?$"#)
        .expect("valid numeric size regex")
});

const COLOR_NAMES: [&str; 17] = [
    "black", "white", "red", "blue", "green", "yellow", "orange", "purple", "grey", "gray",
    "silver", "gold", "chrome", "beige", "tan", "brown", "pink",
];

/// Picks one option label for a whole batch of option values.
///
/// Returns `"Size"` when every value is a letter or numeric size, `"Color"`
/// when every value mentions a known color, and `"Option"` otherwise. A single
/// non-conforming value disqualifies a category for the whole batch. An empty
/// batch satisfies every check and yields `"Size"`.
#[must_use]
pub fn guess_option_name<S: AsRef<str>>(values: &[S]) -> &'static str {
    if values.iter().all(|v| is_size(v.as_ref())) {
        SIZE
    } else if values.iter().all(|v| mentions_color(v.as_ref())) {
        COLOR
    } else {
        OPTION
    }
}

fn is_size(value: &str) -> bool {
    LETTER_SIZE_RE.is_match(value) || NUMERIC_SIZE_RE.is_match(value)
}

fn mentions_color(value: &str) -> bool {
    let lower = value.to_lowercase();
    COLOR_NAMES.iter().any(|color| lower.contains(color))
}
