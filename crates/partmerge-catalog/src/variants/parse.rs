use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::option_names::{SIZE, TIRE_SIZE, TITLE, VARIANT};
use super::DEFAULT_OPTION_VALUE;

/// Separator between product name and variant suffix, e.g. `"JACKET - BLACK (S)"`.
const DASH_SEPARATOR: &str = " - ";

/// Parenthetical contents at or above this many characters are treated as a
/// descriptive note rather than a size.
const MAX_PAREN_OPTION_CHARS: usize = 20;

static PAREN_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([^)]+\)$").expect("valid paren-only regex"));
static TRAILING_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([^)]+)\)$").expect("valid trailing paren regex"));
static TIRE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}/[0-9]{2}.?[0-9]{2}$").expect("valid tire size regex"));

/// One description split into base name and option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVariant {
    /// Description with the variant-specific part removed.
    pub base_name: String,
    /// Differentiating fragment, e.g. `"L"`. Never empty.
    pub option_value: String,
    /// Category label for `option_value`, e.g. `"Size"`.
    pub option_name: String,
}

impl ParsedVariant {
    fn new(base_name: &str, option_value: &str, option_name: &str) -> Self {
        let option_value = if option_value.is_empty() {
            DEFAULT_OPTION_VALUE
        } else {
            option_value
        };
        Self {
            base_name: base_name.to_string(),
            option_value: option_value.to_string(),
            option_name: option_name.to_string(),
        }
    }

    /// Result for a description with no detectable variant marker.
    fn untitled(description: &str) -> Self {
        Self::new(description, DEFAULT_OPTION_VALUE, TITLE)
    }

    /// `true` when no variant marker was found.
    #[must_use]
    pub fn is_untitled(&self) -> bool {
        self.option_name == TITLE
    }
}

type Matcher = fn(&str) -> Option<ParsedVariant>;

/// Matchers in priority order; the first one returning `Some` wins.
const MATCHERS: &[(&str, Matcher)] = &[
    ("dash_suffix", match_dash_suffix),
    ("trailing_parenthetical", match_trailing_parenthetical),
];

/// Splits a single description into base name, option value and option name.
///
/// Rules, first match wins:
/// 1. `"NAME - VALUE"` (last `" - "`): option `"Variant"`, or `"Size"` when the
///    value is only a parenthetical like `"(S)"`.
/// 2. `"NAME (VALUE)"` with a short trailing parenthetical: option `"Size"`
///    (or `"Tire Size"` for long tire-size shaped content).
/// 3. Otherwise the whole description is the base name, option `"Title"`,
///    value `"Default"`.
#[must_use]
pub fn parse(description: &str) -> ParsedVariant {
    if description.is_empty() {
        return ParsedVariant::untitled("");
    }

    MATCHERS
        .iter()
        .find_map(|(rule, matcher)| {
            let parsed = matcher(description)?;
            tracing::trace!(rule, description, option = %parsed.option_value, "variant rule matched");
            Some(parsed)
        })
        .unwrap_or_else(|| ParsedVariant::untitled(description))
}

fn match_dash_suffix(description: &str) -> Option<ParsedVariant> {
    let idx = description.rfind(DASH_SEPARATOR).filter(|&idx| idx > 0)?;

    let base_name = description[..idx].trim();
    let suffix = description[idx + DASH_SEPARATOR.len()..].trim();

    if PAREN_ONLY_RE.is_match(suffix) {
        let size = suffix.replace(['(', ')'], "");
        return Some(ParsedVariant::new(base_name, &size, SIZE));
    }

    Some(ParsedVariant::new(base_name, suffix, VARIANT))
}

fn match_trailing_parenthetical(description: &str) -> Option<ParsedVariant> {
    let caps = TRAILING_PAREN_RE.captures(description)?;
    let whole = caps.get(0)?;
    let content = caps.get(1)?.as_str();
    let base_name = description[..whole.start()].trim();

    if content.chars().count() < MAX_PAREN_OPTION_CHARS {
        Some(ParsedVariant::new(base_name, content, SIZE))
    } else if TIRE_SIZE_RE.is_match(content) {
        Some(ParsedVariant::new(base_name, content, TIRE_SIZE))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
