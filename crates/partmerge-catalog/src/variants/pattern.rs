use serde::{Deserialize, Serialize};

use super::classify::guess_option_name;
use super::option_names::OPTION;
use super::parse::{parse, ParsedVariant};
use super::DEFAULT_OPTION_VALUE;

/// Shared prefixes shorter than this (in characters) are too weak to be a
/// real product name.
const MIN_PREFIX_CHARS: usize = 3;

/// Batch decomposition of related descriptions into one product with variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonPattern {
    /// Option label shared by every variant.
    pub option_name: String,
    pub common_base_name: String,
    /// One entry per input description, in input order.
    pub variants: Vec<ParsedVariant>,
}

/// Detects the shared base name and option across a batch of descriptions.
///
/// With two or more descriptions the longest common prefix becomes the base
/// name and the remainders become option values, classified together by
/// [`guess_option_name`]. When the prefix is under three characters each
/// description is parsed on its own instead, and the option label is kept
/// only if every parse agrees on it.
#[must_use]
pub fn detect_common_pattern<S: AsRef<str>>(descriptions: &[S]) -> CommonPattern {
    match descriptions {
        [] => CommonPattern {
            option_name: OPTION.to_string(),
            common_base_name: String::new(),
            variants: Vec::new(),
        },
        [only] => {
            let parsed = parse(only.as_ref());
            CommonPattern {
                option_name: parsed.option_name.clone(),
                common_base_name: parsed.base_name.clone(),
                variants: vec![parsed],
            }
        }
        _ => {
            let prefix = token_aligned_prefix(descriptions);
            if prefix.chars().count() < MIN_PREFIX_CHARS {
                tracing::debug!(
                    prefix,
                    count = descriptions.len(),
                    "shared prefix too short, parsing descriptions individually"
                );
                per_item_pattern(descriptions)
            } else {
                shared_prefix_pattern(descriptions, prefix)
            }
        }
    }
}

fn shared_prefix_pattern<S: AsRef<str>>(descriptions: &[S], prefix: &str) -> CommonPattern {
    let base_name = strip_edge_punctuation(prefix);

    let values: Vec<&str> = descriptions
        .iter()
        .map(|d| {
            let value = strip_edge_punctuation(&d.as_ref()[prefix.len()..]);
            if value.is_empty() {
                DEFAULT_OPTION_VALUE
            } else {
                value
            }
        })
        .collect();

    let option_name = guess_option_name(&values);

    let variants = values
        .iter()
        .map(|value| ParsedVariant {
            base_name: base_name.to_string(),
            option_value: (*value).to_string(),
            option_name: option_name.to_string(),
        })
        .collect();

    CommonPattern {
        option_name: option_name.to_string(),
        common_base_name: base_name.to_string(),
        variants,
    }
}

fn per_item_pattern<S: AsRef<str>>(descriptions: &[S]) -> CommonPattern {
    let mut variants: Vec<ParsedVariant> = descriptions.iter().map(|d| parse(d.as_ref())).collect();

    let option_name = match variants.split_first() {
        Some((first, rest)) if rest.iter().all(|v| v.option_name == first.option_name) => {
            first.option_name.clone()
        }
        _ => OPTION.to_string(),
    };

    for variant in &mut variants {
        variant.option_name.clone_from(&option_name);
    }

    let common_base_name = variants
        .first()
        .map(|v| v.base_name.clone())
        .unwrap_or_default();

    CommonPattern {
        option_name,
        common_base_name,
        variants,
    }
}

/// Longest common prefix of all descriptions, pulled back so it never ends
/// in the middle of an alphanumeric token.
fn token_aligned_prefix<S: AsRef<str>>(descriptions: &[S]) -> &str {
    let Some((first, rest)) = descriptions.split_first() else {
        return "";
    };
    let prefix = rest
        .iter()
        .fold(first.as_ref(), |prefix, d| common_prefix(prefix, d.as_ref()));

    let ends_in_token = prefix
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    if !ends_in_token {
        return prefix;
    }

    let splits_token = descriptions.iter().any(|d| {
        d.as_ref()[prefix.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
    });
    if !splits_token {
        return prefix;
    }

    // Keep everything up to and including the last separator.
    match prefix
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_alphanumeric())
    {
        Some((idx, sep)) => &prefix[..idx + sep.len_utf8()],
        None => "",
    }
}

/// Character-exact common prefix of two strings, cut on a char boundary.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or(a.len().min(b.len()), |((idx, _), _)| idx);
    &a[..end]
}

/// Trims everything but ASCII letters and digits from both ends, so accented
/// capitals at the edges are trimmed too.
fn strip_edge_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
