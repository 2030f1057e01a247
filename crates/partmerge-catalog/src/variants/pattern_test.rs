use super::*;

fn option_values(pattern: &CommonPattern) -> Vec<&str> {
    pattern
        .variants
        .iter()
        .map(|v| v.option_value.as_str())
        .collect()
}

// -----------------------------------------------------------------------
// common_prefix / token_aligned_prefix
// -----------------------------------------------------------------------

#[test]
fn common_prefix_of_identical_strings_is_whole_string() {
    assert_eq!(common_prefix("HELMET", "HELMET"), "HELMET");
}

#[test]
fn common_prefix_when_one_is_prefix_of_other() {
    assert_eq!(common_prefix("HELMET", "HELMET VISOR"), "HELMET");
    assert_eq!(common_prefix("HELMET VISOR", "HELMET"), "HELMET");
}

#[test]
fn common_prefix_is_case_sensitive() {
    assert_eq!(common_prefix("Jacket", "JACKET"), "J");
}

#[test]
fn common_prefix_stops_on_char_boundary() {
    assert_eq!(common_prefix("CAFÉ", "CAFE"), "CAF");
}

#[test]
fn token_prefix_backtracks_split_number() {
    assert_eq!(
        token_aligned_prefix(&["Boot Size 11", "Boot Size 12"]),
        "Boot Size "
    );
}

#[test]
fn token_prefix_keeps_separator_character() {
    assert_eq!(token_aligned_prefix(&["PAD-A12", "PAD-A13"]), "PAD-");
}

#[test]
fn token_prefix_collapses_without_separator() {
    assert_eq!(token_aligned_prefix(&["Item1", "Item2"]), "");
}

#[test]
fn token_prefix_untouched_when_next_char_is_separator() {
    assert_eq!(
        token_aligned_prefix(&["HELMET X", "HELMET X RED"]),
        "HELMET X"
    );
}

// -----------------------------------------------------------------------
// detect_common_pattern
// -----------------------------------------------------------------------

#[test]
fn empty_input_yields_generic_option() {
    let descriptions: [&str; 0] = [];
    let pattern = detect_common_pattern(&descriptions);
    assert_eq!(pattern.option_name, "Option");
    assert_eq!(pattern.common_base_name, "");
    assert!(pattern.variants.is_empty());
}

#[test]
fn single_input_wraps_parse() {
    let description = "VOYAGER DRYO JACKET - BLUE/GREY (L)";
    let pattern = detect_common_pattern(&[description]);
    let parsed = parse(description);
    assert_eq!(pattern.option_name, parsed.option_name);
    assert_eq!(pattern.common_base_name, parsed.base_name);
    assert_eq!(pattern.variants, vec![parsed]);
}

#[test]
fn dash_suffixed_colors_are_color() {
    let pattern = detect_common_pattern(&["GRIPS - BLACK", "GRIPS - RED"]);
    assert_eq!(pattern.option_name, "Color");
    assert_eq!(pattern.common_base_name, "GRIPS");
    assert_eq!(option_values(&pattern), ["BLACK", "RED"]);
}

#[test]
fn numeric_sizes_after_token_correction() {
    let pattern = detect_common_pattern(&["Boot Size 11", "Boot Size 12", "Boot Size 9"]);
    assert_eq!(pattern.option_name, "Size");
    assert_eq!(pattern.common_base_name, "Boot Size");
    assert_eq!(option_values(&pattern), ["11", "12", "9"]);
}

#[test]
fn every_variant_shares_the_common_base_and_option() {
    let pattern = detect_common_pattern(&["SOCK WOOL (S)", "SOCK WOOL (M)"]);
    for variant in &pattern.variants {
        assert_eq!(variant.base_name, pattern.common_base_name);
        assert_eq!(variant.option_name, pattern.option_name);
    }
}

#[test]
fn exact_duplicates_default_their_values() {
    let pattern = detect_common_pattern(&["HELMET X", "HELMET X"]);
    assert_eq!(pattern.common_base_name, "HELMET X");
    assert_eq!(option_values(&pattern), ["Default", "Default"]);
    assert_eq!(pattern.option_name, "Option");
}

#[test]
fn three_character_prefix_is_trusted() {
    let pattern = detect_common_pattern(&["AB-1", "AB-2"]);
    assert_eq!(pattern.common_base_name, "AB");
    assert_eq!(pattern.option_name, "Size");
    assert_eq!(option_values(&pattern), ["1", "2"]);
}

#[test]
fn short_prefix_falls_back_to_individual_parses() {
    let pattern = detect_common_pattern(&["A-1", "A-2"]);
    assert_eq!(pattern.option_name, "Title");
    assert_eq!(pattern.common_base_name, "A-1");
    assert_eq!(option_values(&pattern), ["Default", "Default"]);
}

#[test]
fn fallback_keeps_agreeing_option_name() {
    let pattern = detect_common_pattern(&["JACKET (S)", "PANTS (M)"]);
    assert_eq!(pattern.option_name, "Size");
    assert_eq!(pattern.common_base_name, "JACKET");
    assert_eq!(pattern.variants[1].base_name, "PANTS");
    assert_eq!(option_values(&pattern), ["S", "M"]);
}

#[test]
fn fallback_with_conflicting_names_degrades_to_option() {
    let pattern = detect_common_pattern(&["JACKET (S)", "GLOVE - RED"]);
    assert_eq!(pattern.option_name, "Option");
    assert!(pattern.variants.iter().all(|v| v.option_name == "Option"));
    assert_eq!(option_values(&pattern), ["S", "RED"]);
}

#[test]
fn split_word_without_separator_falls_back() {
    let pattern = detect_common_pattern(&["Apple", "Application"]);
    assert_eq!(pattern.option_name, "Title");
    assert_eq!(pattern.common_base_name, "Apple");
}

#[test]
fn non_ascii_mismatch_does_not_panic() {
    let pattern = detect_common_pattern(&["CAFÉ", "CAFE"]);
    assert_eq!(pattern.variants.len(), 2);
}

#[test]
fn accepts_owned_strings() {
    let descriptions = vec!["GRIPS - BLACK".to_string(), "GRIPS - RED".to_string()];
    let pattern = detect_common_pattern(&descriptions);
    assert_eq!(pattern.option_name, "Color");
}

#[test]
fn accented_letters_count_as_edge_punctuation() {
    let pattern = detect_common_pattern(&["ÉTÉ 1", "ÉTÉ 2"]);
    assert_eq!(pattern.common_base_name, "T");
    assert_eq!(pattern.option_name, "Size");
    assert_eq!(option_values(&pattern), ["1", "2"]);
}
