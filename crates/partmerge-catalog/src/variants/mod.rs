//! Variant pattern detection for free-text supplier descriptions.
//!
//! Suppliers publish one row per SKU with the size or color baked into the
//! description, e.g. `"PRIORITY GTX JACKET - BLACK (S)"`. The functions here
//! recover a shared base name, an option label (`"Size"`, `"Color"`, ...) and
//! a per-item option value so the rows can be merged into one storefront
//! product with variants.
//!
//! Everything in this module is pure and infallible: malformed input yields a
//! best-effort result (`"Title"` / `"Default"`, singleton groups, or the generic
//! `"Option"` label) rather than an error.

mod classify;
mod group;
mod parse;
mod pattern;

pub use classify::guess_option_name;
pub use group::{group_items, Described, ItemGroups};
pub use parse::{parse, ParsedVariant};
pub use pattern::{detect_common_pattern, CommonPattern};

/// Option labels produced by the detector.
pub mod option_names {
    /// No variant marker was found; the item stands alone.
    pub const TITLE: &str = "Title";
    /// Dash-separated suffix of unknown kind (often color plus size).
    pub const VARIANT: &str = "Variant";
    pub const SIZE: &str = "Size";
    pub const TIRE_SIZE: &str = "Tire Size";
    pub const COLOR: &str = "Color";
    /// Generic fallback when classification is inconclusive.
    pub const OPTION: &str = "Option";
}

/// Option value used when no differentiating fragment exists.
pub const DEFAULT_OPTION_VALUE: &str = "Default";
