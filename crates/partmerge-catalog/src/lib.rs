pub mod draft;
pub mod error;
pub mod feed;
pub mod grouping;
pub mod search;
pub mod variants;

pub use draft::{build_draft, select_items_by_sku, DraftOverrides};
pub use error::{DraftError, FeedError};
pub use feed::{load_feed, parse_feed, FeedRow};
pub use grouping::group_catalog;
pub use search::search_feed;
pub use variants::{
    detect_common_pattern, group_items, guess_option_name, parse, CommonPattern, Described,
    ItemGroups, ParsedVariant,
};
