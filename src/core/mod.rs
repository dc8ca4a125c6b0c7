// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod weights;

pub use filters::{filter_creators, matches_criteria, parse_criteria};
pub use matcher::Matcher;
pub use scoring::calculate_match_score;
pub use weights::{platform_multiplier, weights_for};
