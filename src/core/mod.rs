// Core algorithm exports
pub mod filters;
pub mod load;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod skills;

pub use filters::is_eligible;
pub use load::calculate_load_score;
pub use matcher::{find_top_mentors, MatchResult, Matcher};
pub use scoring::{calculate_compatibility, calculate_match_score, calculate_style_score};
pub use similarity::jaccard_similarity;
pub use skills::calculate_skill_match;
