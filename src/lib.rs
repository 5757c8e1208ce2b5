//! Mentor Match - peer mentorship matching
//!
//! This library ranks candidate mentors for a user who wants to learn skills.
//! Each eligible candidate gets a weighted compatibility score built from skill
//! coverage, shared interests, open mentoring capacity and teaching style.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{find_top_mentors, MatchResult, Matcher};
pub use models::{
    FindMentorsRequest, FindMentorsResponse, Person, ScoredCandidate, ScoringWeights, Skill,
    SkillLevel,
};
pub use services::{DirectoryError, UserDirectory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let seeker: Person =
            serde_json::from_str(r#"{"id":"s","capacity":0,"currentMentees":0}"#).unwrap();
        assert!(find_top_mentors(&seeker, &[]).is_empty());
    }
}
