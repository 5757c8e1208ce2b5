// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Person, ScoreBreakdown, ScoredCandidate, ScoringWeights, Skill, SkillLevel, LEVEL_COUNT,
};
pub use requests::{FindMentorsRequest, InvalidRecord};
pub use responses::FindMentorsResponse;
