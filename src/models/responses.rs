use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCandidate;

/// Ranked mentors for a seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMentorsResponse {
    #[serde(rename = "seekerId")]
    pub seeker_id: String,
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
}
