use tracing::debug;

use crate::core::{filters::is_eligible, scoring::calculate_compatibility};
use crate::models::{Person, ScoredCandidate, ScoringWeights};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filtering (not the seeker, has an open slot)
/// 2. Compatibility scoring
/// 3. Ranking by score, highest first
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank candidate mentors for a seeker
    ///
    /// # Arguments
    /// * `seeker` - The user looking for a mentor
    /// * `candidates` - The pool to rank; records are cloned, never modified
    /// * `limit` - Maximum number of matches to return, `None` for all
    ///
    /// # Returns
    /// MatchResult containing scored and ranked matches
    pub fn find_matches(
        &self,
        seeker: &Person,
        candidates: &[Person],
        limit: Option<usize>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            // Stage 1: Eligibility
            .filter(|candidate| is_eligible(candidate, seeker))
            // Stage 2: Scoring
            .map(|candidate| {
                let breakdown = calculate_compatibility(seeker, candidate, &self.weights);
                debug!(
                    candidate_id = %candidate.id,
                    skill = breakdown.skill,
                    interest = breakdown.interest,
                    mentor_load = breakdown.mentor_load,
                    style = breakdown.style,
                    match_score = breakdown.match_score,
                    "Scored candidate"
                );

                ScoredCandidate::new(candidate.clone(), breakdown.match_score)
            })
            .collect();

        let eligible_candidates = scored.len();

        // Stage 3: Rank by score (descending)
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if let Some(limit) = limit {
            scored.truncate(limit);
        }

        debug!(
            seeker_id = %seeker.id,
            total_candidates,
            eligible_candidates,
            returned = scored.len(),
            "Ranked mentor candidates"
        );

        MatchResult {
            matches: scored,
            total_candidates,
            eligible_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank every eligible candidate for a seeker using the default weights
pub fn find_top_mentors(seeker: &Person, candidates: &[Person]) -> Vec<ScoredCandidate> {
    Matcher::with_default_weights()
        .find_matches(seeker, candidates, None)
        .matches
}
