use crate::core::{
    load::calculate_load_score, similarity::jaccard_similarity, skills::calculate_skill_match,
};
use crate::models::{Person, ScoreBreakdown, ScoringWeights};

/// Style score given when seeker and candidate prefer different styles
pub const STYLE_MISMATCH_SCORE: f64 = 0.25;

/// Calculate a compatibility breakdown for a candidate against a seeker
///
/// Scoring formula (default weights):
/// score = round(
///     skill_score * 40 +         # Candidate teaches wanted skills above the seeker's level
///     interest_score * 20 +      # Jaccard overlap of interest tags
///     mentor_load_score * 25 +   # Share of capacity still open
///     style_score * 15           # 1 on exact style match, 0.25 otherwise
/// )
pub fn calculate_compatibility(
    seeker: &Person,
    candidate: &Person,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let skill = calculate_skill_match(&seeker.skills_to_learn, &candidate.skills_to_teach);
    let interest = jaccard_similarity(seeker.interests.as_slice(), candidate.interests.as_slice());
    let mentor_load = calculate_load_score(candidate);
    let style = calculate_style_score(&seeker.style, &candidate.style);

    let total = skill * weights.skill
        + interest * weights.interest
        + mentor_load * weights.mentor_load
        + style * weights.style;

    ScoreBreakdown {
        skill,
        interest,
        mentor_load,
        style,
        match_score: total.min(100.0).max(0.0).round() as u8,
    }
}

/// Calculate the integer match score (0-100) for a candidate
#[inline]
pub fn calculate_match_score(seeker: &Person, candidate: &Person, weights: &ScoringWeights) -> u8 {
    calculate_compatibility(seeker, candidate, weights).match_score
}

/// Calculate style score (0.25 or 1)
/// Style is a soft preference: a mismatch lowers the score but never zeroes it
#[inline]
pub fn calculate_style_score(seeker_style: &str, candidate_style: &str) -> f64 {
    if seeker_style == candidate_style {
        1.0
    } else {
        STYLE_MISMATCH_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn create_test_person(id: &str, style: &str) -> Person {
        Person {
            id: id.to_string(),
            name: None,
            skills_to_learn: vec![],
            skills_to_teach: vec![],
            interests: vec![],
            style: style.to_string(),
            capacity: 1,
            current_mentees: 1,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_style_score() {
        assert_eq!(calculate_style_score("1-on-1", "1-on-1"), 1.0);
        assert_eq!(calculate_style_score("1-on-1", "Group Sessions"), 0.25);
        // Exact match only
        assert_eq!(calculate_style_score("Mixed", "mixed"), 0.25);
    }

    #[test]
    fn test_style_floor_only() {
        let seeker = create_test_person("s", "1-on-1");
        let candidate = create_test_person("c", "Mixed");

        let breakdown = calculate_compatibility(&seeker, &candidate, &ScoringWeights::default());

        assert_eq!(breakdown.skill, 0.0);
        assert_eq!(breakdown.interest, 0.0);
        assert_eq!(breakdown.mentor_load, 0.0);
        assert_eq!(breakdown.match_score, 4);
    }

    #[test]
    fn test_perfect_match() {
        let mut seeker = create_test_person("s", "Mixed");
        seeker.skills_to_learn = vec![Skill::new("X", "Beginner")];
        seeker.interests = vec!["music".to_string(), "chess".to_string()];

        let mut candidate = create_test_person("c", "Mixed");
        candidate.skills_to_teach = vec![Skill::new("X", "Expert")];
        candidate.interests = vec!["chess".to_string(), "music".to_string()];
        candidate.capacity = 1;
        candidate.current_mentees = 0;

        assert_eq!(calculate_match_score(&seeker, &candidate, &ScoringWeights::default()), 100);
    }

    #[test]
    fn test_fractional_totals_round_to_nearest() {
        // 0.5 * 25 + 0.25 * 15 = 12.5 + 3.75 = 16.25 -> 16
        let seeker = create_test_person("s", "a");
        let mut candidate = create_test_person("c", "b");
        candidate.capacity = 2;
        candidate.current_mentees = 1;
        assert_eq!(calculate_match_score(&seeker, &candidate, &ScoringWeights::default()), 16);

        // 0.5 * 40 + 0.5 * 25 + 0.25 * 15 = 20 + 12.5 + 3.75 = 36.25 -> 36
        let mut seeker = create_test_person("s", "a");
        seeker.skills_to_learn = vec![Skill::new("X", "Intermediate")];
        candidate.skills_to_teach = vec![Skill::new("X", "Expert")];
        assert_eq!(calculate_match_score(&seeker, &candidate, &ScoringWeights::default()), 36);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 0.5 * 25 + 1 * 15 = 27.5 -> 28
        let seeker = create_test_person("s", "Mixed");
        let mut candidate = create_test_person("c", "Mixed");
        candidate.capacity = 2;
        candidate.current_mentees = 1;

        assert_eq!(calculate_match_score(&seeker, &candidate, &ScoringWeights::default()), 28);
    }

    #[test]
    fn test_custom_weights_are_clamped() {
        let seeker = create_test_person("s", "Mixed");
        let candidate = create_test_person("c", "Mixed");
        let weights = ScoringWeights {
            skill: 0.0,
            interest: 0.0,
            mentor_load: 0.0,
            style: 150.0,
        };

        assert_eq!(calculate_match_score(&seeker, &candidate, &weights), 100);
    }
}
