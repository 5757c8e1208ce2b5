use std::collections::HashMap;

use crate::models::{Skill, LEVEL_COUNT};

/// Calculate how well a candidate's taught skills cover a seeker's wanted skills (0-1)
///
/// For each wanted skill the candidate teaches at a strictly higher level, the
/// level gap is normalized by `LEVEL_COUNT - 1` and added up; the sum is then
/// averaged over every wanted skill, so uncovered skills pull the score down.
///
/// When a candidate lists the same skill name more than once, the last entry
/// wins, even if it is lower or unrecognized.
pub fn calculate_skill_match(skills_to_learn: &[Skill], skills_to_teach: &[Skill]) -> f64 {
    if skills_to_learn.is_empty() {
        return 0.0;
    }

    let taught: HashMap<&str, Option<u8>> = skills_to_teach
        .iter()
        .map(|skill| (skill.name.as_str(), skill.level.rank()))
        .collect();

    let max_gap = f64::from(LEVEL_COUNT - 1);

    let total: f64 = skills_to_learn
        .iter()
        .map(|wanted| {
            match (taught.get(wanted.name.as_str()).copied().flatten(), wanted.level.rank()) {
                (Some(mentor_rank), Some(seeker_rank)) if mentor_rank > seeker_rank => {
                    f64::from(mentor_rank - seeker_rank) / max_gap
                }
                _ => 0.0,
            }
        })
        .sum();

    total / skills_to_learn.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_wanted_skills() {
        let teach = vec![Skill::new("Rust", "Expert")];
        assert_eq!(calculate_skill_match(&[], &teach), 0.0);
    }

    #[test]
    fn test_full_gap_scores_one() {
        let learn = vec![Skill::new("Rust", "Beginner")];
        let teach = vec![Skill::new("Rust", "Expert")];

        assert_eq!(calculate_skill_match(&learn, &teach), 1.0);
    }

    #[test]
    fn test_single_level_gap_scores_half() {
        let learn = vec![Skill::new("Rust", "Intermediate")];
        let teach = vec![Skill::new("Rust", "Expert")];

        assert_eq!(calculate_skill_match(&learn, &teach), 0.5);
    }

    #[test]
    fn test_equal_or_lower_level_scores_zero() {
        let learn = vec![Skill::new("Rust", "Expert")];

        assert_eq!(calculate_skill_match(&learn, &[Skill::new("Rust", "Expert")]), 0.0);
        assert_eq!(calculate_skill_match(&learn, &[Skill::new("Rust", "Beginner")]), 0.0);
    }

    #[test]
    fn test_unrelated_skill_names_never_match() {
        let learn = vec![Skill::new("Y", "Expert")];
        let teach = vec![Skill::new("Z", "Expert")];

        assert_eq!(calculate_skill_match(&learn, &teach), 0.0);
    }

    #[test]
    fn test_average_over_all_wanted_skills() {
        let learn = vec![
            Skill::new("Rust", "Beginner"),
            Skill::new("Go", "Beginner"),
        ];
        let teach = vec![Skill::new("Rust", "Expert")];

        assert_eq!(calculate_skill_match(&learn, &teach), 0.5);
    }

    #[test]
    fn test_unrecognized_levels_contribute_zero() {
        let learn = vec![Skill::new("Rust", "Novice")];
        let teach = vec![Skill::new("Rust", "Expert")];
        assert_eq!(calculate_skill_match(&learn, &teach), 0.0);

        let learn = vec![Skill::new("Rust", "Beginner")];
        let teach = vec![Skill::new("Rust", "Wizard")];
        assert_eq!(calculate_skill_match(&learn, &teach), 0.0);
    }

    // Duplicate names resolve to the last listed level rather than the highest.
    // Kept as-is until product intent says otherwise.
    #[test]
    fn test_duplicate_taught_skill_last_entry_wins() {
        let learn = vec![Skill::new("Rust", "Beginner")];

        let teach = vec![Skill::new("Rust", "Expert"), Skill::new("Rust", "Intermediate")];
        assert_eq!(calculate_skill_match(&learn, &teach), 0.5);

        let teach = vec![Skill::new("Rust", "Intermediate"), Skill::new("Rust", "Expert")];
        assert_eq!(calculate_skill_match(&learn, &teach), 1.0);

        let teach = vec![Skill::new("Rust", "Expert"), Skill::new("Rust", "Unknown")];
        assert_eq!(calculate_skill_match(&learn, &teach), 0.0);
    }
}
