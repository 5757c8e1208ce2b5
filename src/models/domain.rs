use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Number of ordinal levels a skill can be taught or learned at
pub const LEVEL_COUNT: u8 = 3;

/// Proficiency level attached to a skill
///
/// Labels outside the three known levels are kept as `Unrecognized` so a
/// record still parses; such a skill simply never contributes to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
    Unrecognized(String),
}

impl SkillLevel {
    /// Ordinal rank (1..=3), or `None` for an unrecognized label
    pub fn rank(&self) -> Option<u8> {
        match self {
            SkillLevel::Beginner => Some(1),
            SkillLevel::Intermediate => Some(2),
            SkillLevel::Expert => Some(3),
            SkillLevel::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
            SkillLevel::Unrecognized(label) => label,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Beginner" => SkillLevel::Beginner,
            "Intermediate" => SkillLevel::Intermediate,
            "Expert" => SkillLevel::Expert,
            _ => SkillLevel::Unrecognized(label),
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(label: &str) -> Self {
        SkillLevel::from(label.to_string())
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// A named skill at a given level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: impl Into<SkillLevel>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

/// A user record as stored in the users collection
///
/// The same shape serves both roles: a seeker is read through
/// `skills_to_learn`, a candidate through `skills_to_teach`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Person {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "skillsToLearn", default, deserialize_with = "null_as_default")]
    pub skills_to_learn: Vec<Skill>,
    #[serde(rename = "skillsToTeach", default, deserialize_with = "null_as_default")]
    pub skills_to_teach: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub style: String,
    pub capacity: u32,
    #[serde(rename = "currentMentees")]
    pub current_mentees: u32,
    /// Remaining document fields, carried through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Person {
    /// Mentoring slots still open; zero when at or over capacity
    pub fn available_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.current_mentees)
    }
}

/// A candidate together with its composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub person: Person,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

impl ScoredCandidate {
    /// Attach a score to a copy of a candidate, replacing any score the record already carried
    pub fn new(mut person: Person, match_score: u8) -> Self {
        person.extra.remove("matchScore");
        Self { person, match_score }
    }
}

/// Per-component sub-scores behind a match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub interest: f64,
    #[serde(rename = "mentorLoad")]
    pub mentor_load: f64,
    pub style: f64,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Scoring weights, expressed as points out of 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub interest: f64,
    pub mentor_load: f64,
    pub style: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.interest + self.mentor_load + self.style
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 40.0,
            interest: 20.0,
            mentor_load: 25.0,
            style: 15.0,
        }
    }
}
