//! Readiness scoring: the base score at analysis time and the live score
//! recomputed from self-rated confidence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

const BASE_POINTS: u32 = 35;
const POINTS_PER_SKILL: u32 = 4;
const SKILL_POINTS_CAP: u32 = 30;
const COMPANY_POINTS: u32 = 10;
const ROLE_POINTS: u32 = 10;
const LONG_JD_POINTS: u32 = 15;
const LONG_JD_CHARS: usize = 800;

const CONFIDENCE_STEP: i32 = 2;

/// Self-rated confidence for one detected skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    Practice,
}

impl Confidence {
    pub fn toggled(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice => Confidence::Know,
        }
    }

    fn delta(self) -> i32 {
        match self {
            Confidence::Know => CONFIDENCE_STEP,
            Confidence::Practice => -CONFIDENCE_STEP,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Know => write!(f, "know"),
            Confidence::Practice => write!(f, "practice"),
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "know" => Ok(Confidence::Know),
            "practice" => Ok(Confidence::Practice),
            other => Err(format!("Invalid confidence: {}. Supported: know, practice", other)),
        }
    }
}

/// Keyed by skill name; ordered so persisted JSON is stable.
pub type ConfidenceMap = BTreeMap<String, Confidence>;

/// Score from skill count and input completeness.
///
/// `35 + min(4 * skills, 30) + 10 (company) + 10 (role) + 15 (JD over 800 chars)`,
/// capped at 100. The JD length is measured in characters.
pub fn calculate_base_score(flat_skills: &[String], company: &str, role: &str, jd_text: &str) -> u8 {
    let mut score = BASE_POINTS;

    let skill_points = (flat_skills.len() as u32).saturating_mul(POINTS_PER_SKILL);
    score += skill_points.min(SKILL_POINTS_CAP);

    if company.trim().chars().count() > 1 {
        score += COMPANY_POINTS;
    }
    if role.trim().chars().count() > 1 {
        score += ROLE_POINTS;
    }
    if jd_text.chars().count() > LONG_JD_CHARS {
        score += LONG_JD_POINTS;
    }

    score.min(MAX_SCORE as u32) as u8
}

/// Live score: `base_score` plus 2 per known skill, minus 2 per skill to practice.
///
/// Always recomputed from the base score and the whole map, so applying the
/// same map twice gives the same answer. Map entries for skills outside
/// `flat_skills` are ignored.
pub fn adjust_score(base_score: u8, confidence: &ConfidenceMap, flat_skills: &[String]) -> u8 {
    let delta: i32 = flat_skills
        .iter()
        .filter_map(|skill| confidence.get(skill))
        .map(|level| level.delta())
        .sum();

    (base_score as i32 + delta).clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}
