//! The persisted analysis record and its self-assessment mutations

use crate::analysis::checklist::ChecklistRound;
use crate::analysis::company::CompanyIntel;
use crate::analysis::plan::PlanDay;
use crate::analysis::rounds::RoundInfo;
use crate::analysis::scoring::{adjust_score, Confidence, ConfidenceMap};
use crate::analysis::skills::SkillCategories;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One analyzed job description. Field names match the persisted JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEntry {
    pub id: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds; bumped on every mutation.
    pub updated_at: i64,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: SkillCategories,
    #[serde(rename = "plan7Days")]
    pub plan_7_days: Vec<PlanDay>,
    pub checklist: Vec<ChecklistRound>,
    pub questions: Vec<String>,
    pub base_score: u8,
    pub final_score: u8,
    #[serde(default)]
    pub skill_confidence_map: ConfidenceMap,
    pub company_intel: CompanyIntel,
    pub round_mapping: Vec<RoundInfo>,
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl AnalysisEntry {
    pub fn flat_skills(&self) -> Vec<String> {
        self.extracted_skills.flatten()
    }

    pub fn has_detected_skill(&self, skill: &str) -> bool {
        self.extracted_skills
            .iter()
            .any(|(_, skills)| skills.iter().any(|s| s == skill))
    }

    /// Detected skill matching `name` case-insensitively, in its canonical spelling.
    pub fn resolve_skill(&self, name: &str) -> Option<String> {
        let wanted = name.trim().to_lowercase();
        self.flat_skills()
            .into_iter()
            .find(|skill| skill.to_lowercase() == wanted)
    }

    /// Recorded confidence, or `Practice` when the skill was never rated.
    pub fn confidence_of(&self, skill: &str) -> Confidence {
        self.skill_confidence_map
            .get(skill)
            .copied()
            .unwrap_or(Confidence::Practice)
    }

    /// Rate one detected skill. Returns `false` (and changes nothing) for
    /// skills that were not detected in this entry.
    pub fn set_confidence(&mut self, skill: &str, level: Confidence) -> bool {
        if !self.has_detected_skill(skill) {
            return false;
        }
        self.skill_confidence_map.insert(skill.to_string(), level);
        self.refresh_final_score();
        true
    }

    /// Flip a skill between `know` and `practice`; an unrated skill becomes `know`.
    pub fn toggle_skill(&mut self, skill: &str) -> Option<Confidence> {
        let next = self.confidence_of(skill).toggled();
        self.set_confidence(skill, next).then_some(next)
    }

    /// Replace the whole confidence map. Entries for undetected skills are dropped.
    pub fn apply_confidence_map(&mut self, map: ConfidenceMap) {
        self.skill_confidence_map = map
            .into_iter()
            .filter(|(skill, _)| self.has_detected_skill(skill))
            .collect();
        self.refresh_final_score();
    }

    fn refresh_final_score(&mut self) {
        self.final_score = adjust_score(
            self.base_score,
            &self.skill_confidence_map,
            &self.flat_skills(),
        );
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = now_millis().max(self.updated_at);
    }

    /// First `limit` detected skills not yet rated `know`.
    pub fn weak_areas(&self, limit: usize) -> Vec<String> {
        self.flat_skills()
            .into_iter()
            .filter(|skill| self.confidence_of(skill) != Confidence::Know)
            .take(limit)
            .collect()
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.created_at)
            .single()
            .unwrap_or_else(Utc::now)
    }

    pub fn display_company(&self) -> &str {
        non_empty_or(&self.company, "Unknown Company")
    }

    pub fn display_role(&self) -> &str {
        non_empty_or(&self.role, "Unknown Role")
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
