//! Analysis engine: composes detection, generation and scoring into one entry

use crate::analysis::checklist::generate_checklist;
use crate::analysis::company::profile_company;
use crate::analysis::entry::{now_millis, AnalysisEntry};
use crate::analysis::plan::generate_plan;
use crate::analysis::questions::generate_questions;
use crate::analysis::rounds::map_rounds;
use crate::analysis::scoring::{calculate_base_score, ConfidenceMap};
use crate::analysis::skills::SkillDetector;
use log::debug;
use uuid::Uuid;

/// Holds the compiled skill matchers so repeated analyses reuse them.
pub struct AnalysisEngine {
    detector: SkillDetector,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            detector: SkillDetector::new(),
        }
    }

    /// Analyze a JD. Never fails: empty inputs still yield a complete entry.
    pub fn analyze(&self, company: &str, role: &str, jd_text: &str) -> AnalysisEntry {
        let extracted_skills = self.detector.detect(jd_text);
        let flat_skills = extracted_skills.flatten();

        let checklist = generate_checklist(&flat_skills);
        let plan_7_days = generate_plan(&flat_skills);
        let questions = generate_questions(&flat_skills);
        let base_score = calculate_base_score(&flat_skills, company, role, jd_text);

        let company_intel = profile_company(company, jd_text);
        let round_mapping = map_rounds(&company_intel, &flat_skills);

        debug!(
            "Analyzed JD: {} skills, {} company, {} rounds, base score {}",
            flat_skills.len(),
            company_intel.size,
            round_mapping.len(),
            base_score
        );

        let now = now_millis();
        AnalysisEntry {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            company: company.to_string(),
            role: role.to_string(),
            jd_text: jd_text.to_string(),
            extracted_skills,
            plan_7_days,
            checklist,
            questions,
            base_score,
            final_score: base_score,
            skill_confidence_map: ConfidenceMap::new(),
            company_intel,
            round_mapping,
        }
    }
}

/// Analyze with a freshly built engine.
pub fn analyze_jd(company: &str, role: &str, jd_text: &str) -> AnalysisEntry {
    AnalysisEngine::new().analyze(company, role, jd_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::company::CompanySize;

    const JD: &str = "We need a React developer with TypeScript and Node.js skills. \
                      Experience with AWS and System Design is a plus.";

    #[test]
    fn test_analyze_is_deterministic_except_identity() {
        let engine = AnalysisEngine::new();
        let a = engine.analyze("Acme", "Developer", JD);
        let b = engine.analyze("Acme", "Developer", JD);

        assert_ne!(a.id, b.id);
        assert_eq!(a.extracted_skills, b.extracted_skills);
        assert_eq!(a.checklist, b.checklist);
        assert_eq!(a.plan_7_days, b.plan_7_days);
        assert_eq!(a.questions, b.questions);
        assert_eq!(a.base_score, b.base_score);
        assert_eq!(a.round_mapping, b.round_mapping);
        assert_eq!(a.company_intel, b.company_intel);
    }

    #[test]
    fn test_new_entry_initial_state() {
        let entry = analyze_jd("Acme", "Developer", JD);
        assert_eq!(entry.base_score, entry.final_score);
        assert!(entry.skill_confidence_map.is_empty());
        assert_eq!(entry.created_at, entry.updated_at);
        assert!(entry.base_score <= 100);
        assert_eq!(entry.jd_text, JD);
    }

    #[test]
    fn test_fallback_entry() {
        let entry = analyze_jd("X", "Y", "irrelevant filler text");
        assert_eq!(
            entry.extracted_skills.other,
            vec!["Communication", "Problem solving", "Basic coding", "Projects"]
        );
        // 35 + 4 fallback skills * 4
        assert_eq!(entry.base_score, 51);
        assert_eq!(entry.company_intel.size, CompanySize::Startup);
    }

    #[test]
    fn test_startup_with_system_design_round() {
        let entry = analyze_jd("Acme Startup", "Developer", JD);
        let names: Vec<&str> = entry.round_mapping.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[2], "System Design / Architecture");
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_empty_inputs_still_produce_entry() {
        let entry = analyze_jd("", "", "");
        assert_eq!(entry.base_score, 51);
        assert_eq!(entry.questions.len(), 6);
        assert_eq!(entry.checklist.len(), 4);
        assert_eq!(entry.plan_7_days.len(), 5);
    }
}
