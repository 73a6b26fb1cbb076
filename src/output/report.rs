//! Report view over a saved analysis, plus the plain-text export blocks

use crate::analysis::checklist::ChecklistRound;
use crate::analysis::company::CompanyIntel;
use crate::analysis::entry::AnalysisEntry;
use crate::analysis::plan::PlanDay;
use crate::analysis::rounds::RoundInfo;
use crate::analysis::scoring::{adjust_score, Confidence};
use crate::analysis::vocabulary::SkillCategory;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How many unrated or practice skills the summary calls out.
pub const WEAK_AREA_LIMIT: usize = 3;

/// Everything a formatter needs, computed once from an entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepReport {
    pub summary: ReadinessSummary,
    pub skill_ratings: Vec<SkillRating>,
    pub metadata: ReportMetadata,
    pub analysis: AnalysisEntry,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSummary {
    /// Live score: base score adjusted by the current confidence map.
    pub score: u8,
    pub base_score: u8,
    pub readiness: ReadinessLevel,
    pub weak_areas: Vec<String>,
    pub known_skills: usize,
    pub total_skills: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRating {
    pub skill: String,
    pub category: SkillCategory,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzed_at: DateTime<Utc>,
    pub tool_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadinessLevel {
    Ready,
    Close,
    Developing,
    EarlyStage,
}

impl ReadinessLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => ReadinessLevel::Ready,
            65..=79 => ReadinessLevel::Close,
            50..=64 => ReadinessLevel::Developing,
            _ => ReadinessLevel::EarlyStage,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadinessLevel::Ready => "Interview ready",
            ReadinessLevel::Close => "Almost there",
            ReadinessLevel::Developing => "Needs focused prep",
            ReadinessLevel::EarlyStage => "Start with fundamentals",
        }
    }
}

impl PrepReport {
    pub fn from_entry(entry: &AnalysisEntry) -> Self {
        let flat = entry.flat_skills();
        let score = adjust_score(entry.base_score, &entry.skill_confidence_map, &flat);

        let skill_ratings: Vec<SkillRating> = entry
            .extracted_skills
            .iter()
            .flat_map(|(category, skills)| {
                skills.iter().map(move |skill| SkillRating {
                    skill: skill.clone(),
                    category,
                    confidence: entry.confidence_of(skill),
                })
            })
            .collect();

        let known_skills = skill_ratings
            .iter()
            .filter(|r| r.confidence == Confidence::Know)
            .count();

        Self {
            summary: ReadinessSummary {
                score,
                base_score: entry.base_score,
                readiness: ReadinessLevel::from_score(score),
                weak_areas: entry.weak_areas(WEAK_AREA_LIMIT),
                known_skills,
                total_skills: skill_ratings.len(),
            },
            skill_ratings,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzed_at: entry.created_at_utc(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            analysis: entry.clone(),
        }
    }

    pub fn intel(&self) -> &CompanyIntel {
        &self.analysis.company_intel
    }
}

/// `Day (focus):` followed by indented tasks, blocks separated by a blank line.
pub fn plan_text(plan: &[PlanDay]) -> String {
    plan.iter()
        .map(|day| {
            let tasks: Vec<String> = day.tasks.iter().map(|t| format!("  - {}", t)).collect();
            format!("{} ({}):\n{}", day.day, day.focus, tasks.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn checklist_text(checklist: &[ChecklistRound]) -> String {
    checklist
        .iter()
        .map(|round| {
            let items: Vec<String> = round.items.iter().map(|i| format!("  - {}", i)).collect();
            format!("[ ] {}:\n{}", round.round, items.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn questions_text(questions: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rounds_text(rounds: &[RoundInfo]) -> String {
    if rounds.is_empty() {
        return "N/A".to_string();
    }
    rounds
        .iter()
        .map(|r| format!("{}: {} - {}", r.stage, r.name, r.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The downloadable plain-text analysis.
pub fn export_text(report: &PrepReport) -> String {
    let entry = &report.analysis;
    let skills: Vec<String> = report
        .skill_ratings
        .iter()
        .map(|r| format!("- {} ({})", r.skill, r.confidence))
        .collect();

    format!(
        "PLACEMENT PREP ANALYSIS\n\n\
         Role: {}\nCompany: {} ({})\n\
         Focus: {}\nScore: {}/100\n\n\
         INTERVIEW ROUNDS:\n{}\n\n\
         SKILLS:\n{}\n\n\
         7-DAY PLAN:\n{}\n\n\
         CHECKLIST:\n{}\n\n\
         QUESTIONS:\n{}",
        entry.role,
        entry.company,
        entry.company_intel.size,
        entry.company_intel.focus,
        report.summary.score,
        rounds_text(&entry.round_mapping),
        skills.join("\n"),
        plan_text(&entry.plan_7_days),
        checklist_text(&entry.checklist),
        questions_text(&entry.questions),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::analyze_jd;

    fn sample() -> AnalysisEntry {
        analyze_jd("Acme Retail", "SDE Intern", "We need React, SQL and Python")
    }

    #[test]
    fn test_plan_text_layout() {
        let plan = vec![PlanDay {
            day: "Day 1-2".to_string(),
            focus: "Basics".to_string(),
            tasks: vec!["Revise OOP".to_string(), "Arrays".to_string()],
        }];
        assert_eq!(plan_text(&plan), "Day 1-2 (Basics):\n  - Revise OOP\n  - Arrays");
    }

    #[test]
    fn test_checklist_and_questions_text() {
        let checklist = vec![
            ChecklistRound {
                round: "Round 1".to_string(),
                items: vec!["Aptitude".to_string()],
            },
            ChecklistRound {
                round: "Round 2".to_string(),
                items: vec!["DSA".to_string()],
            },
        ];
        assert_eq!(
            checklist_text(&checklist),
            "[ ] Round 1:\n  - Aptitude\n\n[ ] Round 2:\n  - DSA"
        );
        assert_eq!(
            questions_text(&["A?".to_string(), "B?".to_string()]),
            "1. A?\n2. B?"
        );
        assert_eq!(rounds_text(&[]), "N/A");
    }

    #[test]
    fn test_export_text_sections() {
        let mut entry = sample();
        entry.set_confidence("React", Confidence::Know);
        let report = PrepReport::from_entry(&entry);
        let text = export_text(&report);

        assert!(text.starts_with("PLACEMENT PREP ANALYSIS\n\nRole: SDE Intern\nCompany: Acme Retail (Startup)\n"));
        assert!(text.contains(&format!("Score: {}/100\n", entry.final_score)));
        assert!(text.contains("- React (know)"));
        assert!(text.contains("- SQL (practice)"));
        for header in ["INTERVIEW ROUNDS:\n", "SKILLS:\n", "7-DAY PLAN:\n", "CHECKLIST:\n", "QUESTIONS:\n1. "] {
            assert!(text.contains(header), "missing {}", header);
        }
    }

    #[test]
    fn test_summary_tracks_live_score() {
        let mut entry = sample();
        entry.set_confidence("Python", Confidence::Know);
        let report = PrepReport::from_entry(&entry);

        assert_eq!(report.summary.score, entry.final_score);
        assert_eq!(report.summary.known_skills, 1);
        assert_eq!(report.summary.total_skills, 3);
        assert_eq!(report.summary.weak_areas, vec!["React", "SQL"]);
    }

    #[test]
    fn test_readiness_levels() {
        assert_eq!(ReadinessLevel::from_score(100), ReadinessLevel::Ready);
        assert_eq!(ReadinessLevel::from_score(70), ReadinessLevel::Close);
        assert_eq!(ReadinessLevel::from_score(50), ReadinessLevel::Developing);
        assert_eq!(ReadinessLevel::from_score(0), ReadinessLevel::EarlyStage);
    }
}
