//! Skill detection against the fixed vocabulary

use crate::analysis::vocabulary::{SkillCategory, FALLBACK_SKILLS, SHORT_TOKEN_MAX_LEN};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Detected skills grouped by category. Every category is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategories {
    #[serde(rename = "coreCS", default)]
    pub core_cs: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub web: Vec<String>,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub cloud: Vec<String>,
    #[serde(default)]
    pub testing: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl SkillCategories {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::CoreCs => &self.core_cs,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Web => &self.web,
            SkillCategory::Data => &self.data,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Testing => &self.testing,
            SkillCategory::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::CoreCs => &mut self.core_cs,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Web => &mut self.web,
            SkillCategory::Data => &mut self.data,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Testing => &mut self.testing,
            SkillCategory::Other => &mut self.other,
        }
    }

    /// Categories paired with their skills, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> + '_ {
        SkillCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Category order first, then vocabulary order within each category.
    pub fn flatten(&self) -> Vec<String> {
        self.iter().flat_map(|(_, skills)| skills.iter().cloned()).collect()
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, skills)| skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Case-insensitive substring containment of `term` within any detected skill.
///
/// Every generator goes through this one predicate so that "Java" matches
/// both "Java" and "JavaScript" everywhere, and "Node" matches "Node.js".
pub fn has_skill(flat_skills: &[String], term: &str) -> bool {
    let term = term.to_lowercase();
    flat_skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(&term))
}

/// True when any of `terms` satisfies [`has_skill`].
pub fn has_any_skill(flat_skills: &[String], terms: &[&str]) -> bool {
    terms.iter().any(|term| has_skill(flat_skills, term))
}

const FRONTEND_TERMS: &[&str] = &["React", "JavaScript", "HTML"];
const BACKEND_TERMS: &[&str] = &["Node", "Java", "Python", "SQL"];

/// Coarse stack orientation used to pick template wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSignals {
    pub frontend: bool,
    pub backend: bool,
}

impl StackSignals {
    pub fn from_skills(flat_skills: &[String]) -> Self {
        Self {
            frontend: has_any_skill(flat_skills, FRONTEND_TERMS),
            backend: has_any_skill(flat_skills, BACKEND_TERMS),
        }
    }
}

enum TokenMatcher {
    /// Short tokens like "Go", "C#", "C++" need a non-word neighbour or a text edge on both sides.
    Boundary(Regex),
    /// Index into the substring automaton's pattern list.
    Substring(usize),
}

struct VocabEntry {
    category: SkillCategory,
    skill: &'static str,
    matcher: TokenMatcher,
}

/// Scans JD text for vocabulary skills.
pub struct SkillDetector {
    entries: Vec<VocabEntry>,
    substring_matcher: AhoCorasick,
}

impl Default for SkillDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillDetector {
    pub fn new() -> Self {
        let mut entries = Vec::new();
        let mut long_patterns: Vec<String> = Vec::new();

        for category in SkillCategory::ALL {
            for &skill in category.skills() {
                let lowered = skill.to_lowercase();
                let matcher = if skill.chars().count() <= SHORT_TOKEN_MAX_LEN {
                    TokenMatcher::Boundary(Self::boundary_regex(&lowered))
                } else {
                    long_patterns.push(lowered);
                    TokenMatcher::Substring(long_patterns.len() - 1)
                };
                entries.push(VocabEntry {
                    category,
                    skill,
                    matcher,
                });
            }
        }

        // Standard match kind so overlapping hits ("java" inside "javascript") are all reported
        let substring_matcher = AhoCorasick::new(&long_patterns)
            .expect("Invalid skill vocabulary patterns");

        Self {
            entries,
            substring_matcher,
        }
    }

    /// `\b` is not enough here: in "c++ " there is no word boundary after the
    /// second '+', so the edges are spelled out as text start/end or a
    /// non-word character.
    fn boundary_regex(lowered_skill: &str) -> Regex {
        let pattern = format!(
            r"(?i)(?:^|[^0-9a-z_]){}(?:$|[^0-9a-z_])",
            regex::escape(lowered_skill)
        );
        Regex::new(&pattern).expect("Invalid skill boundary regex")
    }

    /// Detect skills in `jd_text`, grouped by category in vocabulary order.
    pub fn detect(&self, jd_text: &str) -> SkillCategories {
        let lower = jd_text.to_lowercase();

        let substring_hits: HashSet<usize> = self
            .substring_matcher
            .find_overlapping_iter(lower.as_str())
            .map(|mat| mat.pattern().as_usize())
            .collect();

        let mut detected = SkillCategories::default();
        for entry in &self.entries {
            let found = match &entry.matcher {
                TokenMatcher::Boundary(regex) => regex.is_match(&lower),
                TokenMatcher::Substring(index) => substring_hits.contains(index),
            };
            if found {
                detected.get_mut(entry.category).push(entry.skill.to_string());
            }
        }

        if detected.is_empty() {
            debug!("No vocabulary skills found, using fallback skill list");
            detected.other = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
        } else {
            debug!("Detected {} skills", detected.total());
        }

        detected
    }
}
