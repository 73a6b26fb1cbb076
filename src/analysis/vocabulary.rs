//! Fixed skill vocabulary, grouped by category

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven skill buckets, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    #[serde(rename = "coreCS")]
    CoreCs,
    Languages,
    Web,
    Data,
    Cloud,
    Testing,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::CoreCs,
        SkillCategory::Languages,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Other,
    ];

    /// Known skills for this category, in vocabulary order.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            SkillCategory::CoreCs => CORE_CS,
            SkillCategory::Languages => LANGUAGES,
            SkillCategory::Web => WEB,
            SkillCategory::Data => DATA,
            SkillCategory::Cloud => CLOUD,
            SkillCategory::Testing => TESTING,
            SkillCategory::Other => OTHER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::Cloud => "Cloud / DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const CORE_CS: &[&str] = &[
    "DSA",
    "OOP",
    "DBMS",
    "OS",
    "Networks",
    "Data Structures",
    "Algorithms",
    "Object Oriented",
    "System Design",
];

const LANGUAGES: &[&str] = &[
    "Java",
    "Python",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "PHP",
    "Ruby",
];

const WEB: &[&str] = &[
    "React", "Next.js", "Node.js", "Express", "REST", "GraphQL", "HTML", "CSS", "Tailwind",
    "Redux", "Angular", "Vue",
];

const DATA: &[&str] = &[
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "NoSQL",
    "Database",
    "Elasticsearch",
    "Kafka",
];

const CLOUD: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Linux",
    "Git",
    "Jenkins",
    "Terraform",
];

const TESTING: &[&str] = &["Selenium", "Cypress", "Playwright", "JUnit", "PyTest", "Jest", "TDD"];

const OTHER: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Agile",
    "Scrum",
    "Jira",
    "Leadership",
];

/// Placeholder skills used when a JD matches nothing in the vocabulary.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem solving", "Basic coding", "Projects"];

/// Tokens at or below this many characters need an explicit boundary match.
pub const SHORT_TOKEN_MAX_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_entries_unique_per_category() {
        for category in SkillCategory::ALL {
            let skills = category.skills();
            let unique: HashSet<_> = skills.iter().collect();
            assert_eq!(unique.len(), skills.len(), "duplicate in {}", category);
        }
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(serde_json::to_string(&SkillCategory::CoreCs).unwrap(), "\"coreCS\"");
        assert_eq!(serde_json::to_string(&SkillCategory::Languages).unwrap(), "\"languages\"");
    }
}
