//! Per-round preparation checklist

use crate::analysis::skills::StackSignals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round: String,
    pub items: Vec<String>,
}

impl ChecklistRound {
    fn new(round: &str, items: &[&str]) -> Self {
        Self {
            round: round.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn generate_checklist(flat_skills: &[String]) -> Vec<ChecklistRound> {
    let stack = StackSignals::from_skills(flat_skills);

    let stack_items = [
        if stack.frontend { "React Lifecycle & Hooks" } else { "Project Architecture" },
        if stack.frontend { "CSS Box Model & Flexbox" } else { "API Design Principles" },
        if stack.backend { "Database Indexing & ACID properties" } else { "State Management" },
        "Deep dive into Resume Projects",
        "System Design Basics (Scalability, Caching)",
    ];

    vec![
        ChecklistRound::new(
            "Round 1: Aptitude / Basics",
            &[
                "Quantitative Aptitude (Time & Work, Profit & Loss)",
                "Logical Reasoning (Puzzles, Blood Relations)",
                "Verbal Ability (Reading Comprehension)",
                "Basic Programming Output questions",
            ],
        ),
        ChecklistRound::new(
            "Round 2: DSA + Core CS",
            &[
                "Arrays & Strings common problems",
                "Linked Lists & Stacks basics",
                "DBMS: Normalization & SQL Queries",
                "OS: Process Management & Threads",
                "OOP Concepts: Pillars & Examples",
            ],
        ),
        ChecklistRound::new("Round 3: Tech Interview (Stack)", &stack_items),
        ChecklistRound::new(
            "Round 4: Managerial / HR",
            &[
                "Why this company/role?",
                "Strengths & Weaknesses",
                "Conflict resolution situation",
                "Salary expectations negotiation",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_checklist_has_four_rounds() {
        let checklist = generate_checklist(&[]);
        assert_eq!(checklist.len(), 4);
        assert_eq!(checklist[0].round, "Round 1: Aptitude / Basics");
        assert_eq!(checklist[3].items.len(), 4);
    }

    #[test]
    fn test_frontend_stack_items() {
        let checklist = generate_checklist(&skills(&["React"]));
        assert_eq!(checklist[2].items[0], "React Lifecycle & Hooks");
        assert_eq!(checklist[2].items[1], "CSS Box Model & Flexbox");
        assert_eq!(checklist[2].items[2], "State Management");
    }

    #[test]
    fn test_backend_stack_items() {
        let checklist = generate_checklist(&skills(&["Node.js", "SQL"]));
        assert_eq!(checklist[2].items[0], "Project Architecture");
        assert_eq!(checklist[2].items[1], "API Design Principles");
        assert_eq!(checklist[2].items[2], "Database Indexing & ACID properties");
    }
}
