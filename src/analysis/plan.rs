//! Seven-day study plan

use crate::analysis::skills::has_any_skill;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

impl PlanDay {
    fn new(day: &str, focus: impl Into<String>, tasks: &[&str]) -> Self {
        Self {
            day: day.to_string(),
            focus: focus.into(),
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Day-5 emphasis: frontend beats backend, backend beats fundamentals.
fn focus_area(flat_skills: &[String]) -> &'static str {
    if has_any_skill(flat_skills, &["React"]) {
        "Frontend & UI"
    } else if has_any_skill(flat_skills, &["Java", "Python"]) {
        "Backend & Logic"
    } else {
        "Fundamentals"
    }
}

pub fn generate_plan(flat_skills: &[String]) -> Vec<PlanDay> {
    let focus = focus_area(flat_skills);
    let revise = format!("Revise {} interview questions", focus);

    vec![
        PlanDay::new(
            "Day 1-2",
            "Basics + Core CS",
            &[
                "Revise OOP concepts",
                "Practice SQL queries (Joins, Group By)",
                "OS: Virtual Memory & Paging",
            ],
        ),
        PlanDay::new(
            "Day 3-4",
            "DSA + Coding",
            &[
                "Solve 10 LeetCode Easy/Medium problems",
                "Implement Stack/Queue from scratch",
                "Revisiting Sorting Algorithms",
            ],
        ),
        PlanDay::new(
            "Day 5",
            format!("Project + {}", focus),
            &[
                "Explain project architecture clearly",
                "Prepare answers for 'Challenges faced'",
                revise.as_str(),
            ],
        ),
        PlanDay::new(
            "Day 6",
            "Mock Interview",
            &[
                "Self-record introduction",
                "Detailed behavioral answers (STAR method)",
                "Timed coding test",
            ],
        ),
        PlanDay::new(
            "Day 7",
            "Revision",
            &[
                "Review weak areas from mock",
                "Cheatsheet for quick revision",
                "Relax & sleep well",
            ],
        ),
    ]
}
