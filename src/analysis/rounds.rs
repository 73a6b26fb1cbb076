//! Predicted interview-round sequence

use crate::analysis::company::{CompanyIntel, CompanySize};
use crate::analysis::skills::has_any_skill;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub stage: String,
    pub name: String,
    pub description: String,
}

enum RoundText {
    Fixed(&'static str),
    /// Deep-dive wording depends on whether the stack looks frontend-heavy.
    StackFocus,
}

struct RoundRule {
    /// `None` emits the round unconditionally.
    requires_any: Option<&'static [&'static str]>,
    stage: &'static str,
    name: &'static str,
    text: RoundText,
}

const ENTERPRISE_TRACK: &[RoundRule] = &[
    RoundRule {
        requires_any: None,
        stage: "Round 1",
        name: "Online Assessment",
        text: RoundText::Fixed("Aptitude (Quant/Verbal) + 2 medium DSA coding problems."),
    },
    RoundRule {
        requires_any: None,
        stage: "Round 2",
        name: "Technical Interview I",
        text: RoundText::Fixed("Data Structures & Algorithms focus (Trees, Graphs, DP)."),
    },
    RoundRule {
        requires_any: None,
        stage: "Round 3",
        name: "Technical Interview II",
        text: RoundText::Fixed("System Design basics & Core CS concepts (OS, DBMS)."),
    },
    RoundRule {
        requires_any: None,
        stage: "Round 4",
        name: "Managerial / HR",
        text: RoundText::Fixed("Behavioral fit, 'Bar Raiser', and culture alignment."),
    },
];

const STARTUP_TRACK: &[RoundRule] = &[
    RoundRule {
        requires_any: None,
        stage: "Round 1",
        name: "Screening / Assignment",
        text: RoundText::Fixed("Take-home project or practical coding task related to the stack."),
    },
    RoundRule {
        requires_any: None,
        stage: "Round 2",
        name: "Technical Deep Dive",
        text: RoundText::StackFocus,
    },
    RoundRule {
        requires_any: Some(&["System Design", "Cloud"]),
        stage: "Round 3",
        name: "System Design / Architecture",
        text: RoundText::Fixed("High-level design of a feature you've built."),
    },
    RoundRule {
        requires_any: None,
        stage: "Final Round",
        name: "Founder / Culture Fit",
        text: RoundText::Fixed("Passion for the product, ownership mindset, and salary discussion."),
    },
];

/// Map a company profile and detected skills to the expected interview rounds.
pub fn map_rounds(intel: &CompanyIntel, flat_skills: &[String]) -> Vec<RoundInfo> {
    let track = match intel.size {
        CompanySize::Enterprise => ENTERPRISE_TRACK,
        CompanySize::Startup | CompanySize::MidSize => STARTUP_TRACK,
    };

    track
        .iter()
        .filter(|rule| {
            rule.requires_any
                .map_or(true, |terms| has_any_skill(flat_skills, terms))
        })
        .map(|rule| RoundInfo {
            stage: rule.stage.to_string(),
            name: rule.name.to_string(),
            description: describe(&rule.text, flat_skills),
        })
        .collect()
}

fn describe(text: &RoundText, flat_skills: &[String]) -> String {
    match text {
        RoundText::Fixed(s) => s.to_string(),
        RoundText::StackFocus => {
            let focus = if has_any_skill(flat_skills, &["React"]) {
                "Frontend architecture"
            } else {
                "Backend logic"
            };
            format!("In-depth discussion on {} & code review.", focus)
        }
    }
}
