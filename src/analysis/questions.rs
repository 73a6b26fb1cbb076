//! Likely interview questions for the detected stack

use crate::analysis::skills::has_any_skill;

pub const MIN_QUESTIONS: usize = 6;
pub const MAX_QUESTIONS: usize = 10;

/// One question, asked when any of `terms` is among the detected skills.
struct QuestionRule {
    terms: &'static [&'static str],
    question: &'static str,
}

/// Evaluated top to bottom; each rule contributes at most one question.
const QUESTION_RULES: &[QuestionRule] = &[
    QuestionRule {
        terms: &["SQL", "DBMS"],
        question: "Explain indexing and when it helps vs hurts performance.",
    },
    QuestionRule {
        terms: &["React"],
        question: "Explain the Virtual DOM and how React handles updates.",
    },
    QuestionRule {
        terms: &["Node"],
        question: "How does the Event Loop work in Node.js?",
    },
    QuestionRule {
        terms: &["Java"],
        question: "Explain the difference between HashMap and Hashtable.",
    },
    QuestionRule {
        terms: &["Python"],
        question: "What are decorators and generators in Python?",
    },
    QuestionRule {
        terms: &["DSA", "Algorithms"],
        question: "How would you optimize search in a sorted vs unsorted dataset?",
    },
    QuestionRule {
        terms: &["Docker", "Cloud"],
        question: "Explain the concept of containerization vs virtualization.",
    },
    QuestionRule {
        terms: &["JavaScript"],
        question: "Explain Closures and Hoisting with examples.",
    },
];

/// Padding pool, used in order until `MIN_QUESTIONS` is reached.
const GENERIC_QUESTIONS: &[&str] = &[
    "Describe a challenging bug you fixed recently.",
    "How do you handle merge conflicts in Git?",
    "Walk me through the architecture of your strongest project.",
    "How do you approach learning a new technology quickly?",
    "Tell me about a time you disagreed with a teammate and how you resolved it.",
    "How would you test a feature before shipping it to production?",
];

pub fn generate_questions(flat_skills: &[String]) -> Vec<String> {
    let mut questions: Vec<String> = QUESTION_RULES
        .iter()
        .filter(|rule| has_any_skill(flat_skills, rule.terms))
        .map(|rule| rule.question.to_string())
        .collect();

    let padding = MIN_QUESTIONS.saturating_sub(questions.len());
    questions.extend(GENERIC_QUESTIONS.iter().take(padding).map(|q| q.to_string()));

    questions.truncate(MAX_QUESTIONS);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pads_to_minimum_with_generics() {
        let questions = generate_questions(&skills(&["Communication"]));
        assert_eq!(questions.len(), MIN_QUESTIONS);
        assert_eq!(questions[0], GENERIC_QUESTIONS[0]);
        assert_eq!(questions[1], GENERIC_QUESTIONS[1]);
    }

    #[test]
    fn test_rule_order_is_stable() {
        let questions = generate_questions(&skills(&["JavaScript", "SQL", "React"]));
        // JavaScript also satisfies the "Java" rule
        assert_eq!(
            &questions[..4],
            &[
                "Explain indexing and when it helps vs hurts performance.",
                "Explain the Virtual DOM and how React handles updates.",
                "Explain the difference between HashMap and Hashtable.",
                "Explain Closures and Hoisting with examples.",
            ]
        );
        assert_eq!(questions.len(), MIN_QUESTIONS);
    }

    #[test]
    fn test_one_question_per_rule() {
        let questions = generate_questions(&skills(&["SQL", "DBMS", "MySQL"]));
        let indexing = questions
            .iter()
            .filter(|q| q.starts_with("Explain indexing"))
            .count();
        assert_eq!(indexing, 1);
    }

    #[test]
    fn test_all_rules_matched_stays_within_bounds() {
        let questions = generate_questions(&skills(&[
            "DSA", "Java", "Python", "JavaScript", "React", "Node.js", "SQL", "Docker",
        ]));
        assert_eq!(questions.len(), 8);
        assert!(questions.len() <= MAX_QUESTIONS);
        assert!(!questions.contains(&GENERIC_QUESTIONS[0].to_string()));
    }
}
