//! Orchestration — trigger match, else classify and render; suggestions run
//! independently on the same text.
//!
//! Pure and stateless: safe to call from any number of handlers at once.

use serde::Serialize;
use tracing::debug;

use crate::coach::classifier::{classify, Classification};
use crate::coach::keywords::NormalizedText;
use crate::coach::suggestions::suggest;
use crate::coach::templates::render;
use crate::coach::triggers::{match_trigger, TriggerRule};
use crate::models::profile::UserProfile;

/// Final engine output for one chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachReply {
    pub response: String,
    pub suggestions: Vec<String>,
}

/// Which branch produced the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPath {
    Trigger(&'static TriggerRule),
    Classified(Classification),
}

impl AnswerPath {
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerPath::Trigger(_) => "trigger",
            AnswerPath::Classified(_) => "classified",
        }
    }

    /// Trigger rule name or classification tag.
    pub fn label(&self) -> String {
        match self {
            AnswerPath::Trigger(rule) => rule.name.to_string(),
            AnswerPath::Classified(classification) => classification.tag(),
        }
    }

    /// Response prose for this branch.
    pub fn render(&self, profile: &UserProfile) -> String {
        match self {
            AnswerPath::Trigger(rule) => rule.response.to_string(),
            AnswerPath::Classified(classification) => render(classification, profile),
        }
    }
}

/// Decides the response branch without rendering anything.
pub fn resolve_path(text: &NormalizedText, profile: &UserProfile) -> AnswerPath {
    match match_trigger(text) {
        Some(rule) => AnswerPath::Trigger(rule),
        None => AnswerPath::Classified(classify(text, profile)),
    }
}

/// Answers `text` for `profile`. Deterministic and total over all strings.
pub fn answer(text: &str, profile: &UserProfile) -> CoachReply {
    let normalized = NormalizedText::new(text);
    let path = resolve_path(&normalized, profile);
    let response = path.render(profile);
    let suggestions = suggest(&normalized);

    debug!(
        path = path.kind(),
        label = %path.label(),
        suggestions = suggestions.len(),
        "coach answer resolved"
    );

    CoachReply {
        response,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::classifier::Industry;
    use crate::coach::templates::industry_advice;
    use crate::coach::triggers::TRIGGER_RULES;
    use crate::models::profile::ExperienceLevel;

    fn greeting_response() -> &'static str {
        TRIGGER_RULES
            .iter()
            .find(|r| r.name == "greeting")
            .map(|r| r.response)
            .unwrap()
    }

    #[test]
    fn test_cybersecurity_example() {
        let reply = answer("How do I get into cybersecurity?", &UserProfile::default());
        let record = industry_advice(Industry::Cybersecurity);
        assert!(reply.response.contains(record.trends));
        assert!(reply.response.contains(record.skills));
        assert!(reply.response.contains(record.growth));
        assert!(reply.response.contains(record.certifications));
        assert!(reply.response.contains(record.salary));
        assert_eq!(reply.suggestions.len(), 4);
        assert_eq!(
            reply.suggestions[0],
            "What certifications should I get for cybersecurity?"
        );
    }

    #[test]
    fn test_hello_returns_greeting_verbatim_with_default_suggestions() {
        let reply = answer("hello", &UserProfile::default());
        assert_eq!(reply.response, greeting_response());
        assert_eq!(reply.suggestions[0], "How can I advance in my career?");
    }

    #[test]
    fn test_empty_input_renders_general_block() {
        let reply = answer("", &UserProfile::default());
        assert_eq!(
            resolve_path(&NormalizedText::new(""), &UserProfile::default()),
            AnswerPath::Classified(Classification::General)
        );
        assert!(reply.response.starts_with("I'm here to help you grow your career."));
        assert_eq!(reply.suggestions[0], "How can I advance in my career?");
    }

    #[test]
    fn test_leadership_tables_diverge() {
        let text = "What about leadership?";
        let path = resolve_path(&NormalizedText::new(text), &UserProfile::default());
        assert_eq!(path, AnswerPath::Classified(Classification::Question));

        let reply = answer(text, &UserProfile::default());
        assert_eq!(reply.suggestions[0], "How do I develop my leadership skills?");
    }

    #[test]
    fn test_trigger_precedence_over_classifier() {
        // "interview" triggers even though "cybersecurity" would classify as an industry.
        let text = "cybersecurity interview tips";
        let path = resolve_path(&NormalizedText::new(text), &UserProfile::default());
        assert_eq!(path.kind(), "trigger");
        assert_eq!(path.label(), "interview");

        let reply = answer(text, &UserProfile::default());
        assert!(reply.response.starts_with("**Interview preparation**"));
        assert!(!reply.response.contains("Cybersecurity Career Insights"));
    }

    #[test]
    fn test_synonyms_render_identically() {
        let profile = UserProfile::default();
        let a = answer("I want to work in cyber security", &profile);
        let b = answer("Is infosec a good field", &profile);
        let c = answer("Tell me about penetration testing", &profile);
        assert_eq!(a.response, b.response);
        assert_eq!(b.response, c.response);
    }

    #[test]
    fn test_answer_is_deterministic() {
        let profile = UserProfile {
            experience: Some(ExperienceLevel::Mid),
            skills: vec!["Excel".to_string()],
            ..Default::default()
        };
        for text in ["I'm experienced and feel stuck", "hello", "", "learn SQL?"] {
            assert_eq!(answer(text, &profile), answer(text, &profile));
        }
    }

    #[test]
    fn test_answer_is_total_over_odd_inputs() {
        let inputs = [
            "",
            " ",
            "\n\t",
            "???",
            "1234567890",
            "🚀🚀🚀",
            "ÀÉÎÕÜ",
            "\u{0}",
            "a",
        ];
        for input in inputs {
            let reply = answer(input, &UserProfile::default());
            assert!(!reply.response.trim().is_empty(), "input {input:?}");
            assert!(reply.suggestions.len() <= 4);
        }
    }

    #[test]
    fn test_answer_renders_the_resolved_path() {
        let profile = UserProfile {
            experience: Some(ExperienceLevel::Entry),
            ..Default::default()
        };
        for text in [
            "hello",
            "salary tips",
            "How do I get into cybersecurity?",
            "I'm a junior looking for advice",
            "What should I learn next?",
            "Which path fits me?",
            "",
        ] {
            let path = resolve_path(&NormalizedText::new(text), &profile);
            assert_eq!(answer(text, &profile).response, path.render(&profile), "input {text:?}");
        }
    }

    #[test]
    fn test_answer_path_labels() {
        let trigger = AnswerPath::Trigger(&TRIGGER_RULES[0]);
        assert_eq!(trigger.kind(), "trigger");
        assert_eq!(trigger.label(), "greeting");

        let classified = AnswerPath::Classified(Classification::Industry(Industry::Finance));
        assert_eq!(classified.kind(), "classified");
        assert_eq!(classified.label(), "industry:finance");
    }
}
