//! Suggestion Generator — follow-up prompts chosen independently of the
//! response path.

use crate::coach::keywords::NormalizedText;

/// Every bucket, including the default, holds exactly this many suggestions.
pub const SUGGESTIONS_PER_BUCKET: usize = 4;

type SuggestionBucket = (&'static [&'static str], [&'static str; SUGGESTIONS_PER_BUCKET]);

/// Evaluated top to bottom; first bucket with a matching keyword wins.
const SUGGESTION_BUCKETS: &[SuggestionBucket] = &[
    (
        &["cyber", "security", "infosec", "penetration", "hacking"],
        [
            "What certifications should I get for cybersecurity?",
            "How do I build a home lab for security practice?",
            "What entry-level security roles should I target?",
            "How do I prepare for a SOC analyst interview?",
        ],
    ),
    (
        &["software", "programming", "developer", "coding", "tech"],
        [
            "Which programming language should I learn next?",
            "How do I build a portfolio that gets noticed?",
            "How do I prepare for technical interviews?",
            "What tech roles are growing fastest?",
        ],
    ),
    (
        &["data", "analytics", "machine learning"],
        [
            "What skills do data scientists need most?",
            "How do I build a data science portfolio?",
            "Should I learn Python or R first?",
            "How do I move from data analyst to data scientist?",
        ],
    ),
    (
        &["leadership", "lead", "manager", "management"],
        [
            "How do I develop my leadership skills?",
            "How do I move from individual contributor to manager?",
            "How can I lead without formal authority?",
            "What makes a great first-time manager?",
        ],
    ),
    (
        &["interview", "job", "resume", "hiring", "apply"],
        [
            "How do I tailor my resume to a job posting?",
            "What are common behavioral interview questions?",
            "How do I follow up after an interview?",
            "How do I negotiate a job offer?",
        ],
    ),
    (
        &["skill", "learn", "course", "certif"],
        [
            "What skills are most in demand right now?",
            "Are online certifications worth it?",
            "How do I create a learning plan?",
            "How do I show new skills on my resume?",
        ],
    ),
];

const DEFAULT_SUGGESTIONS: [&str; SUGGESTIONS_PER_BUCKET] = [
    "How can I advance in my career?",
    "What skills should I develop next?",
    "How do I improve my resume?",
    "How do I prepare for interviews?",
];

/// Follow-up prompts for `text`. Never empty.
pub fn suggest(text: &NormalizedText) -> Vec<String> {
    let chosen = SUGGESTION_BUCKETS
        .iter()
        .find(|(keywords, _)| text.mentions_any(keywords))
        .map(|(_, suggestions)| suggestions)
        .unwrap_or(&DEFAULT_SUGGESTIONS);

    chosen.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggest_str(input: &str) -> Vec<String> {
        suggest(&NormalizedText::new(input))
    }

    #[test]
    fn test_cybersecurity_bucket() {
        let s = suggest_str("How do I get into cybersecurity?");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], "What certifications should I get for cybersecurity?");
    }

    #[test]
    fn test_cybersecurity_outranks_technology() {
        let s = suggest_str("tech jobs in security");
        assert_eq!(s[0], "What certifications should I get for cybersecurity?");
    }

    #[test]
    fn test_leadership_bucket() {
        let s = suggest_str("What about leadership?");
        assert_eq!(s[0], "How do I develop my leadership skills?");
    }

    #[test]
    fn test_data_bucket_outranks_leadership() {
        let s = suggest_str("lead a data team");
        assert_eq!(s[0], "What skills do data scientists need most?");
    }

    #[test]
    fn test_technology_outranks_data() {
        let s = suggest_str("data engineering vs software");
        assert_eq!(s[0], "Which programming language should I learn next?");
    }

    #[test]
    fn test_leadership_outranks_interview() {
        let s = suggest_str("manager interview questions");
        assert_eq!(s[0], "How do I develop my leadership skills?");
    }

    #[test]
    fn test_interview_bucket_outranks_skills() {
        let s = suggest_str("learn for my interview");
        assert_eq!(s[0], "How do I tailor my resume to a job posting?");
    }

    #[test]
    fn test_skills_bucket() {
        let s = suggest_str("what skills to learn?");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], "What skills are most in demand right now?");
    }

    #[test]
    fn test_default_for_greeting_and_empty() {
        let expected: Vec<String> = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        assert_eq!(suggest_str("hello"), expected);
        assert_eq!(suggest_str(""), expected);
        assert_eq!(suggest_str("?!"), expected);
    }

    #[test]
    fn test_every_bucket_has_keywords_and_suggestions() {
        for (keywords, suggestions) in SUGGESTION_BUCKETS {
            assert!(!keywords.is_empty());
            assert!(suggestions.iter().all(|s| !s.is_empty()));
        }
    }
}
