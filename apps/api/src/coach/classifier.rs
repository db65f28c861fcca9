//! Topic Classifier — assigns exactly one classification tag to free text.
//!
//! Priority is fixed: industry > career stage > skill development >
//! contains '?' > general. Keyword lists may overlap ("data science" is both
//! an industry and a skill keyword); the priority order decides.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::coach::keywords::NormalizedText;
use crate::models::profile::UserProfile;

/// Canonical industry bucket. Synonyms collapse onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Technology,
    Cybersecurity,
    DataScience,
    Healthcare,
    Finance,
    Marketing,
    Education,
    Engineering,
    Design,
    Sales,
    Legal,
    Consulting,
}

impl Industry {
    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Cybersecurity => "cybersecurity",
            Industry::DataScience => "data-science",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Marketing => "marketing",
            Industry::Education => "education",
            Industry::Engineering => "engineering",
            Industry::Design => "design",
            Industry::Sales => "sales",
            Industry::Legal => "legal",
            Industry::Consulting => "consulting",
        }
    }

    /// Human-readable name for headings.
    pub fn display_name(self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Cybersecurity => "Cybersecurity",
            Industry::DataScience => "Data Science",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Marketing => "Marketing",
            Industry::Education => "Education",
            Industry::Engineering => "Engineering",
            Industry::Design => "Design",
            Industry::Sales => "Sales",
            Industry::Legal => "Legal",
            Industry::Consulting => "Consulting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerStage {
    Entry,
    Mid,
    Executive,
}

impl CareerStage {
    pub fn as_str(self) -> &'static str {
        match self {
            CareerStage::Entry => "entry",
            CareerStage::Mid => "mid",
            CareerStage::Executive => "executive",
        }
    }
}

/// The closed set of topics an input can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Industry(Industry),
    Stage(CareerStage),
    Skill,
    Question,
    General,
}

impl Classification {
    /// Tag form: `industry:<name>`, `stage:<name>`, `skill`, `question`, `general`.
    pub fn tag(&self) -> String {
        match self {
            Classification::Industry(industry) => format!("industry:{}", industry.as_str()),
            Classification::Stage(stage) => format!("stage:{}", stage.as_str()),
            Classification::Skill => "skill".to_string(),
            Classification::Question => "question".to_string(),
            Classification::General => "general".to_string(),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag())
    }
}

/// Synonym keywords per canonical bucket, checked top to bottom.
/// Specific buckets come before broad ones so "fintech" lands in finance
/// and "software engineering" in technology.
const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Cybersecurity,
        &[
            "cyber",
            "security",
            "infosec",
            "penetration testing",
            "pentest",
            "ethical hack",
            "soc analyst",
        ],
    ),
    (
        Industry::DataScience,
        &[
            "data science",
            "data scientist",
            "machine learning",
            "artificial intelligence",
            "data analyst",
            "analytics",
        ],
    ),
    (
        Industry::Finance,
        &[
            "finance",
            "financial",
            "banking",
            "accounting",
            "accountant",
            "fintech",
            "investment",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "healthcare",
            "health care",
            "medical",
            "nurse",
            "doctor",
            "physician",
            "nursing",
            "hospital",
            "clinical",
        ],
    ),
    (
        Industry::Marketing,
        &["marketing", "advertising", "seo", "social media", "brand"],
    ),
    (
        Industry::Education,
        &["education", "teaching", "teacher", "tutor", "academia"],
    ),
    (
        Industry::Design,
        &[
            "ux design",
            "ux research",
            "user experience",
            "ui design",
            "graphic design",
            "product design",
            "designer",
        ],
    ),
    (
        Industry::Sales,
        &["sales", "business development", "account executive"],
    ),
    (
        Industry::Legal,
        &["legal", "lawyer", "attorney", "law firm"],
    ),
    (Industry::Consulting, &["consulting", "consultant"]),
    (
        Industry::Technology,
        &[
            "software",
            "programming",
            "developer",
            "coding",
            "tech",
            "devops",
            "cloud",
        ],
    ),
    (
        Industry::Engineering,
        &[
            "mechanical engineer",
            "civil engineer",
            "electrical engineer",
            "engineering",
        ],
    ),
];

const STAGE_KEYWORDS: &[(CareerStage, &[&str])] = &[
    (
        CareerStage::Entry,
        &[
            "entry level",
            "entry-level",
            "junior",
            "graduate",
            "beginner",
            "intern",
            "first job",
            "student",
        ],
    ),
    (
        CareerStage::Mid,
        &[
            "mid-level",
            "mid level",
            "mid-career",
            "mid career",
            "experienced",
            "senior",
        ],
    ),
    (
        CareerStage::Executive,
        &[
            "executive",
            "director",
            "vice president",
            "c-suite",
            "chief technology officer",
            "chief executive",
            "head of",
            "manager",
        ],
    ),
];

const SKILL_KEYWORDS: &[&str] = &[
    "skill",
    "learn",
    "course",
    "certif",
    "upskill",
    "bootcamp",
    "training",
    "study",
    "data science",
];

/// Resolves the canonical industry bucket mentioned in `text`, if any.
pub fn detect_industry(text: &NormalizedText) -> Option<Industry> {
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| text.mentions_any(keywords))
        .map(|(industry, _)| *industry)
}

pub fn detect_stage(text: &NormalizedText) -> Option<CareerStage> {
    STAGE_KEYWORDS
        .iter()
        .find(|(_, keywords)| text.mentions_any(keywords))
        .map(|(stage, _)| *stage)
}

/// Classifies `text`. Total over all inputs, including the empty string.
///
/// The profile is accepted so callers have one signature for the whole
/// pipeline; classification currently depends on the text alone.
pub fn classify(text: &NormalizedText, _profile: &UserProfile) -> Classification {
    if let Some(industry) = detect_industry(text) {
        Classification::Industry(industry)
    } else if let Some(stage) = detect_stage(text) {
        Classification::Stage(stage)
    } else if text.mentions_any(SKILL_KEYWORDS) {
        Classification::Skill
    } else if text.as_str().contains('?') {
        Classification::Question
    } else {
        Classification::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(input: &str) -> Classification {
        classify(&NormalizedText::new(input), &UserProfile::default())
    }

    #[test]
    fn test_cybersecurity_question_classifies_as_industry() {
        let c = classify_str("How do I get into cybersecurity?");
        assert_eq!(c, Classification::Industry(Industry::Cybersecurity));
        assert_eq!(c.tag(), "industry:cybersecurity");
    }

    #[test]
    fn test_cybersecurity_synonyms_share_a_bucket() {
        for input in [
            "I want to work in cyber security",
            "Is infosec a good field",
            "Tell me about penetration testing",
        ] {
            assert_eq!(
                classify_str(input),
                Classification::Industry(Industry::Cybersecurity),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_industry_beats_stage() {
        assert_eq!(
            classify_str("I'm an entry level nurse"),
            Classification::Industry(Industry::Healthcare)
        );
        assert_eq!(
            classify_str("junior developer"),
            Classification::Industry(Industry::Technology)
        );
    }

    #[test]
    fn test_specific_bucket_beats_broad_bucket() {
        assert_eq!(
            classify_str("fintech startups"),
            Classification::Industry(Industry::Finance)
        );
    }

    #[test]
    fn test_data_science_resolves_to_industry_not_skill() {
        assert_eq!(
            classify_str("courses for data science"),
            Classification::Industry(Industry::DataScience)
        );
    }

    #[test]
    fn test_stage_buckets() {
        assert_eq!(
            classify_str("I'm a junior looking for advice"),
            Classification::Stage(CareerStage::Entry)
        );
        assert_eq!(
            classify_str("I'm experienced and feel stuck"),
            Classification::Stage(CareerStage::Mid)
        );
        assert_eq!(
            classify_str("How do I become a director?"),
            Classification::Stage(CareerStage::Executive)
        );
    }

    #[test]
    fn test_skill_before_question_mark() {
        assert_eq!(classify_str("What should I learn next?"), Classification::Skill);
    }

    #[test]
    fn test_question_mark_without_keywords() {
        assert_eq!(classify_str("Which path fits me?"), Classification::Question);
        assert_eq!(classify_str("What about leadership?"), Classification::Question);
    }

    #[test]
    fn test_short_acronyms_do_not_hide_inside_common_words() {
        assert_eq!(classify_str("How do I learn Linux?"), Classification::Skill);
        assert_eq!(classify_str("a luxury retail flux"), Classification::General);
        assert_eq!(
            classify_str("I'm a doctor"),
            Classification::Industry(Industry::Healthcare)
        );
        assert_eq!(
            classify_str("which sector has the best factors?"),
            Classification::Question
        );
    }

    #[test]
    fn test_spelled_out_titles_reach_their_buckets() {
        assert_eq!(
            classify_str("moving into user experience"),
            Classification::Industry(Industry::Design)
        );
        assert_eq!(
            classify_str("how do I become chief executive"),
            Classification::Stage(CareerStage::Executive)
        );
        assert_eq!(
            classify_str("becoming a vice president"),
            Classification::Stage(CareerStage::Executive)
        );
    }

    #[test]
    fn test_degenerate_inputs_are_general() {
        assert_eq!(classify_str(""), Classification::General);
        assert_eq!(classify_str("   \t\n"), Classification::General);
        assert_eq!(classify_str("12345 !!!"), Classification::General);
    }

    #[test]
    fn test_classification_serializes_as_tag() {
        let json = serde_json::to_string(&Classification::Stage(CareerStage::Mid)).unwrap();
        assert_eq!(json, r#""stage:mid""#);
    }

    #[test]
    fn test_every_industry_has_keywords() {
        let all = [
            Industry::Technology,
            Industry::Cybersecurity,
            Industry::DataScience,
            Industry::Healthcare,
            Industry::Finance,
            Industry::Marketing,
            Industry::Education,
            Industry::Engineering,
            Industry::Design,
            Industry::Sales,
            Industry::Legal,
            Industry::Consulting,
        ];
        for industry in all {
            assert!(
                INDUSTRY_KEYWORDS.iter().any(|(i, kws)| *i == industry && !kws.is_empty()),
                "{} has no keywords",
                industry.as_str()
            );
        }
    }
}
