//! Keyword matching primitive shared by every table in the coaching engine.

/// Input text lowercased once per request. All keyword tables are written in
/// lowercase and compared against this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `keyword` occurs anywhere in the text.
    ///
    /// This is plain substring containment, so it also matches inflected
    /// forms ("negotiating" for "negotiat") and fragments of longer words
    /// ("lead" inside "leadership", "intern" inside "international").
    /// Tightening this to whole-word matching changes which rule fires for
    /// existing inputs.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.mentions(kw))
    }
}
