use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-declared seniority on a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry-level",
            ExperienceLevel::Mid => "mid-level",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only profile supplied with each chat request.
/// Every field is optional; an empty object is a valid (anonymous) profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub experience: Option<ExperienceLevel>,
    pub current_role: Option<String>,
    pub target_role: Option<String>,
    pub primary_skill: Option<String>,
    pub skills: Vec<String>,
}

impl UserProfile {
    /// Experience label for prose, or a generic phrase when undeclared.
    pub fn experience_label(&self) -> &'static str {
        self.experience
            .map(ExperienceLevel::label)
            .unwrap_or("not specified")
    }

    pub fn current_role(&self) -> Option<&str> {
        non_blank(self.current_role.as_deref())
    }

    pub fn target_role(&self) -> Option<&str> {
        non_blank(self.target_role.as_deref())
    }

    pub fn primary_skill(&self) -> Option<&str> {
        non_blank(self.primary_skill.as_deref())
    }

    /// Declared skills with blank entries dropped, in original order.
    pub fn listed_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
