// Prompt text for the AI provider path of the career chat.

use crate::llm_client::prompts::PLAIN_PROSE_INSTRUCTION;
use crate::models::profile::UserProfile;

/// System prompt for career chat completions.
pub const CHAT_SYSTEM: &str = "You are a supportive, practical career coach. \
    Give specific, actionable advice about careers, job searching, resumes, interviews, \
    skills, and industries. Be encouraging but honest. \
    If a question is unrelated to careers, gently steer back to career topics.";

/// One line per known profile field; unknown fields are stated as such.
fn profile_summary(profile: &UserProfile) -> String {
    let skills = profile.listed_skills();
    [
        format!("- Experience level: {}", profile.experience_label()),
        format!(
            "- Current role: {}",
            profile.current_role().unwrap_or("not specified")
        ),
        format!(
            "- Target role: {}",
            profile.target_role().unwrap_or("not specified")
        ),
        format!(
            "- Primary skill: {}",
            profile.primary_skill().unwrap_or("not specified")
        ),
        format!(
            "- Skills: {}",
            if skills.is_empty() {
                "not specified".to_string()
            } else {
                skills.join(", ")
            }
        ),
    ]
    .join("\n")
}

/// Builds the user prompt sent to the provider.
///
/// Filled in one pass, so profile values and the message are inserted verbatim
/// even when they contain `{...}` text.
pub fn build_chat_prompt(message: &str, profile: &UserProfile) -> String {
    format!(
        "USER PROFILE:\n{}\n\n{}\n\nUSER MESSAGE:\n{}",
        profile_summary(profile),
        PLAIN_PROSE_INSTRUCTION,
        message
    )
}
