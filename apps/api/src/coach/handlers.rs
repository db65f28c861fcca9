//! Axum route handlers for the career chat API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::coach::engine::{answer, resolve_path, CoachReply};
use crate::coach::keywords::NormalizedText;
use crate::coach::prompts::{build_chat_prompt, CHAT_SYSTEM};
use crate::coach::suggestions::suggest;
use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::models::profile::UserProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Absent or null means an anonymous profile.
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Ai,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
    pub source: ReplySource,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// "trigger" or "classified"
    pub path: &'static str,
    /// Trigger rule name or classification tag.
    pub tag: String,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Tries the AI provider when configured, otherwise (or on any provider
/// failure) answers with the rule-based coach. Suggestions always come from
/// the coach and are truncated to the configured count.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    ensure_within_limit(&request.message, state.config.max_message_chars)?;

    let profile = request.profile.unwrap_or_default();

    let (mut reply, source) =
        match ask_provider(state.llm.as_deref(), &request.message, &profile).await {
            Some(text) => (
                CoachReply {
                    response: text,
                    suggestions: suggest(&NormalizedText::new(&request.message)),
                },
                ReplySource::Ai,
            ),
            None => (answer(&request.message, &profile), ReplySource::Fallback),
        };

    reply.suggestions.truncate(state.config.surfaced_suggestions);

    info!(source = ?source, "chat reply sent");

    Ok(Json(ChatResponse {
        response: reply.response,
        suggestions: reply.suggestions,
        source,
        timestamp: Utc::now(),
    }))
}

/// POST /api/v1/chat/classify
///
/// Reports which branch the rule-based coach takes for a message. Never
/// calls the AI provider.
pub async fn handle_classify(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    ensure_within_limit(&request.message, state.config.max_message_chars)?;

    let profile = request.profile.unwrap_or_default();
    let text = NormalizedText::new(&request.message);
    let path = resolve_path(&text, &profile);

    Ok(Json(ClassifyResponse {
        path: path.kind(),
        tag: path.label(),
        suggestions: suggest(&text),
    }))
}

fn ensure_within_limit(message: &str, limit: usize) -> Result<(), AppError> {
    if message.chars().count() > limit {
        return Err(AppError::MessageTooLong { limit });
    }
    Ok(())
}

/// Returns the provider's answer, or `None` when the coach should answer instead.
async fn ask_provider(
    provider: Option<&dyn CompletionProvider>,
    message: &str,
    profile: &UserProfile,
) -> Option<String> {
    let provider = provider?;
    if message.trim().is_empty() {
        return None;
    }

    let prompt = build_chat_prompt(message, profile);
    match provider.complete(CHAT_SYSTEM, &prompt).await {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => {
            warn!("AI provider returned an empty completion, using rule-based coach");
            None
        }
        Err(e) => {
            warn!("AI provider failed, using rule-based coach: {e}");
            None
        }
    }
}
