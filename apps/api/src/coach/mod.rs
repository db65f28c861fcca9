// Career chat: a rule-based coaching engine with an optional AI provider in front.
// The engine (triggers → classifier → templates, plus suggestions) is pure and
// never fails; handlers try the provider first and fall back to it.

pub mod classifier;
pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod suggestions;
pub mod templates;
pub mod triggers;
