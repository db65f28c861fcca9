// Shared prompt fragments. Each feature that calls the provider keeps its
// own prompts.rs alongside it; only cross-cutting text lives here.

/// Keeps provider replies in plain prose that renders well in the chat widget.
pub const PLAIN_PROSE_INSTRUCTION: &str = "\
    Respond in concise prose or short markdown bullet lists. \
    Do NOT use tables, code fences, or headings deeper than bold text. \
    Keep the answer under 250 words.";
