// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Keeps responses renderable in a plain `<pre>` block.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond in plain text. Use numbered headings and short bullet points. \
    Do NOT wrap the answer in code fences.";

/// Keeps the model from rewriting facts the candidate did not provide.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Do NOT invent employers, dates, degrees, or metrics. \
    Where a number would help, say what kind of number to add instead of making one up.";
