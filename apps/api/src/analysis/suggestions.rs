//! AI suggestions — advisory text from the configured `TextGenerator`.
//!
//! Never fails: any generation error becomes an explanatory string so the score
//! and factors are always returned.

use tracing::{info, warn};

use crate::analysis::models::AtsReport;
use crate::analysis::prompts::SUGGESTION_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{NO_FABRICATION_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::TextGenerator;

/// Resume characters sent to the model, to stay inside token limits.
pub const PROMPT_RESUME_CHAR_LIMIT: usize = 3000;

pub const SUGGESTION_ERROR_PREFIX: &str = "Error generating AI suggestions";

/// Truncates to at most `max_chars` characters, never splitting a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a role or resume containing
/// `{resume_text}` stays literal. Unknown placeholders are kept as written.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let filled = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn build_suggestion_prompt(resume_text: &str, report: &AtsReport) -> String {
    let factors = &report.factors;
    let score = report.score.to_string();
    let email = factors.email.to_string();
    let phone = factors.phone.to_string();
    let sections_found = format_list(&factors.sections_found);
    let keywords_found = format_list(&factors.keywords_found);
    let achievements = factors.quantifiable_achievements.to_string();

    render_template(
        SUGGESTION_PROMPT_TEMPLATE,
        &[
            ("role", factors.role.as_str()),
            ("resume_text", truncate_chars(resume_text, PROMPT_RESUME_CHAR_LIMIT)),
            ("score", score.as_str()),
            ("email", email.as_str()),
            ("phone", phone.as_str()),
            ("sections_found", sections_found.as_str()),
            ("keywords_found", keywords_found.as_str()),
            ("quantifiable_achievements", achievements.as_str()),
            ("plain_text_instruction", PLAIN_TEXT_INSTRUCTION),
            ("no_fabrication_instruction", NO_FABRICATION_INSTRUCTION),
        ],
    )
}

/// Requests suggestions, returning the raw model text or a readable error message.
pub async fn request_suggestions(
    generator: &dyn TextGenerator,
    resume_text: &str,
    report: &AtsReport,
) -> String {
    let prompt = build_suggestion_prompt(resume_text, report);

    match generator.generate(&prompt).await {
        Ok(text) => {
            info!(chars = text.len(), "AI suggestions generated");
            text
        }
        Err(e) => {
            warn!("AI suggestions unavailable: {e}");
            format!("{SUGGESTION_ERROR_PREFIX}: {e}")
        }
    }
}
