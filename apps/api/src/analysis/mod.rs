// Resume analysis: text extraction, ATS scoring, role keywords, AI suggestions.
// All LLM calls go through llm_client via the TextGenerator capability.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod roles;
pub mod scoring;
pub mod suggestions;
