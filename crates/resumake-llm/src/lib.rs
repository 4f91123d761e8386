//! resumake-llm — resume generation core: prompt templating, Groq chat
//! completions, and best-effort reply parsing.
//!
//! ## Pipeline
//!
//! ```text
//! description ──▶ render(template) ──▶ GroqClient::complete ──▶ parse_reply
//!                                                                   │
//!                                              ParsedReply { think, data }
//! ```
//!
//! The completion call is the only fallible step a caller sees. Parsing is
//! total: a reply the model mangled yields null fields, never an error.

mod client;
mod error;
mod generate;
mod parse;
mod prompt;
mod template;
mod types;

pub use client::{CompletionClient, GroqClient};
pub use error::{Error, Result};
pub use generate::ResumeGenerator;
pub use parse::{FenceStrategy, parse_reply, parse_reply_with};
pub use prompt::{PromptStore, RESUME_PROMPT, RESUME_PROMPT_NAME};
pub use template::render;
pub use types::{ChatMessage, ChatRequest, ChatResponse, GroqConfig, ParsedReply};
