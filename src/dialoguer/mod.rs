//! Interactive dialog utilities for user input

use crate::error::Result;

pub mod text;

pub use text::TextPrompter;

/// Common interface for prompt implementations
pub trait Prompter {
    fn prompt(&self, prompt_context: &PromptContext<'_>) -> Result<String>;
}

/// Context for prompting operations
pub struct PromptContext<'a> {
    pub help: &'a str,
    pub default: &'a str,
}

impl<'a> PromptContext<'a> {
    pub fn new(help: &'a str, default: &'a str) -> Self {
        Self { help, default }
    }
}
