use super::{PromptContext, Prompter};
use crate::error::Result;
use dialoguer::Input;

/// Handles free-text prompts on the terminal
pub struct TextPrompter;

impl Prompter for TextPrompter {
    fn prompt(&self, prompt_context: &PromptContext<'_>) -> Result<String> {
        Ok(Input::new()
            .with_prompt(prompt_context.help)
            .default(prompt_context.default.to_string())
            .allow_empty(true)
            .interact_text()?)
    }
}
