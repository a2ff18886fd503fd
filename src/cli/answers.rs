use crate::{
    constants::STDIN_INDICATOR,
    context::Answers,
    dialoguer::{PromptContext, Prompter},
    error::Result,
    ioutils::read_from,
};
use serde_json::{Map, Value};

/// A question asked for one answer field.
pub struct Question {
    pub key: &'static str,
    pub help: &'static str,
}

/// Questions in the order they are asked.
pub const QUESTIONS: &[Question] = &[
    Question { key: "project_name", help: "Enter the project name" },
    Question { key: "project_owner", help: "Enter the GitHub project owner name" },
    Question { key: "author", help: "Enter the author name" },
    Question { key: "description", help: "Enter the project description" },
    Question { key: "license", help: "Enter the license type (e.g., MIT)" },
    Question { key: "email", help: "Enter the author email" },
];

/// Collects answers from command line arguments and user prompts
pub struct AnswerCollector<'a> {
    prompter: &'a dyn Prompter,
    non_interactive: bool,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter, non_interactive: bool) -> Self {
        Self { prompter, non_interactive }
    }

    /// Collects answers from all available sources.
    ///
    /// Answers given on the command line win; the rest are prompted for, or
    /// take their defaults when running non-interactively.
    pub fn collect_answers(&self, cli_answers: Option<String>) -> Result<Answers> {
        let mut provided = match cli_answers {
            Some(answers_arg) => {
                let answers_str = if answers_arg == STDIN_INDICATOR {
                    read_from(std::io::stdin())?
                } else {
                    answers_arg
                };
                serde_json::from_str::<Map<String, Value>>(&answers_str)?
            }
            None => Map::new(),
        };

        let defaults = serde_json::to_value(Answers::default())?;
        let mut answers = Map::new();

        for question in QUESTIONS {
            let answer = match provided.remove(question.key) {
                Some(value) => value_to_string(value),
                None => {
                    let default = defaults
                        .get(question.key)
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    if self.non_interactive {
                        default.to_string()
                    } else {
                        self.prompter.prompt(&PromptContext::new(question.help, default))?
                    }
                }
            };
            answers.insert(question.key.to_string(), Value::String(answer));
        }

        for key in provided.keys() {
            log::warn!("Ignoring unknown answer '{key}'");
        }

        Ok(serde_json::from_value(Value::Object(answers))?)
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
