use super::filters::*;
use crate::{
    constants::syntax,
    context::RenderContext,
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{
    syntax::SyntaxConfig,
    value::{Enumerator, Object, Value},
    AutoEscape, Environment, ErrorKind, UndefinedBehavior,
};
use std::sync::{Arc, Mutex};

/// Render context exposed to the engine that records every name it could not resolve.
#[derive(Debug)]
struct TrackedContext {
    fields: RenderContext,
    misses: Arc<Mutex<Vec<String>>>,
}

impl Object for TrackedContext {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let key = key.as_str()?;
        match self.fields.get(key) {
            Some(value) => Some(Value::from(value)),
            None => {
                if let Ok(mut misses) = self.misses.lock() {
                    misses.push(key.to_string());
                }
                None
            }
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        let keys: Vec<Value> = self.fields.iter().map(|(key, _)| Value::from(key)).collect();
        Enumerator::Iter(Box::new(keys.into_iter()))
    }
}

/// MiniJinja-based template rendering engine.
///
/// Uses bracket delimiters (`[[ var ]]`, `[[% block %]]`, `[[# comment #]]`)
/// and strict undefined handling.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the scaffold environment.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters(syntax::BLOCK_START, syntax::BLOCK_END)
                .variable_delimiters(syntax::VARIABLE_START, syntax::VARIABLE_END)
                .comment_delimiters(syntax::COMMENT_START, syntax::COMMENT_END)
                .build()?,
        );
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("quoted", to_quoted);

        Ok(Self { env })
    }

    /// The field whose lookup made strict rendering fail.
    ///
    /// Context misses for names the environment provides as globals (`range`,
    /// `namespace`, ...) are not fields and are skipped.
    fn missing_field(&self, misses: &Mutex<Vec<String>>) -> Option<String> {
        let misses = misses.lock().ok()?;
        let field = misses
            .iter()
            .rev()
            .find(|name| !self.env.globals().any(|(global, _)| global == name.as_str()))
            .cloned();
        field
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template_name: &str,
        template: &str,
        context: &RenderContext,
    ) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(template_name.to_string(), template.to_string())?;
        let tmpl = env.get_template(template_name)?;

        let misses = Arc::new(Mutex::new(Vec::new()));
        let tracked = TrackedContext { fields: context.clone(), misses: Arc::clone(&misses) };

        match tmpl.render(Value::from_object(tracked)) {
            Ok(rendered) => Ok(rendered),
            Err(err) if err.kind() == ErrorKind::UndefinedError => {
                let field = self
                    .missing_field(&misses)
                    .unwrap_or_else(|| err.detail().unwrap_or("unknown").to_string());
                Err(Error::UndefinedReference {
                    template: template_name.to_string(),
                    field,
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
