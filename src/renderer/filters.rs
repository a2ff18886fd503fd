// Case conversion and string manipulation filters available to templates
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
};

use minijinja::{Error, ErrorKind};

/// Renders a value as a double-quoted string literal.
///
/// The output is a valid JSON string, TOML basic string and Python string literal.
pub fn to_quoted(value: String) -> Result<String, Error> {
    serde_json::to_string(&value)
        .map(|quoted| quoted.replace('\u{7f}', "\\u007f"))
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, "cannot quote value").with_source(e))
}
