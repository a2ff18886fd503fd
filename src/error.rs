use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParseError(#[from] serde_json::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// A template referenced a field that is not part of the render context.
    #[error("Template '{template}' references undefined field '{field}'.")]
    UndefinedReference { template: String, field: String },

    #[error("Template '{template}' was not found in {source_name}.")]
    TemplateNotFound { template: String, source_name: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_reference_names_template_and_field() {
        let err = Error::UndefinedReference {
            template: "LICENSE.jinja2".to_string(),
            field: "author".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Template 'LICENSE.jinja2' references undefined field 'author'."
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(_)));
    }
}
