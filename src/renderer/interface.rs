use crate::context::RenderContext;
use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template body with the given context.
    ///
    /// # Arguments
    /// * `template_name` - Identifier of the template (used in error messages)
    /// * `template` - Template body to render
    /// * `context` - Closed set of fields available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text, or `Error::UndefinedReference` when the
    ///   template uses a field missing from `context`
    fn render(
        &self,
        template_name: &str,
        template: &str,
        context: &RenderContext,
    ) -> Result<String>;
}
