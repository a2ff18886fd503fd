use crate::error::Result;

/// Trait for reading template bodies from different sources.
pub trait TemplateLoader {
    /// Returns the body of the template registered under `template_id`.
    ///
    /// # Arguments
    /// * `template_id` - `/`-separated path of the template relative to the template root
    ///
    /// # Returns
    /// * `Result<String>` - Raw template text, not yet rendered
    fn load(&self, template_id: &str) -> Result<String>;
}
