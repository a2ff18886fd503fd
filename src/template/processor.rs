use std::path::Path;

use crate::catalog::TemplateCatalog;
use crate::context::RenderContext;
use crate::error::Result;
use crate::ioutils::write_file;
use crate::loader::TemplateLoader;
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;

/// Renders catalog entries into the target directory.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    loader: &'a dyn TemplateLoader,

    /// Other
    target_dir: &'a Path,
    context: &'a RenderContext,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        loader: &'a dyn TemplateLoader,
        target_dir: &'a Path,
        context: &'a RenderContext,
    ) -> Self {
        Self { engine, loader, target_dir, context }
    }

    /// Renders every entry of the catalog in order.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn render_all(&self, catalog: &TemplateCatalog) -> Result<Vec<TemplateOperation>> {
        catalog
            .iter()
            .map(|(template_id, output_path)| self.render_one(template_id, output_path))
            .collect()
    }

    /// Renders one template and writes it to `target_dir / output_path`.
    ///
    /// # Arguments
    /// * `template_id` - Identifier resolved through the loader
    /// * `output_path` - Destination relative to the target directory
    ///
    /// # Returns
    /// * `Result<TemplateOperation>` - The write that was performed
    pub fn render_one(
        &self,
        template_id: &str,
        output_path: &Path,
    ) -> Result<TemplateOperation> {
        let body = self.loader.load(template_id)?;
        let content = self
            .engine
            .render(template_id, &body, self.context)
            .inspect_err(|e| log::error!("Error rendering template {template_id}: {e}"))?;

        let target = self.target_dir.join(output_path);
        let target_exists = target.exists();
        write_file(&content, &target)?;

        let operation =
            TemplateOperation::Write { template: template_id.to_string(), target, target_exists };
        log::info!("{}", operation.get_message());
        Ok(operation)
    }
}
