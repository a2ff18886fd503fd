//! End-to-end generation workflow.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::catalog::catalog;
use crate::context::{Answers, ContextBuilder};
use crate::directory::DirectoryManager;
use crate::error::Result;
use crate::loader::TemplateLoader;
use crate::renderer::TemplateRenderer;
use crate::template::processor::TemplateProcessor;

/// Steps of a run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DeleteTarget,
    CreateSkeleton,
    RenderAll,
    MarkPackage,
    Done,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::DeleteTarget => "delete target",
            Stage::CreateSkeleton => "create skeleton",
            Stage::RenderAll => "render templates",
            Stage::MarkPackage => "mark package",
            Stage::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// Composes context building, directory management and rendering.
pub struct Scaffold<'a> {
    engine: &'a dyn TemplateRenderer,
    loader: &'a dyn TemplateLoader,
    context_builder: ContextBuilder,
    exclude: Vec<String>,
}

impl<'a> Scaffold<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        loader: &'a dyn TemplateLoader,
        context_builder: ContextBuilder,
    ) -> Self {
        Self { engine, loader, context_builder, exclude: Vec::new() }
    }

    /// Skips the listed templates on every run.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Generates the project into `target_dir`.
    ///
    /// Any failure stops the run where it happened; nothing is rolled back.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Absolute path of the generated tree
    pub fn run(&self, target_dir: &Path, answers: &Answers) -> Result<PathBuf> {
        let context = self.context_builder.build(answers);
        let package_name = context.package_name();
        let catalog = catalog(package_name).excluding(&self.exclude);
        let directories = DirectoryManager::new(target_dir, package_name);

        log::debug!("Stage: {}", Stage::DeleteTarget);
        directories.delete_target()?;

        log::debug!("Stage: {}", Stage::CreateSkeleton);
        directories.create_skeleton()?;

        log::debug!("Stage: {}", Stage::RenderAll);
        TemplateProcessor::new(self.engine, self.loader, target_dir, &context)
            .render_all(&catalog)?;

        log::debug!("Stage: {}", Stage::MarkPackage);
        directories.mark_package()?;

        log::debug!("Stage: {}", Stage::Done);
        Ok(std::path::absolute(target_dir)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::bundled::BundledLoader;
    use crate::renderer::MiniJinjaRenderer;

    #[test]
    fn stage_display() {
        assert_eq!(Stage::DeleteTarget.to_string(), "delete target");
        assert_eq!(Stage::RenderAll.to_string(), "render templates");
        assert_eq!(Stage::Done.to_string(), "done");
    }

    #[test]
    fn run_generates_tree_and_returns_absolute_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out");
        let engine = MiniJinjaRenderer::new().unwrap();
        let loader = BundledLoader::new();
        let scaffold = Scaffold::new(&engine, &loader, ContextBuilder::new("0.1.0").with_year(2024));

        let generated = scaffold.run(&target, &Answers::default()).unwrap();

        assert!(generated.is_absolute());
        assert_eq!(generated, std::path::absolute(&target).unwrap());
        let marker = target.join("src").join("my_project").join("__init__.py");
        assert_eq!(std::fs::read_to_string(marker).unwrap(), "");
    }

    #[test]
    fn run_clears_previous_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("leftover.txt"), "old").unwrap();

        let engine = MiniJinjaRenderer::new().unwrap();
        let loader = BundledLoader::new();
        Scaffold::new(&engine, &loader, ContextBuilder::new("0.1.0"))
            .run(&target, &Answers::default())
            .unwrap();

        assert!(!target.join("leftover.txt").exists());
        assert!(target.join("LICENSE").is_file());
    }

    #[test]
    fn excluded_templates_are_not_written() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out");
        let engine = MiniJinjaRenderer::new().unwrap();
        let loader = BundledLoader::new();

        Scaffold::new(&engine, &loader, ContextBuilder::new("0.1.0"))
            .with_exclude(vec!["package.json.jinja2".to_string()])
            .run(&target, &Answers::default())
            .unwrap();

        assert!(!target.join("package.json").exists());
        assert!(target.join("pyproject.toml").is_file());
    }
}
