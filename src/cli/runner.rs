use crate::{
    cli::{answers::AnswerCollector, Args},
    context::{Answers, ContextBuilder},
    dialoguer::TextPrompter,
    error::Result,
    loader::get_loader,
    renderer::MiniJinjaRenderer,
    scaffold::Scaffold,
};
use std::path::PathBuf;

/// Main CLI runner that wires the collaborators into a scaffold run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Absolute path of the generated tree
    pub fn run(self) -> Result<PathBuf> {
        let engine = MiniJinjaRenderer::new()?;
        let loader = get_loader(self.args.templates.as_deref())?;
        let answers = self.collect_answers()?;
        log::debug!("Answers: {answers:?}");

        let context_builder = ContextBuilder::new(self.args.project_version.as_str());
        Scaffold::new(&engine, loader.as_ref(), context_builder)
            .with_exclude(self.args.exclude.clone())
            .run(&self.args.target_dir, &answers)
    }

    fn collect_answers(&self) -> Result<Answers> {
        let prompter = TextPrompter;
        AnswerCollector::new(&prompter, self.args.non_interactive)
            .collect_answers(self.args.answers.clone())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<PathBuf> {
    Runner::new(args).run()
}
