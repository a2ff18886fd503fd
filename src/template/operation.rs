use std::path::PathBuf;

/// A single filesystem effect performed while scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    Write { template: String, target: PathBuf, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    RemoveDirectory { target: PathBuf },
    /// The target was left in place: it is missing or it is the working directory.
    KeepDirectory { target: PathBuf, is_sentinel: bool },
    MarkPackage { target: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Write { template, target, target_exists } => {
                if *target_exists {
                    format!(
                        "Rendering '{}' to '{}' (overwriting existing file)",
                        template,
                        target.display()
                    )
                } else {
                    format!("Rendering '{}' to '{}'", template, target.display())
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            TemplateOperation::RemoveDirectory { target } => {
                format!("Removing directory '{}'", target.display())
            }

            TemplateOperation::KeepDirectory { target, is_sentinel } => {
                if *is_sentinel {
                    format!(
                        "Keeping '{}' (current directory is never removed)",
                        target.display()
                    )
                } else {
                    format!("Nothing to remove at '{}'", target.display())
                }
            }

            TemplateOperation::MarkPackage { target } => {
                format!("Marking package with '{}'", target.display())
            }
        }
    }
}
