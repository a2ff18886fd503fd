//! Lifecycle of the target directory tree.

use std::path::{Component, Path, PathBuf};

use crate::constants::{PACKAGE_MARKER, SOURCE_DIR, SUBPACKAGES};
use crate::error::Result;
use crate::ioutils::{create_dir_all, remove_dir_all, write_file};
use crate::template::operation::TemplateOperation;

/// Whether `path` spells the current directory (`.`, `./`, `././`).
///
/// Such a target is never removed.
pub fn is_current_dir_sentinel(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|c| c == Component::CurDir)
}

/// Prepares and tears down the tree a scaffold is generated into.
pub struct DirectoryManager<'a> {
    target_dir: &'a Path,
    package_name: &'a str,
}

impl<'a> DirectoryManager<'a> {
    pub fn new(target_dir: &'a Path, package_name: &'a str) -> Self {
        Self { target_dir, package_name }
    }

    /// `src/<package_name>` under the target directory.
    pub fn package_dir(&self) -> PathBuf {
        self.target_dir.join(SOURCE_DIR).join(self.package_name)
    }

    /// Recursively removes the target directory.
    ///
    /// A missing target and the current directory are both left alone.
    pub fn delete_target(&self) -> Result<TemplateOperation> {
        let target = self.target_dir.to_path_buf();
        let operation = if is_current_dir_sentinel(&target) {
            TemplateOperation::KeepDirectory { target, is_sentinel: true }
        } else if !target.exists() {
            TemplateOperation::KeepDirectory { target, is_sentinel: false }
        } else {
            remove_dir_all(&target)?;
            TemplateOperation::RemoveDirectory { target }
        };
        log::info!("{}", operation.get_message());
        Ok(operation)
    }

    /// Creates the target directory and the canonical subdirectories.
    pub fn create_skeleton(&self) -> Result<Vec<TemplateOperation>> {
        let package_dir = self.package_dir();
        let mut directories = vec![
            self.target_dir.to_path_buf(),
            self.target_dir.join(".github").join("workflows"),
            self.target_dir.join("tests"),
            package_dir.clone(),
        ];
        directories.extend(SUBPACKAGES.iter().map(|name| package_dir.join(name)));

        directories.into_iter().map(Self::ensure_dir).collect()
    }

    /// Writes an empty marker file into the package root.
    pub fn mark_package(&self) -> Result<TemplateOperation> {
        let package_dir = self.package_dir();
        create_dir_all(&package_dir)?;

        let target = package_dir.join(PACKAGE_MARKER);
        write_file("", &target)?;

        let operation = TemplateOperation::MarkPackage { target };
        log::info!("{}", operation.get_message());
        Ok(operation)
    }

    fn ensure_dir(target: PathBuf) -> Result<TemplateOperation> {
        let target_exists = target.is_dir();
        create_dir_all(&target)?;
        let operation = TemplateOperation::CreateDirectory { target, target_exists };
        log::debug!("{}", operation.get_message());
        Ok(operation)
    }
}
