use crate::error::{Error, Result};
use crate::loader::{interface::TemplateLoader, TemplateSource};
use std::path::{Path, PathBuf};

/// Loader for templates stored in a directory on the local filesystem.
pub struct LocalLoader {
    root: PathBuf,
}

impl LocalLoader {
    /// Creates a new LocalLoader rooted at `root`.
    ///
    /// Fails when the directory does not exist.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: root.display().to_string(),
            });
        }
        Ok(Self { root: root.to_path_buf() })
    }

    fn resolve(&self, template_id: &str) -> PathBuf {
        template_id.split('/').fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl TemplateLoader for LocalLoader {
    fn load(&self, template_id: &str) -> Result<String> {
        let path = self.resolve(template_id);
        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                template: template_id.to_string(),
                source_name: TemplateSource::FileSystem(self.root.clone()).to_string(),
            });
        }
        log::debug!("Loading template '{}' from '{}'", template_id, path.display());
        Ok(std::fs::read_to_string(path)?)
    }
}
