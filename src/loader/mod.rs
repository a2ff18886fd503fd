use crate::error::Result;
use crate::loader::{bundled::BundledLoader, local::LocalLoader};
use std::path::{Path, PathBuf};

pub mod bundled;
pub mod interface;
pub mod local;

pub use interface::TemplateLoader;

#[derive(Debug)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    Bundled,
    /// Local filesystem template directory
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Bundled => write!(f, "bundled templates"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

/// Picks the loader for an optional template directory.
///
/// # Arguments
/// * `template_dir` - Directory holding one file per template, or `None` for the bundled set
///
/// # Returns
/// * `Result<Box<dyn TemplateLoader>>` - Loader resolving template identifiers
pub fn get_loader(template_dir: Option<&Path>) -> Result<Box<dyn TemplateLoader>> {
    let source = match template_dir {
        Some(dir) => TemplateSource::FileSystem(dir.to_path_buf()),
        None => TemplateSource::Bundled,
    };
    log::debug!("Using {source}");

    let loader: Box<dyn TemplateLoader> = match source {
        TemplateSource::Bundled => Box::new(BundledLoader::new()),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)?),
    };
    Ok(loader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_source_display() {
        let fs_source = TemplateSource::FileSystem(PathBuf::from("/path/to/templates"));
        assert_eq!(format!("{fs_source}"), "local path: '/path/to/templates'");
        assert_eq!(TemplateSource::Bundled.to_string(), "bundled templates");
    }

    #[test]
    fn missing_directory_fails_early() {
        assert!(get_loader(Some(Path::new("/definitely/not/here"))).is_err());
        assert!(get_loader(None).is_ok());
    }
}
