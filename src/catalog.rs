//! The fixed set of templates rendered into every generated project.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::constants::SOURCE_DIR;

/// Where an entry's output path is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Relative to the target directory.
    Root,
    /// Relative to `src/<package_name>`.
    Package,
}

struct CatalogEntry {
    template: &'static str,
    anchor: Anchor,
    output: &'static str,
}

const fn root(template: &'static str, output: &'static str) -> CatalogEntry {
    CatalogEntry { template, anchor: Anchor::Root, output }
}

const fn package(template: &'static str, output: &'static str) -> CatalogEntry {
    CatalogEntry { template, anchor: Anchor::Package, output }
}

const ENTRIES: &[CatalogEntry] = &[
    root(".github/workflows/python-checks.yml.jinja2", ".github/workflows/python-checks.yml"),
    root(".github/workflows/release.yml.jinja2", ".github/workflows/release.yml"),
    root(".github/workflows/test.yml.jinja2", ".github/workflows/test.yml"),
    root("tests/__init__.py.jinja2", "tests/__init__.py"),
    root("tests/conftest.py.jinja2", "tests/conftest.py"),
    root("tests/test_example.py.jinja2", "tests/test_example.py"),
    root(".flake8.jinja2", ".flake8"),
    root(".gitignore.jinja2", ".gitignore"),
    root(".isort.cfg.jinja2", ".isort.cfg"),
    root(".pylintrc.jinja2", ".pylintrc"),
    root("commitlint.config.js.jinja2", "commitlint.config.js"),
    root("eslint.config.cjs.jinja2", "eslint.config.cjs"),
    root("LICENSE.jinja2", "LICENSE"),
    root("mypy.ini.jinja2", "mypy.ini"),
    root("package.json.jinja2", "package.json"),
    root("pyproject.toml.jinja2", "pyproject.toml"),
    root("pytest.ini.jinja2", "pytest.ini"),
    root("README.md.jinja2", "README.md"),
    root("tasks.py.jinja2", "tasks.py"),
    root("release.config.js.jinja2", "release.config.js"),
    root("update_version.py.jinja2", "update_version.py"),
    package("src/app/__init__.py.jinja2", "__init__.py"),
    package("src/app/logger.py.jinja2", "logger.py"),
    package("src/app/conf.py.jinja2", "conf.py"),
    package("src/app/main.py.jinja2", "main.py"),
    package("src/app/utils.py.jinja2", "utils.py"),
    package("src/app/controllers/__init__.py.jinja2", "controllers/__init__.py"),
    package("src/app/models/__init__.py.jinja2", "models/__init__.py"),
    package("src/app/schemas/__init__.py.jinja2", "schemas/__init__.py"),
    package("src/app/views/__init__.py.jinja2", "views/__init__.py"),
];

/// Joins a `/`-separated relative path onto `base`.
fn join_segments(base: PathBuf, relative: &str) -> PathBuf {
    relative.split('/').fold(base, |path, segment| path.join(segment))
}

/// Identifiers of every template the generator knows about.
pub fn template_ids() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|entry| entry.template)
}

/// Mapping from template identifier to output path relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: IndexMap<String, PathBuf>,
}

impl TemplateCatalog {
    /// Resolves every entry against `package_name`.
    pub fn new(package_name: &str) -> Self {
        let package_root = PathBuf::from(SOURCE_DIR).join(package_name);
        let entries = ENTRIES
            .iter()
            .map(|entry| {
                let base = match entry.anchor {
                    Anchor::Root => PathBuf::new(),
                    Anchor::Package => package_root.clone(),
                };
                (entry.template.to_string(), join_segments(base, entry.output))
            })
            .collect();
        Self { entries }
    }

    /// Drops the entries whose template identifier is listed.
    pub fn excluding<I, S>(mut self, template_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in template_ids {
            let id = id.as_ref();
            if self.entries.shift_remove(id).is_none() {
                log::warn!("Cannot exclude '{id}': no such template in the catalog");
            }
        }
        self
    }

    pub fn get(&self, template_id: &str) -> Option<&Path> {
        self.entries.get(template_id).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(id, path)| (id.as_str(), path.as_path()))
    }

    pub fn output_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.values().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I: Into<String>, P: Into<PathBuf>> FromIterator<(I, P)> for TemplateCatalog {
    /// Builds a catalog from explicit entries, for generator variants with their own list.
    fn from_iter<T: IntoIterator<Item = (I, P)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().map(|(id, path)| (id.into(), path.into())).collect() }
    }
}

/// Builds the catalog for the given package name.
pub fn catalog(package_name: &str) -> TemplateCatalog {
    TemplateCatalog::new(package_name)
}
