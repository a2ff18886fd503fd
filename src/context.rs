//! Answers captured from the user and the render context derived from them.

use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The six answers collected before generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub project_name: String,
    pub project_owner: String,
    pub author: String,
    pub description: String,
    pub license: String,
    pub email: String,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            project_name: "My Project".to_string(),
            project_owner: "fflintstone".to_string(),
            author: "Fred Flintstone".to_string(),
            description: "A sample project".to_string(),
            license: "MIT".to_string(),
            email: "fred.flintstone@example.com".to_string(),
        }
    }
}

/// Closed mapping from field name to string value.
///
/// Templates may only reference keys present here; rendering fails on any miss.
/// Only [`ContextBuilder::build`] populates one, so the derived names always
/// follow `project_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext(IndexMap<String, String>);

impl RenderContext {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The derived package name. Every built context carries one.
    pub fn package_name(&self) -> &str {
        self.get("package_name").unwrap_or_default()
    }
}

#[cfg(test)]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenderContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Distribution name: lower-cased, spaces become hyphens.
pub fn module_name(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "-")
}

/// Import name: lower-cased, spaces become underscores.
pub fn package_name(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "_")
}

/// Turns answers into the full render context.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    version: String,
    year: i32,
}

impl ContextBuilder {
    /// Creates a builder for the given project version, pinned to the current year.
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into(), year: chrono::Local::now().year() }
    }

    /// Overrides the year written into the context.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn build(&self, answers: &Answers) -> RenderContext {
        let mut context = RenderContext::default();
        context.insert("project_name", &answers.project_name);
        context.insert("project_owner", &answers.project_owner);
        context.insert("author", &answers.author);
        context.insert("description", &answers.description);
        context.insert("license", &answers.license);
        context.insert("email", &answers.email);
        context.insert("version", &self.version);
        context.insert("year", self.year.to_string());
        context.insert("module_name", module_name(&answers.project_name));
        context.insert("package_name", package_name(&answers.project_name));
        context
    }
}
