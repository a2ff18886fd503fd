use crate::error::{Error, Result};
use crate::loader::{interface::TemplateLoader, TemplateSource};

macro_rules! bundle {
    ($id:literal) => {
        ($id, include_str!(concat!("../../templates/", $id)))
    };
}

/// Templates compiled into the binary, keyed by identifier.
const BUNDLED: &[(&str, &str)] = &[
    bundle!(".github/workflows/python-checks.yml.jinja2"),
    bundle!(".github/workflows/release.yml.jinja2"),
    bundle!(".github/workflows/test.yml.jinja2"),
    bundle!("tests/__init__.py.jinja2"),
    bundle!("tests/conftest.py.jinja2"),
    bundle!("tests/test_example.py.jinja2"),
    bundle!(".flake8.jinja2"),
    bundle!(".gitignore.jinja2"),
    bundle!(".isort.cfg.jinja2"),
    bundle!(".pylintrc.jinja2"),
    bundle!("commitlint.config.js.jinja2"),
    bundle!("eslint.config.cjs.jinja2"),
    bundle!("LICENSE.jinja2"),
    bundle!("mypy.ini.jinja2"),
    bundle!("package.json.jinja2"),
    bundle!("pyproject.toml.jinja2"),
    bundle!("pytest.ini.jinja2"),
    bundle!("README.md.jinja2"),
    bundle!("tasks.py.jinja2"),
    bundle!("release.config.js.jinja2"),
    bundle!("update_version.py.jinja2"),
    bundle!("src/app/__init__.py.jinja2"),
    bundle!("src/app/logger.py.jinja2"),
    bundle!("src/app/conf.py.jinja2"),
    bundle!("src/app/main.py.jinja2"),
    bundle!("src/app/utils.py.jinja2"),
    bundle!("src/app/controllers/__init__.py.jinja2"),
    bundle!("src/app/models/__init__.py.jinja2"),
    bundle!("src/app/schemas/__init__.py.jinja2"),
    bundle!("src/app/views/__init__.py.jinja2"),
];

/// Loader serving the templates shipped with the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledLoader;

impl BundledLoader {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateLoader for BundledLoader {
    fn load(&self, template_id: &str) -> Result<String> {
        BUNDLED
            .iter()
            .find(|(id, _)| *id == template_id)
            .map(|(_, body)| body.to_string())
            .ok_or_else(|| Error::TemplateNotFound {
                template: template_id.to_string(),
                source_name: TemplateSource::Bundled.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template_ids;

    #[test]
    fn every_catalog_template_is_bundled() {
        let loader = BundledLoader::new();
        for id in template_ids() {
            assert!(loader.load(id).is_ok(), "{id} is not bundled");
        }
        assert_eq!(BUNDLED.len(), template_ids().count());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let result = BundledLoader::new().load("setup.cfg.jinja2");
        assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
    }
}
