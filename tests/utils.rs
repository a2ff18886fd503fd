#![allow(dead_code)]

use pyscaffold::context::Answers;
use pyscaffold::loader::{bundled::BundledLoader, TemplateLoader};
use pyscaffold::catalog::template_ids;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Answers used by the documented example run.
pub fn example_answers() -> Answers {
    Answers {
        project_name: "My Project".to_string(),
        project_owner: "fflintstone".to_string(),
        author: "Fred Flintstone".to_string(),
        description: "A sample project".to_string(),
        license: "MIT".to_string(),
        email: "fred@example.com".to_string(),
    }
}

/// Relative path and content of every regular file under `dir`.
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Writes the bundled templates into `dir` so tests can edit them.
pub fn export_bundled_templates(dir: &Path) {
    let loader = BundledLoader::new();
    for id in template_ids() {
        let path = id.split('/').fold(dir.to_path_buf(), |p, s| p.join(s));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, loader.load(id).unwrap()).unwrap();
    }
}

/// Prints files present on only one side and files whose content differs.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let left = snapshot(dir1);
    let right = snapshot(dir2);

    println!("\n=== Directory Comparison ===");
    for (path, content) in &left {
        match right.get(path) {
            None => println!("  + {path:?}"),
            Some(other) if other != content => println!("  ~ {path:?}"),
            Some(_) => {}
        }
    }
    for path in right.keys().filter(|p| !left.contains_key(*p)) {
        println!("  - {path:?}");
    }
    println!("=== End of Comparison ===\n");
}
