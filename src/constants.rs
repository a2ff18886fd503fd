//! Constants used throughout the scaffold generator

/// Target directory used when none is given. Never deleted.
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// Suffix carried by every template file name
pub const TEMPLATE_SUFFIX: &str = ".jinja2";

/// Version written into freshly generated projects
pub const DEFAULT_PROJECT_VERSION: &str = "0.1.0";

/// Directory name of the package root under the generated tree
pub const SOURCE_DIR: &str = "src";

/// Marker file that turns a directory into an importable package
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Subpackages created under the package root
pub const SUBPACKAGES: &[&str] = &["controllers", "models", "schemas", "views"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Template delimiters. Brackets keep GitHub Actions `${{ }}` expressions intact.
pub mod syntax {
    pub const BLOCK_START: &str = "[[%";
    pub const BLOCK_END: &str = "%]]";
    pub const VARIABLE_START: &str = "[[";
    pub const VARIABLE_END: &str = "]]";
    pub const COMMENT_START: &str = "[[#";
    pub const COMMENT_END: &str = "#]]";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
