//! Common constants used throughout startoff.

/// Supported configuration file names, looked up in the current directory.
pub const CONFIG_FILES: [&str; 3] = ["startoff.json", "startoff.yml", "startoff.yaml"];

/// Directory name offered again after the user refuses to overwrite.
pub const FALLBACK_DIR: &str = "webpack-app";

/// Name of the staging directory created inside the project directory.
pub const STAGING_DIR: &str = ".tmp";

/// Host every default template is fetched from.
pub const GIT_BASE: &str = "https://github.com";

pub const PC_TEMPLATE_REPOSITORY: &str = "ziwen-wang/vant-vue3-template-pc";
pub const H5_TEMPLATE_REPOSITORY: &str = "ziwen-wang/vant-vue3-template-h5";

/// Upper bound for a single template download.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 300;

/// Paths under the staging tree that never reach the project directory.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = [".git", ".git/**", "**/.DS_Store"];

pub const DEFAULT_INSTALL_PROGRAM: &str = "npm";
pub const DEFAULT_INSTALL_ARGS: [&str; 1] = ["install"];
