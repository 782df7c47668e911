//! Glob pattern sets used while walking the staging tree.
//! One set excludes paths from the project entirely, another marks files that
//! are copied byte for byte instead of being rendered.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles `patterns` into a single GlobSet.
///
/// # Errors
/// * `Error::IgnorePatternError` if any pattern is not a valid glob
pub fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref().trim();
        if pattern.is_empty() {
            continue;
        }
        debug!("Adding pattern '{}'", pattern);
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnorePatternError(format!("invalid pattern '{pattern}': {e}"))
        })?);
    }
    builder.build().map_err(|e| Error::IgnorePatternError(e.to_string()))
}

/// Builds the ignore set: the built-in patterns followed by `extra`.
pub fn ignore_set<S: AsRef<str>>(extra: &[S]) -> Result<GlobSet> {
    let mut patterns: Vec<&str> = DEFAULT_IGNORE_PATTERNS.to_vec();
    patterns.extend(extra.iter().map(|p| p.as_ref()));
    build_glob_set(&patterns)
}
