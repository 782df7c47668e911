//! Materialization of a staging tree into the project directory.
//!
//! Every regular file under the staging root is rendered with the profile
//! context and written to the same relative location under the destination.
//! Destination paths are rendered too, so a file named `{{dirName}}.md`
//! becomes `my-app.md`.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::profile::ProjectProfile;
use crate::renderer::TemplateRenderer;

fn materialization_error<P: AsRef<Path>, E: ToString>(path: P, cause: E) -> Error {
    Error::MaterializationError {
        path: path.as_ref().display().to_string(),
        cause: cause.to_string(),
    }
}

/// Returns true if the rendered relative path is safe to join onto the destination.
///
/// Rejects empty paths, absolute paths, empty segments and `..` segments.
pub fn is_rendered_path_valid(rendered: &str) -> bool {
    if rendered.trim().is_empty() || rendered.starts_with('/') {
        return false;
    }
    rendered.split(['/', '\\']).all(|segment| !segment.is_empty() && segment != "..")
}

/// Copies a staging tree into a project directory, rendering as it goes.
pub struct TreeMaterializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    ignored: GlobSet,
    verbatim: GlobSet,
}

impl<'a> TreeMaterializer<'a> {
    /// # Arguments
    /// * `renderer` - Engine used for contents and paths
    /// * `ignored` - Staging paths that never reach the destination
    /// * `verbatim` - Files copied without rendering
    pub fn new(renderer: &'a dyn TemplateRenderer, ignored: GlobSet, verbatim: GlobSet) -> Self {
        Self { renderer, ignored, verbatim }
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        !relative.as_os_str().is_empty() && self.ignored.is_match(relative)
    }

    /// Materializes every file under `staging_root` into `destination_root`.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Written paths relative to `destination_root`,
    ///   in walk order
    ///
    /// # Errors
    /// * `Error::MaterializationError` on the first file that cannot be read,
    ///   rendered or written. Nothing after it is processed.
    pub fn materialize(
        &self,
        staging_root: &Path,
        destination_root: &Path,
        profile: &ProjectProfile,
    ) -> Result<Vec<PathBuf>> {
        debug!(
            "Materializing '{}' into '{}'",
            staging_root.display(),
            destination_root.display()
        );
        let context = profile.context();
        let mut written = Vec::new();

        let walker = WalkDir::new(staging_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match entry.path().strip_prefix(staging_root) {
                Ok(relative) => !self.is_ignored(relative),
                Err(_) => true,
            });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                materialization_error(path, e)
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let source = entry.path();
            let relative = source
                .strip_prefix(staging_root)
                .map_err(|e| materialization_error(source, e))?;
            let relative = relative
                .to_str()
                .ok_or_else(|| materialization_error(source, "path is not valid UTF-8"))?;

            debug!("Processing source file: {}", relative);

            let rendered_path = self
                .renderer
                .render(relative, &context)
                .map_err(|e| materialization_error(source, e))?;
            if !is_rendered_path_valid(&rendered_path) {
                return Err(materialization_error(
                    source,
                    format!("rendered path '{rendered_path}' is not a valid relative path"),
                ));
            }
            let target = destination_root.join(&rendered_path);

            self.write_entry(source, relative, &target, &context)?;
            written.push(PathBuf::from(rendered_path));
        }

        Ok(written)
    }

    fn write_entry(
        &self,
        source: &Path,
        relative: &str,
        target: &Path,
        context: &serde_json::Value,
    ) -> Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| materialization_error(parent, e))?;
        }

        let bytes = fs::read(source).map_err(|e| materialization_error(source, e))?;
        let content = if self.verbatim.is_match(relative) {
            debug!("Copying file: {}", target.display());
            bytes
        } else {
            match String::from_utf8(bytes) {
                Ok(text) => {
                    debug!("Writing file: {}", target.display());
                    self.renderer
                        .render(&text, context)
                        .map_err(|e| materialization_error(source, e))?
                        .into_bytes()
                }
                Err(not_text) => {
                    debug!("Copying binary file: {}", target.display());
                    not_text.into_bytes()
                }
            }
        };

        fs::write(target, content).map_err(|e| materialization_error(target, e))
    }
}
