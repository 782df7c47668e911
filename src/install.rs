//! Hand-off to the external dependency installer.
//! Failures here are advisory: the generated project is kept either way.

use anyhow::{bail, Context};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Installs the dependencies of a freshly generated project.
pub trait Installer {
    fn install(&self, project_dir: &Path) -> anyhow::Result<()>;
}

/// Runs an external command (e.g. `npm install`) inside the project directory.
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// The command line as shown to the user.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Installer for CommandInstaller {
    fn install(&self, project_dir: &Path) -> anyhow::Result<()> {
        debug!("Running '{}' in '{}'.", self.command_line(), project_dir.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .status()
            .with_context(|| format!("failed to run '{}'", self.command_line()))?;

        if !status.success() {
            bail!("'{}' exited with {}", self.command_line(), status);
        }
        Ok(())
    }
}

/// Installer used when installation is disabled.
pub struct SkipInstaller;

impl Installer for SkipInstaller {
    fn install(&self, project_dir: &Path) -> anyhow::Result<()> {
        debug!("Skipping dependency installation in '{}'.", project_dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let installer = CommandInstaller::new("npm", vec!["install".to_string()]);
        assert_eq!(installer.command_line(), "npm install");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let installer = CommandInstaller::new("startoff-no-such-installer", vec![]);

        let err = installer.install(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("startoff-no-such-installer"));
    }
}
