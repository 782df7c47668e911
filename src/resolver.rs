//! Resolution of the project directory name.
//!
//! The user is asked for a name. An existing directory needs explicit consent,
//! and refusing restarts the flow from the fallback name.

use log::{debug, warn};
use std::path::Path;

use crate::constants::FALLBACK_DIR;
use crate::error::Result;
use crate::prompt::{validate_dir_name, Prompter};

/// Returns true if `<root>/<name>` already exists.
pub fn check_exists<P: AsRef<Path>>(root: P, name: &str) -> bool {
    root.as_ref().join(name).exists()
}

#[derive(Debug, PartialEq, Eq)]
enum ResolveState {
    AskName { default: String },
    CheckExists { name: String },
    ConfirmOverwrite { name: String },
    Resolved { name: String },
}

/// Asks for a directory name under `root` until the user settles on one.
pub struct DestinationResolver<'a> {
    prompt: &'a dyn Prompter,
    root: &'a Path,
}

impl<'a> DestinationResolver<'a> {
    pub fn new(prompt: &'a dyn Prompter, root: &'a Path) -> Self {
        Self { prompt, root }
    }

    /// Runs the ask/check/confirm loop starting from `default_name`.
    ///
    /// # Returns
    /// * `Result<String>` - A non-empty name that either does not exist under
    ///   the root or that the user agreed to reuse
    ///
    /// # Errors
    /// Only prompt I/O failures. Empty names and names escaping the root are
    /// re-asked, never returned.
    pub fn resolve(&self, default_name: &str) -> Result<String> {
        let mut state = ResolveState::AskName { default: default_name.to_string() };

        loop {
            debug!("Resolving destination: {:?}", state);
            state = match state {
                ResolveState::AskName { default } => {
                    let name = self.prompt.input_dir_name(&default)?;
                    match validate_dir_name(&name) {
                        Ok(()) => ResolveState::CheckExists { name },
                        Err(e) => {
                            warn!("{}", e);
                            ResolveState::AskName { default }
                        }
                    }
                }
                ResolveState::CheckExists { name } => {
                    if check_exists(self.root, &name) {
                        ResolveState::ConfirmOverwrite { name }
                    } else {
                        ResolveState::Resolved { name }
                    }
                }
                ResolveState::ConfirmOverwrite { name } => {
                    if self.prompt.confirm_overwrite(&name)? {
                        ResolveState::Resolved { name }
                    } else {
                        ResolveState::AskName { default: FALLBACK_DIR.to_string() }
                    }
                }
                ResolveState::Resolved { name } => return Ok(name),
            };
        }
    }
}
