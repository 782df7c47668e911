//! User input and interaction handling.
//! The pipeline talks to the terminal only through the `Prompter` trait.

use crate::error::{Error, Result};
use crate::profile::ProjectType;
use dialoguer::{Confirm, Input, Select};
use std::path::{Component, Path};

/// Checks a directory name typed by the user.
///
/// # Errors
/// * `Error::ValidationError` if the name is empty or only whitespace, or
///   if it is absolute or contains `.`/`..` segments
pub fn validate_dir_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ValidationError("directory name must not be empty".to_string()));
    }
    if !Path::new(name).components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(Error::ValidationError(format!(
            "'{name}' must be a relative path inside the current directory"
        )));
    }
    Ok(())
}

/// Source of the user's answers.
pub trait Prompter {
    /// Asks which kind of project to create.
    fn select_project_type(&self, default: ProjectType) -> Result<ProjectType>;

    /// Asks for the project directory name, offering `default`.
    fn input_dir_name(&self, default: &str) -> Result<String>;

    /// Asks whether an existing directory may be reused. Refusal is the default.
    fn confirm_overwrite(&self, dir_name: &str) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select_project_type(&self, default: ProjectType) -> Result<ProjectType> {
        let items: Vec<&str> = ProjectType::ALL.iter().map(|t| t.description()).collect();
        let default_index =
            ProjectType::ALL.iter().position(|t| *t == default).unwrap_or_default();

        let selection = Select::new()
            .with_prompt("Please choose the use for your project")
            .default(default_index)
            .items(&items)
            .interact()?;

        Ok(ProjectType::ALL[selection])
    }

    fn input_dir_name(&self, default: &str) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt("Please enter the directory name for your project")
            .default(default.to_string())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate_dir_name(input).map_err(|e| e.to_string())
            })
            .interact_text()?;

        Ok(input.trim().to_string())
    }

    fn confirm_overwrite(&self, dir_name: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(format!(
                "Directory '{dir_name}' exists. Use this directory anyway? Files may be overwritten."
            ))
            .default(false)
            .interact()?;

        Ok(answer)
    }
}
