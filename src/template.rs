//! Template references and the lookup table selecting one per project type.

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::constants::{GIT_BASE, H5_TEMPLATE_REPOSITORY, PC_TEMPLATE_REPOSITORY};
use crate::error::{Error, Result};
use crate::profile::ProjectType;

static REPOSITORY_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("a valid regex pattern")
});

/// Location of a remote template repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateReference {
    /// Base URL of the hosting service, e.g. `https://github.com`
    pub host: String,
    /// `owner/repo` path on the host
    pub repository: String,
}

impl TemplateReference {
    pub fn new<H: Into<String>, R: Into<String>>(host: H, repository: R) -> Self {
        Self { host: host.into(), repository: repository.into() }
    }

    /// Full clone URL of the repository.
    pub fn url(&self) -> String {
        format!("{}/{}", self.host.trim_end_matches('/'), self.repository)
    }

    /// Checks that the repository path has the `owner/repo` shape.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::ConfigError(format!(
                "template host for '{}' must not be empty",
                self.repository
            )));
        }
        if !REPOSITORY_PATH.is_match(&self.repository) {
            return Err(Error::ConfigError(format!(
                "template repository '{}' must look like 'owner/repo'",
                self.repository
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for TemplateReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// Immutable mapping from project type to template reference.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: IndexMap<ProjectType, TemplateReference>,
}

impl TemplateRegistry {
    /// Builds a registry from the defaults with `overrides` applied on top.
    pub fn with_overrides(overrides: IndexMap<ProjectType, TemplateReference>) -> Result<Self> {
        let mut templates = Self::default().templates;
        for (project_type, reference) in overrides {
            reference.validate()?;
            templates.insert(project_type, reference);
        }
        Ok(Self { templates })
    }

    /// Returns the template reference for the given project type.
    pub fn get(&self, project_type: ProjectType) -> Result<&TemplateReference> {
        self.templates.get(&project_type).ok_or_else(|| {
            Error::ConfigError(format!("no template registered for '{project_type}'"))
        })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        let mut templates = IndexMap::new();
        templates.insert(ProjectType::Pc, TemplateReference::new(GIT_BASE, PC_TEMPLATE_REPOSITORY));
        templates.insert(ProjectType::H5, TemplateReference::new(GIT_BASE, H5_TEMPLATE_REPOSITORY));
        Self { templates }
    }
}
