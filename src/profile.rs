//! Project profile: the choices collected from the user before generation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of project to scaffold. Each kind maps to its own template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Desktop app based on ts, vue and element-plus
    #[default]
    Pc,
    /// Mobile app based on ts, vue and vant
    H5,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::Pc, ProjectType::H5];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Pc => "pc",
            ProjectType::H5 => "h5",
        }
    }

    /// Label shown in the project type selection.
    pub fn description(&self) -> &'static str {
        match self {
            ProjectType::Pc => "pc (app based on ts, vue, element-plus...)",
            ProjectType::H5 => "h5 (app based on ts, vue, vant...)",
        }
    }

    /// Directory name offered by default once the type is known.
    pub fn default_dir_name(&self) -> String {
        format!("{}-app", self.as_str())
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved user choices consumed by the fetch and materialize stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProfile {
    pub project_type: ProjectType,
    pub dir_name: String,
}

impl ProjectProfile {
    pub fn new<S: Into<String>>(project_type: ProjectType, dir_name: S) -> Self {
        Self { project_type, dir_name: dir_name.into() }
    }

    /// Variables exposed to templates, both in file contents and in paths.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "dirName": self.dir_name,
            "directoryName": self.dir_name,
            "projectType": self.project_type.as_str(),
        })
    }
}
