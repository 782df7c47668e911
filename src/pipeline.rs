//! Core scaffolding pipeline.
//! Combines profile collection, template fetching, materialization, staging
//! cleanup and dependency installation into one sequential run.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::STAGING_DIR;
use crate::error::{Error, PipelineError, Result};
use crate::fetcher::TemplateFetcher;
use crate::install::Installer;
use crate::materializer::TreeMaterializer;
use crate::profile::{ProjectProfile, ProjectType};
use crate::prompt::Prompter;
use crate::resolver::DestinationResolver;
use crate::template::TemplateRegistry;

/// Stages of a pipeline run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingProfile,
    Fetching,
    Materializing,
    CleaningUp,
    Installing,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::CollectingProfile => "collecting profile",
            Stage::Fetching => "fetching",
            Stage::Materializing => "materializing",
            Stage::CleaningUp => "cleaning up",
            Stage::Installing => "installing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Non-fatal problem reported alongside a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The staging directory could not be removed
    Cleanup { path: PathBuf, cause: String },
    /// Dependency installation failed
    Installation { cause: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::Cleanup { path, cause } => {
                write!(f, "could not remove '{}': {}", path.display(), cause)
            }
            Warning::Installation { cause } => {
                write!(f, "dependency installation failed: {cause}")
            }
        }
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub struct Outcome {
    pub profile: ProjectProfile,
    pub project_dir: PathBuf,
    pub warnings: Vec<Warning>,
}

/// Receives progress notifications at stage boundaries.
pub trait PipelineObserver {
    fn stage_started(&self, _stage: Stage, _detail: &str) {}
    fn stage_finished(&self, _stage: Stage, _detail: &str) {}
}

/// Observer that ignores every notification.
pub struct SilentObserver;

impl PipelineObserver for SilentObserver {}

/// Observer printing one line per stage boundary.
pub struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn stage_started(&self, stage: Stage, detail: &str) {
        match stage {
            Stage::CollectingProfile => println!("Basic configuration..."),
            Stage::Fetching => println!("Downloading the template from {detail}..."),
            Stage::Materializing => println!("Copying files into '{detail}'..."),
            Stage::CleaningUp => println!("Cleaning temporary files..."),
            Stage::Installing => println!("Installing dependencies..."),
            Stage::Done => {}
        }
    }

    fn stage_finished(&self, stage: Stage, detail: &str) {
        match stage {
            Stage::Done => {}
            _ => println!("  done: {stage} ({detail})"),
        }
    }
}

/// Returns the staging directory used for `project_dir`.
pub fn staging_dir<P: AsRef<Path>>(project_dir: P) -> PathBuf {
    project_dir.as_ref().join(STAGING_DIR)
}

/// Asks for the project type (unless preset) and then for the directory name.
pub fn collect_profile(
    prompt: &dyn Prompter,
    destination_root: &Path,
    preset_type: Option<ProjectType>,
) -> Result<ProjectProfile> {
    let project_type = match preset_type {
        Some(project_type) => project_type,
        None => prompt.select_project_type(ProjectType::default())?,
    };
    let resolver = DestinationResolver::new(prompt, destination_root);
    let dir_name = resolver.resolve(&project_type.default_dir_name())?;

    Ok(ProjectProfile::new(project_type, dir_name))
}

/// One scaffolding run. Collaborators are borrowed so tests can swap them.
pub struct Pipeline<'a> {
    pub prompt: &'a dyn Prompter,
    pub fetcher: &'a dyn TemplateFetcher,
    pub materializer: &'a TreeMaterializer<'a>,
    pub installer: &'a dyn Installer,
    pub observer: &'a dyn PipelineObserver,
    pub registry: &'a TemplateRegistry,
    /// Directory the project directory is created in
    pub destination_root: &'a Path,
    /// Project type chosen up front, skipping the type prompt
    pub preset_type: Option<ProjectType>,
}

impl Pipeline<'_> {
    /// Runs every stage in order.
    ///
    /// # Returns
    /// * `Ok(Outcome)` once the project is generated, even if cleanup or
    ///   installation produced warnings
    /// * `Err(PipelineError)` naming the stage that failed. A failed
    ///   materialization leaves the staging tree in place.
    pub fn run(&self) -> std::result::Result<Outcome, PipelineError> {
        let at = |stage: Stage| move |source: Error| PipelineError::new(stage, source);

        self.observer.stage_started(Stage::CollectingProfile, "");
        let profile = collect_profile(self.prompt, self.destination_root, self.preset_type)
            .map_err(at(Stage::CollectingProfile))?;
        info!("Creating {} project '{}'.", profile.project_type, profile.dir_name);
        self.observer.stage_finished(Stage::CollectingProfile, &profile.dir_name);

        let project_dir = self.destination_root.join(&profile.dir_name);
        let staging = staging_dir(&project_dir);
        let mut warnings = Vec::new();

        let reference = self.registry.get(profile.project_type).map_err(at(Stage::Fetching))?;
        let url = reference.url();
        self.observer.stage_started(Stage::Fetching, &url);
        self.fetcher.fetch(reference, &staging).map_err(at(Stage::Fetching))?;
        info!("Fetched template '{}' into '{}'.", url, staging.display());
        self.observer.stage_finished(Stage::Fetching, &url);

        let project_display = project_dir.display().to_string();
        self.observer.stage_started(Stage::Materializing, &project_display);
        let written = self
            .materializer
            .materialize(&staging, &project_dir, &profile)
            .map_err(at(Stage::Materializing))?;
        info!("Materialized {} files into '{}'.", written.len(), project_display);
        self.observer
            .stage_finished(Stage::Materializing, &format!("{} files", written.len()));

        self.observer.stage_started(Stage::CleaningUp, &staging.display().to_string());
        if let Err(e) = fs::remove_dir_all(&staging) {
            let warning = Warning::Cleanup { path: staging.clone(), cause: e.to_string() };
            warn!("{}", warning);
            warnings.push(warning);
        }
        self.observer.stage_finished(Stage::CleaningUp, &staging.display().to_string());

        self.observer.stage_started(Stage::Installing, &project_display);
        if let Err(e) = self.installer.install(&project_dir) {
            let warning = Warning::Installation { cause: format!("{e:#}") };
            warn!("{}", warning);
            warnings.push(warning);
        }
        self.observer.stage_finished(Stage::Installing, &project_display);

        info!("Project '{}' is ready with {} warning(s).", profile.dir_name, warnings.len());
        self.observer.stage_finished(Stage::Done, &profile.dir_name);
        Ok(Outcome { profile, project_dir, warnings })
    }
}
