#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use startoff::error::{Error, Result};
use startoff::pipeline::{PipelineObserver, Stage};
use startoff::profile::ProjectType;
use startoff::prompt::Prompter;

/// One prompt interaction, either recorded or scripted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SelectType(ProjectType),
    InputDirName(String),
    ConfirmOverwrite(String),
}

/// Prompter answering from a fixed script and recording every question.
#[derive(Default)]
pub struct ScriptedPrompter {
    project_types: RefCell<VecDeque<ProjectType>>,
    dir_names: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
    pub calls: RefCell<Vec<Call>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(self, project_type: ProjectType) -> Self {
        self.project_types.borrow_mut().push_back(project_type);
        self
    }

    pub fn with_dir_name(self, name: &str) -> Self {
        self.dir_names.borrow_mut().push_back(name.to_string());
        self
    }

    pub fn with_confirmation(self, answer: bool) -> Self {
        self.confirmations.borrow_mut().push_back(answer);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn overwrite_prompts(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::ConfirmOverwrite(_))).count()
    }

    fn exhausted(what: &str) -> Error {
        Error::ValidationError(format!("script has no more {what}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select_project_type(&self, default: ProjectType) -> Result<ProjectType> {
        self.calls.borrow_mut().push(Call::SelectType(default));
        self.project_types.borrow_mut().pop_front().ok_or_else(|| Self::exhausted("types"))
    }

    fn input_dir_name(&self, default: &str) -> Result<String> {
        self.calls.borrow_mut().push(Call::InputDirName(default.to_string()));
        self.dir_names.borrow_mut().pop_front().ok_or_else(|| Self::exhausted("names"))
    }

    fn confirm_overwrite(&self, dir_name: &str) -> Result<bool> {
        self.calls.borrow_mut().push(Call::ConfirmOverwrite(dir_name.to_string()));
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Self::exhausted("confirmations"))
    }
}

/// Observer remembering every stage boundary it was told about.
#[derive(Default)]
pub struct RecordingObserver {
    pub started: RefCell<Vec<Stage>>,
    pub finished: RefCell<Vec<Stage>>,
}

impl PipelineObserver for RecordingObserver {
    fn stage_started(&self, stage: Stage, _detail: &str) {
        self.started.borrow_mut().push(stage);
    }

    fn stage_finished(&self, stage: Stage, _detail: &str) {
        self.finished.borrow_mut().push(stage);
    }
}

/// Writes `files` (relative path, content) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Lists every regular file under `root` as a sorted set of relative paths.
pub fn relative_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Creates a git repository at `<root>/<owner>/<name>` with one commit
/// holding `files`. Returns the host URL to pair with `owner/name`.
pub fn make_template_repo(root: &Path, owner: &str, name: &str, files: &[(&str, &[u8])]) -> String {
    let repo_dir = root.join(owner).join(name);
    fs::create_dir_all(&repo_dir).unwrap();
    let repo = git2::Repository::init(&repo_dir).unwrap();
    write_tree(&repo_dir, files);

    let mut index = repo.index().unwrap();
    index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = git2::Signature::now("Template Author", "author@example.com").unwrap();
    repo.commit(Some("HEAD"), &signature, &signature, "Initial template", &tree, &[])
        .unwrap();

    url::Url::from_directory_path(root).unwrap().as_str().trim_end_matches('/').to_string()
}
