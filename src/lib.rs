//! startoff is a project scaffolding tool.
//! It asks which kind of project to create and where, downloads the matching
//! template repository, renders it into the project directory and hands off
//! to the dependency installer.

/// Command-line interface module
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (startoff.json, startoff.yml, startoff.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Template download into the staging directory
pub mod fetcher;

/// Glob pattern sets for ignored and verbatim files
pub mod ignore;

/// External dependency installation
pub mod install;

/// Logger initialization
pub mod logger;

/// Rendering and copying of the staging tree
pub mod materializer;

/// Core scaffolding pipeline orchestration
pub mod pipeline;

/// Project type and collected user choices
pub mod profile;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engine
pub mod renderer;

/// Directory name resolution with overwrite confirmation
pub mod resolver;

/// Template references and the per-type lookup table
pub mod template;
