//! startoff's main application entry point.
//! Handles argument parsing, logger setup and wiring of the pipeline
//! collaborators.

use anyhow::Context;
use startoff::{
    cli::{get_args, Args},
    config::load_config,
    error::default_error_handler,
    fetcher::GitFetcher,
    ignore::{build_glob_set, ignore_set},
    install::{CommandInstaller, Installer, SkipInstaller},
    logger::init_logger,
    materializer::TreeMaterializer,
    pipeline::{ConsoleObserver, Outcome, Pipeline},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    match run(args) {
        Ok(outcome) => report(&outcome),
        Err(err) => default_error_handler(err),
    }
}

/// Builds the collaborators from the configuration and runs the pipeline.
fn run(args: Args) -> anyhow::Result<Outcome> {
    let current_dir = std::env::current_dir().context("cannot read the current directory")?;
    let config = load_config(args.config.as_deref(), &current_dir)?;

    let registry = config.registry()?;
    let renderer = MiniJinjaRenderer::new();
    let materializer = TreeMaterializer::new(
        &renderer,
        ignore_set(&config.ignore)?,
        build_glob_set(&config.copy_without_render)?,
    );
    let fetcher = GitFetcher::new(config.fetch_timeout());
    let installer: Box<dyn Installer> = if args.skip_install || !config.install.enabled {
        Box::new(SkipInstaller)
    } else {
        Box::new(CommandInstaller::new(&config.install.program, config.install.args.clone()))
    };
    let prompt = DialoguerPrompter::new();

    let pipeline = Pipeline {
        prompt: &prompt,
        fetcher: &fetcher,
        materializer: &materializer,
        installer: &*installer,
        observer: &ConsoleObserver,
        registry: &registry,
        destination_root: &args.destination,
        preset_type: args.project_type,
    };

    Ok(pipeline.run()?)
}

fn report(outcome: &Outcome) {
    println!();
    println!(
        "Create project successfully! Now you can enter '{}' and start to code.",
        outcome.profile.dir_name
    );
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
}
