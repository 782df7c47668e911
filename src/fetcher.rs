//! Template download into the staging directory.
use crate::error::{Error, Result};
use crate::template::TemplateReference;
use log::debug;
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use url::Url;

/// Trait for retrieving a template into a local staging directory.
pub trait TemplateFetcher {
    /// Downloads `reference` into `staging`, creating it if absent.
    ///
    /// A single attempt is made; callers decide whether to retry.
    fn fetch(&self, reference: &TemplateReference, staging: &Path) -> Result<()>;
}

/// Fetcher that clones git repositories with libgit2.
pub struct GitFetcher {
    timeout: Duration,
}

impl GitFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Bounds libgit2's connect and per-read socket waits by the fetch timeout,
    /// so a stalled server cannot outlive the deadline between callbacks.
    fn apply_server_timeouts(&self) {
        let millis = i32::try_from(self.timeout.as_millis()).unwrap_or(i32::MAX).max(1);
        // SAFETY: these only store process-wide libgit2 options. No clone runs
        // concurrently with a fetch in this process.
        let applied = unsafe {
            git2::opts::set_server_connect_timeout_in_milliseconds(millis)
                .and_then(|()| git2::opts::set_server_timeout_in_milliseconds(millis))
        };
        if let Err(e) = applied {
            debug!("Cannot set libgit2 server timeouts: {}", e.message());
        }
    }

    /// Leaves an empty directory at `staging`, dropping leftovers of an earlier run.
    fn prepare_staging(staging: &Path) -> std::io::Result<()> {
        if staging.exists() {
            debug!("Removing stale staging directory '{}'.", staging.display());
            fs::remove_dir_all(staging)?;
        }
        fs::create_dir_all(staging)
    }
}

impl TemplateFetcher for GitFetcher {
    fn fetch(&self, reference: &TemplateReference, staging: &Path) -> Result<()> {
        let repo_url = reference.url();
        let fetch_error = |cause: String| Error::FetchError { reference: repo_url.clone(), cause };

        Url::parse(&repo_url).map_err(|e| fetch_error(format!("invalid URL: {e}")))?;
        Self::prepare_staging(staging).map_err(|e| {
            fetch_error(format!("cannot prepare '{}': {e}", staging.display()))
        })?;

        debug!("Cloning '{}' into '{}'.", repo_url, staging.display());

        // A timeout too large to represent means no deadline at all.
        let deadline = Instant::now().checked_add(self.timeout);
        let timed_out = Cell::new(false);
        let expired = || {
            let expired = deadline.is_some_and(|deadline| Instant::now() >= deadline);
            if expired {
                timed_out.set(true);
            }
            expired
        };
        self.apply_server_timeouts();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.transfer_progress(|progress| {
            if expired() {
                return false;
            }
            debug!(
                "Received {}/{} objects.",
                progress.received_objects(),
                progress.total_objects()
            );
            true
        });
        callbacks.sideband_progress(|_| !expired());

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(&repo_url, staging) {
            Ok(_) => Ok(()),
            Err(_) if timed_out.get() => Err(Error::FetchTimeout {
                reference: repo_url.clone(),
                timeout_secs: self.timeout.as_secs(),
            }),
            Err(e) => Err(fetch_error(e.message().to_string())),
        }
    }
}
