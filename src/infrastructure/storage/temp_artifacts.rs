use std::io;
use std::path::PathBuf;

use crate::domain::JobIdentity;

/// Tracks every filesystem path created for one request and guarantees their
/// removal. One instance per request; release happens through an explicit
/// `cleanup_all` call, with `Drop` as a backstop for unexpected exits.
pub struct TempArtifacts {
    base_dir: PathBuf,
    job: JobIdentity,
    paths: Vec<PathBuf>,
    cleaned: bool,
}

impl TempArtifacts {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            job: JobIdentity::new(),
            paths: Vec::new(),
            cleaned: false,
        }
    }

    pub fn job(&self) -> &JobIdentity {
        &self.job
    }

    /// Write the upload to a file named from the job identity, keeping the
    /// extension recovered from the client filename (none if absent).
    pub fn save(&mut self, data: &[u8], extension: Option<&str>) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.base_dir)?;

        let mut path = self.base_dir.join(self.job.as_str());
        if let Some(ext) = extension {
            path.set_extension(ext);
        }

        std::fs::write(&path, data)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Saved upload");
        self.paths.push(path.clone());
        Ok(path)
    }

    /// Name a sibling artifact for this job with the given extension. The
    /// caller registers it once it actually exists.
    pub fn derived_path(&self, extension: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.{}", self.job.as_str(), extension))
    }

    /// Record an additionally created artifact for cleanup. Registering the
    /// same path twice is a no-op, so no path is ever deleted twice.
    pub fn register_derived(&mut self, path: PathBuf) {
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Delete every registered path that still exists. "Already gone" is not
    /// an error; any other deletion failure is logged and never re-raised,
    /// so it cannot mask a pipeline error. Runs at most once.
    pub fn cleanup_all(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;

        for path in self.paths.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "Removed temp artifact");
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to remove temp artifact"
                    );
                }
            }
        }
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        self.cleanup_all();
    }
}
