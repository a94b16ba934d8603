//! One-shot catalog loading at process start.
//!
//! Strict mode aborts startup on a missing or malformed file; soft mode logs
//! a warning and degrades to an empty job catalog, in which state every
//! match request is answered with 503.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::catalog::{CourseCatalog, JobCatalog};
use crate::models::course::Course;
use crate::models::job::JobPosting;

/// Loads the job catalog from a JSON array file.
///
/// Returns `Err` only in strict mode; soft mode maps every failure to an
/// empty catalog. Duplicate ids are a failure in both modes.
pub fn load_job_catalog(path: &Path, strict: bool) -> Result<JobCatalog> {
    match read_job_catalog(path) {
        Ok(catalog) => {
            info!("Loaded {} jobs from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!(
                "Job catalog unavailable ({e:#}); starting with an empty catalog. \
                 Match requests will return 503 until {} is provided.",
                path.display()
            );
            Ok(JobCatalog::empty())
        }
    }
}

fn read_job_catalog(path: &Path) -> Result<JobCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read job catalog file {}", path.display()))?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse job catalog file {}", path.display()))?;
    JobCatalog::new(jobs)
}

/// Loads the course catalog, falling back to the built-in one when no file
/// is configured. A configured-but-unreadable file is always an error: the
/// operator asked for a specific catalog, silently substituting the builtin
/// would mask it.
pub fn load_course_catalog(path: Option<&Path>) -> Result<CourseCatalog> {
    let Some(path) = path else {
        info!("No course catalog file configured; using the built-in catalog");
        return Ok(CourseCatalog::builtin());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read course catalog file {}", path.display()))?;
    let courses: Vec<Course> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse course catalog file {}", path.display()))?;
    info!("Loaded {} courses from {}", courses.len(), path.display());
    Ok(CourseCatalog::new(courses))
}
