//! Immutable catalog snapshots, built once at startup and shared via `Arc`.
//!
//! The Matcher only ever reads these; nothing mutates a catalog after load,
//! so concurrent requests need no locking.

pub mod loader;

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::models::course::Course;
use crate::models::job::{JobId, JobPosting};

/// Snapshot of the job catalog. Iteration order is the source file's order,
/// which is also the tie-break order for equal search scores.
#[derive(Debug, Default)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
}

impl JobCatalog {
    /// Builds a catalog, rejecting duplicate ids (a catalog invariant).
    pub fn new(jobs: Vec<JobPosting>) -> Result<Self> {
        let mut seen: HashSet<JobId> = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.id) {
                bail!("duplicate job id {} in catalog", job.id);
            }
        }
        Ok(Self { jobs })
    }

    /// An empty catalog. Every match request against it is answered with
    /// ServiceUnavailable, mirroring the soft-load degraded state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobPosting> {
        self.jobs.iter()
    }

    pub fn get(&self, id: JobId) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

/// Snapshot of the course catalog.
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Built-in catalog used when no COURSES_FILE is configured.
    pub fn builtin() -> Self {
        Self::new(vec![
            Course {
                id: 201,
                title: "Advanced Machine Learning with TensorFlow".to_string(),
                skill_taught: "TensorFlow".to_string(),
            },
            Course {
                id: 202,
                title: "Introduction to AWS for Developers".to_string(),
                skill_taught: "AWS".to_string(),
            },
            Course {
                id: 203,
                title: "Mastering Docker and Kubernetes".to_string(),
                skill_taught: "Kubernetes".to_string(),
            },
            Course {
                id: 204,
                title: "Web Development with Django".to_string(),
                skill_taught: "Django".to_string(),
            },
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }
}
