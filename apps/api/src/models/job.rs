use serde::{Deserialize, Serialize};

pub type JobId = u32;

/// A single job posting from the catalog snapshot.
///
/// `required_skills` keeps the catalog's original casing; all comparisons
/// against candidate skills lowercase both sides first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub description: String,
}
