use serde::{Deserialize, Serialize};

/// Inbound candidate profile. One per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub student_id: u32,
    pub skills: Vec<String>,
    pub interests: String,
    pub performance_summary: String,
}

impl CandidateProfile {
    /// Flattens the profile into the free-text string the search tokenizes:
    /// skills joined by spaces, then interests, then the performance summary.
    pub fn flatten(&self) -> String {
        format!(
            "{} {} {}",
            self.skills.join(" "),
            self.interests,
            self.performance_summary
        )
    }
}
