use serde::{Deserialize, Serialize};

/// A remedial course teaching exactly one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub skill_taught: String,
}
