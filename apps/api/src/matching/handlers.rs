//! Axum route handlers for the career-matching API.

use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::matching::courses::capitalize;
use crate::matching::matcher::MatchResult;
use crate::models::course::Course;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CareerPathResponse {
    pub top_match: JobPosting,
    pub skill_gap: Vec<String>,
    pub strong_skills: Vec<String>,
    pub course_recommendations: BTreeMap<String, Vec<Course>>,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match-careers
///
/// Validates the inbound profile, runs the Matcher against the catalog
/// snapshots, and renders the human-readable summary sentence.
pub async fn handle_match_careers(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<CareerPathResponse>, AppError> {
    validate_profile(&profile)?;

    let result = state.matcher().build_match_result(&profile).await?;
    let summary = build_summary(&result);

    Ok(Json(CareerPathResponse {
        skill_gap: result.missing_skills.iter().cloned().collect(),
        strong_skills: result.strong_skills.iter().cloned().collect(),
        top_match: result.top_match,
        course_recommendations: result.course_recommendations,
        summary,
    }))
}

/// Rejects malformed profiles before matching begins.
fn validate_profile(profile: &CandidateProfile) -> Result<(), AppError> {
    if profile.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }
    if profile.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(
            "skills cannot be blank strings".to_string(),
        ));
    }
    if profile.interests.trim().is_empty() && profile.performance_summary.trim().is_empty() {
        return Err(AppError::Validation(
            "interests and performance_summary cannot both be blank".to_string(),
        ));
    }
    Ok(())
}

/// Builds the summary sentence: top-match title and company, capitalized
/// strong skills as "highly relevant", capitalized missing skills to focus
/// on next.
fn build_summary(result: &MatchResult) -> String {
    let strong = join_capitalized(result.strong_skills.iter());
    let missing = join_capitalized(result.missing_skills.iter());
    format!(
        "Based on your profile, you are a strong candidate for a role like '{}' at {}. \
         Your skills in {} are highly relevant. \
         To be even more competitive, focus on developing these skills: {}.",
        result.top_match.title, result.top_match.company, strong, missing
    )
}

fn join_capitalized<'a>(skills: impl Iterator<Item = &'a String>) -> String {
    skills
        .map(|s| capitalize(s))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn result_fixture() -> MatchResult {
        MatchResult {
            top_match: JobPosting {
                id: 1,
                title: "Data Analyst".to_string(),
                company: "Initech".to_string(),
                required_skills: vec!["Python".to_string(), "SQL".to_string()],
                description: "python sql analyst role".to_string(),
            },
            missing_skills: BTreeSet::from(["sql".to_string()]),
            strong_skills: BTreeSet::from(["python".to_string()]),
            course_recommendations: BTreeMap::new(),
        }
    }

    #[test]
    fn summary_names_role_company_and_both_skill_sets() {
        let summary = build_summary(&result_fixture());
        assert!(summary.contains("'Data Analyst' at Initech"));
        assert!(summary.contains("Your skills in Python are highly relevant"));
        assert!(summary.contains("focus on developing these skills: Sql."));
    }

    #[test]
    fn empty_skills_are_rejected() {
        let profile = CandidateProfile {
            student_id: 1,
            skills: vec![],
            interests: "data".to_string(),
            performance_summary: String::new(),
        };
        assert!(matches!(
            validate_profile(&profile),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn blank_skills_are_rejected() {
        let profile = CandidateProfile {
            student_id: 1,
            skills: vec!["  ".to_string()],
            interests: "data".to_string(),
            performance_summary: String::new(),
        };
        assert!(matches!(
            validate_profile(&profile),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn blank_interests_and_summary_are_rejected() {
        let profile = CandidateProfile {
            student_id: 1,
            skills: vec!["Python".to_string()],
            interests: "   ".to_string(),
            performance_summary: String::new(),
        };
        assert!(matches!(
            validate_profile(&profile),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn summary_alone_satisfies_the_profile_text_requirement() {
        let profile = CandidateProfile {
            student_id: 1,
            skills: vec!["Python".to_string()],
            interests: String::new(),
            performance_summary: "top decile in databases".to_string(),
        };
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn populated_profile_passes_validation() {
        let profile = CandidateProfile {
            student_id: 1,
            skills: vec!["Python".to_string()],
            interests: "data engineering".to_string(),
            performance_summary: String::new(),
        };
        assert!(validate_profile(&profile).is_ok());
    }
}
