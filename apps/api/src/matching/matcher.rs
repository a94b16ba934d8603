//! The Matcher — per-request orchestration of search, skill-gap, and
//! course lookup. Pure request-scoped computation over shared immutable
//! catalog snapshots; no state survives a call.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use anyhow::anyhow;
use serde::Serialize;

use crate::catalog::{CourseCatalog, JobCatalog};
use crate::errors::AppError;
use crate::matching::courses::recommend_courses;
use crate::matching::search::JobSearch;
use crate::matching::skill_gap::compute_skill_gap;
use crate::models::course::Course;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

/// Full structured output of one match: the top posting, the skill-gap
/// partition (lowercased), and courses for the missing skills.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub top_match: JobPosting,
    pub missing_skills: BTreeSet<String>,
    pub strong_skills: BTreeSet<String>,
    pub course_recommendations: BTreeMap<String, Vec<Course>>,
}

/// Matcher over immutable catalog snapshots.
///
/// Constructible with an empty job catalog; in that state every request is
/// answered with `ServiceUnavailable`, distinguishing "catalog never
/// loaded" from "searched but found nothing" (`NotFound`).
#[derive(Clone)]
pub struct Matcher {
    jobs: Arc<JobCatalog>,
    courses: Arc<CourseCatalog>,
    search: Arc<dyn JobSearch>,
}

impl Matcher {
    pub fn new(
        jobs: Arc<JobCatalog>,
        courses: Arc<CourseCatalog>,
        search: Arc<dyn JobSearch>,
    ) -> Self {
        Self {
            jobs,
            courses,
            search,
        }
    }

    /// Runs the full match for one profile. All-or-nothing: a failed match
    /// never returns partial results, and nothing is retried internally.
    pub async fn build_match_result(
        &self,
        profile: &CandidateProfile,
    ) -> Result<MatchResult, AppError> {
        if self.jobs.is_empty() {
            return Err(AppError::ServiceUnavailable(
                "Job data is not available. Please run the ingestion script.".to_string(),
            ));
        }

        let profile_text = profile.flatten();
        let matching_ids = self.search.find_top_matches(&profile_text, &self.jobs).await?;

        let Some(top_id) = matching_ids.first() else {
            return Err(AppError::NotFound(
                "Could not find any matching careers for this profile.".to_string(),
            ));
        };

        // Search only returns ids it saw in this same snapshot.
        let top_match = self
            .jobs
            .get(*top_id)
            .ok_or_else(|| AppError::Internal(anyhow!("job id {top_id} missing from catalog")))?
            .clone();

        let gap = compute_skill_gap(&profile.skills, &top_match.required_skills);
        let course_recommendations = recommend_courses(&gap.missing, &self.courses);

        Ok(MatchResult {
            top_match,
            missing_skills: gap.missing,
            strong_skills: gap.strong,
            course_recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::search::KeywordJobSearch;

    fn matcher(jobs: Vec<JobPosting>) -> Matcher {
        Matcher::new(
            Arc::new(JobCatalog::new(jobs).unwrap()),
            Arc::new(CourseCatalog::builtin()),
            Arc::new(KeywordJobSearch),
        )
    }

    fn analyst_posting() -> JobPosting {
        JobPosting {
            id: 1,
            title: "Data Analyst".to_string(),
            company: "Initech".to_string(),
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            description: "python sql analyst role".to_string(),
        }
    }

    fn profile(skills: &[&str], interests: &str) -> CandidateProfile {
        CandidateProfile {
            student_id: 42,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.to_string(),
            performance_summary: String::new(),
        }
    }

    #[tokio::test]
    async fn empty_catalog_is_service_unavailable() {
        let matcher = matcher(vec![]);
        let err = matcher
            .build_match_result(&profile(&["Python"], ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn no_token_overlap_is_not_found() {
        let matcher = matcher(vec![analyst_posting()]);
        let err = matcher
            .build_match_result(&profile(&["Haskell"], "category theory"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn top_match_and_gap_for_partial_skill_overlap() {
        let matcher = matcher(vec![analyst_posting()]);
        let result = matcher
            .build_match_result(&profile(&["Python"], ""))
            .await
            .unwrap();

        assert_eq!(result.top_match.id, 1);
        assert_eq!(result.missing_skills, BTreeSet::from(["sql".to_string()]));
        assert_eq!(result.strong_skills, BTreeSet::from(["python".to_string()]));
        // No builtin course teaches SQL, so the map stays empty.
        assert!(result.course_recommendations.is_empty());
    }

    #[tokio::test]
    async fn missing_skill_with_a_course_gets_a_recommendation() {
        let mut posting = analyst_posting();
        posting.required_skills = vec!["Python".to_string(), "Kubernetes".to_string()];
        let matcher = matcher(vec![posting]);

        let result = matcher
            .build_match_result(&profile(&["Python"], ""))
            .await
            .unwrap();
        let courses = result.course_recommendations.get("Kubernetes").unwrap();
        assert_eq!(courses[0].id, 203);
    }

    #[tokio::test]
    async fn repeated_calls_yield_identical_results() {
        let matcher = matcher(vec![analyst_posting()]);
        let p = profile(&["Python"], "sql databases");
        let a = matcher.build_match_result(&p).await.unwrap();
        let b = matcher.build_match_result(&p).await.unwrap();

        assert_eq!(a.top_match.id, b.top_match.id);
        assert_eq!(a.missing_skills, b.missing_skills);
        assert_eq!(a.strong_skills, b.strong_skills);
        assert_eq!(
            serde_json::to_value(&a.course_recommendations).unwrap(),
            serde_json::to_value(&b.course_recommendations).unwrap()
        );
    }

    #[tokio::test]
    async fn highest_scoring_posting_wins() {
        let weak = JobPosting {
            id: 1,
            title: "Backend Engineer".to_string(),
            company: "Globex".to_string(),
            required_skills: vec!["Go".to_string()],
            description: "python role".to_string(),
        };
        let strong = JobPosting {
            id: 2,
            title: "Data Engineer".to_string(),
            company: "Initech".to_string(),
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            description: "python sql data role".to_string(),
        };
        let matcher = matcher(vec![weak, strong]);

        let result = matcher
            .build_match_result(&profile(&["Python", "SQL"], "data"))
            .await
            .unwrap();
        assert_eq!(result.top_match.id, 2);
    }
}
