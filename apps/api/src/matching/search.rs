//! Job search — pluggable, trait-based search over the job catalog.
//!
//! Default: `KeywordJobSearch` (pure-Rust, fast, deterministic, fully
//! testable). It is a deliberate stand-in for a real vector-similarity
//! backend: its crude substring scoring is part of the contract and must
//! not be "improved" (no length normalization, no token dedup).
//!
//! `AppState` holds an `Arc<dyn JobSearch>`, swapped at startup.

use async_trait::async_trait;

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::job::JobId;

/// At most this many ids come back from a search.
pub const MAX_MATCHES: usize = 10;

/// The job search trait. Implement this to swap in a semantic backend
/// without touching the Matcher, handlers, or routes.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Returns matching job ids, best first, at most [`MAX_MATCHES`].
    /// An empty result means "no match found" and is reported to the
    /// caller as such, never silently defaulted.
    async fn find_top_matches(
        &self,
        profile_text: &str,
        catalog: &JobCatalog,
    ) -> Result<Vec<JobId>, AppError>;
}

/// Keyword-overlap search.
///
/// Algorithm:
/// 1. Tokenize the profile text into lowercase whitespace-separated terms.
/// 2. Score each posting by the number of terms occurring as a substring of
///    its lowercased description. A term repeated in the profile counts
///    once per occurrence.
/// 3. Drop zero scores, sort descending; ties keep catalog order (stable
///    sort), take the top 10.
pub struct KeywordJobSearch;

#[async_trait]
impl JobSearch for KeywordJobSearch {
    async fn find_top_matches(
        &self,
        profile_text: &str,
        catalog: &JobCatalog,
    ) -> Result<Vec<JobId>, AppError> {
        Ok(keyword_search(profile_text, catalog))
    }
}

fn keyword_search(profile_text: &str, catalog: &JobCatalog) -> Vec<JobId> {
    let profile_lower = profile_text.to_lowercase();
    let terms: Vec<&str> = profile_lower.split_whitespace().collect();

    let mut scored: Vec<(JobId, usize)> = Vec::new();
    for job in catalog.iter() {
        let description = job.description.to_lowercase();
        let score = terms
            .iter()
            .filter(|term| description.contains(*term))
            .count();
        if score > 0 {
            scored.push((job.id, score));
        }
    }

    // sort_by is stable, so equal scores keep catalog order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_MATCHES);
    scored.into_iter().map(|(id, _)| id).collect()
}
