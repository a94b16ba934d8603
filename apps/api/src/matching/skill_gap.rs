//! Skill-gap computation: a pure, case-insensitive set partition.

use std::collections::BTreeSet;

/// Missing and strong skill sets for a candidate against one posting.
///
/// Both sets are lowercased; together they partition the posting's
/// lowercased required-skill set (missing = required − candidate,
/// strong = required ∩ candidate). `BTreeSet` keeps the serialized
/// order stable across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGap {
    pub missing: BTreeSet<String>,
    pub strong: BTreeSet<String>,
}

/// Partitions `required_skills` by membership in `candidate_skills`,
/// comparing case-insensitively. Idempotent and independent of input
/// ordering.
pub fn compute_skill_gap(candidate_skills: &[String], required_skills: &[String]) -> SkillGap {
    let candidate: BTreeSet<String> = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let required: BTreeSet<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    let missing = required.difference(&candidate).cloned().collect();
    let strong = required.intersection(&candidate).cloned().collect();
    SkillGap { missing, strong }
}
