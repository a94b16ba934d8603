//! Course lookup for missing skills.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::CourseCatalog;
use crate::models::course::Course;

/// Builds the recommendation map for a set of missing skills.
///
/// Keys are capitalization-normalized ("sql" → "Sql", "tensorflow" →
/// "Tensorflow"); matching against `skill_taught` is case-insensitive.
/// Skills no course teaches are omitted entirely, never mapped to an
/// empty list.
pub fn recommend_courses(
    missing_skills: &BTreeSet<String>,
    catalog: &CourseCatalog,
) -> BTreeMap<String, Vec<Course>> {
    let mut recommendations = BTreeMap::new();
    for skill in missing_skills {
        let courses = courses_for_skill(skill, catalog);
        if !courses.is_empty() {
            recommendations.insert(capitalize(skill), courses);
        }
    }
    recommendations
}

fn courses_for_skill(skill: &str, catalog: &CourseCatalog) -> Vec<Course> {
    let skill_lower = skill.to_lowercase();
    catalog
        .iter()
        .filter(|course| course.skill_taught.to_lowercase() == skill_lower)
        .cloned()
        .collect()
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
