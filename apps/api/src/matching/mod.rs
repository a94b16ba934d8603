// Career matching core: keyword search, skill-gap partition, course lookup,
// and the Matcher that orchestrates them per request.

pub mod courses;
pub mod handlers;
pub mod matcher;
pub mod search;
pub mod skill_gap;
