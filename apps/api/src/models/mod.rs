pub mod course;
pub mod job;
pub mod profile;
