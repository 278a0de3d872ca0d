//! Job listings: agency CRUD, the preference-based matching filter, and
//! the two AI helpers (skill extraction, description generation).

pub mod handlers;
pub mod matching;

pub use matching::matching_jobs;
