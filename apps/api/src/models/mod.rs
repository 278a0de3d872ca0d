pub mod application;
pub mod job;
pub mod resume;
pub mod twitter_job;
pub mod user;

pub use application::{Application, NewApplication};
pub use job::{Job, NewJob};
pub use resume::{NewResume, Resume};
pub use twitter_job::{NewTwitterJob, TwitterJob, TwitterJobPatch};
pub use user::{JobPreferences, NewUser, User};
