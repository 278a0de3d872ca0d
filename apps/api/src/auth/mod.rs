//! Credential checks and cookie sessions.
//!
//! Passwords are hashed with Argon2id; sessions are random server-side
//! tokens carried in an http-only `sid` cookie and resolved by the
//! `AuthUser` extractor.

pub mod extract;
pub mod handlers;
pub mod password;
pub mod session;

pub use extract::AuthUser;
pub use session::{SessionStore, SESSION_COOKIE};
