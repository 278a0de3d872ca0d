//! Admin read endpoints. Role checks mirror the agency gating on job
//! creation: a non-admin caller gets the same 401 as an unauthenticated
//! one.

pub mod handlers;
