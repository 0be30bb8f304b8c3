//! # EduMat Gateway
//! HTTP layer for the activity service: provisioning endpoints, the
//! student-facing activity page, and the analytics descriptors.

pub mod pages;
pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
