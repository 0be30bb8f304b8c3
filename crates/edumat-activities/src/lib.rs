//! # EduMat Activities
//! The shared activity store and the orchestration service that ties it to
//! the analytics pipeline.

pub mod service;
pub mod store;

pub use service::ActivityService;
pub use store::ActivityStore;
