//! # EduMat Core
//! Shared configuration, error type, and data model for the EduMat service.

pub mod config;
pub mod error;
pub mod types;

pub use config::EdumatConfig;
pub use error::{EdumatError, Result};
pub use types::{ActivityRecord, AnalyticsEvent};
