pub mod consent_service;

pub use consent_service::{ConsentStage, authenticate_with_owner};

pub type Result<T> = std::result::Result<T, crate::HelloError>;
