pub mod auth_service;
pub mod candidate_service;
pub mod projection_service;
