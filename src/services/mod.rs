pub mod auth_service;
pub mod company_service;
pub mod job_service;
