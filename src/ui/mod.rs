pub mod admin_header;
pub mod post_job;
