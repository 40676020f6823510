pub mod candidate;
pub mod envelope;
pub mod job_role;
