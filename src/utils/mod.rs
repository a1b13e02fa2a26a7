pub mod constants;
pub mod session;
pub mod tracing;
