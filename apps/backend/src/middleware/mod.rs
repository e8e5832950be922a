pub mod bearer_auth;
pub mod cors;
pub mod request_trace;
pub mod structured_logger;

pub use bearer_auth::BearerAuth;
pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
