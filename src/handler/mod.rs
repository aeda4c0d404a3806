//! Request handler module
//!
//! Responsible for request routing dispatch and the two route handlers:
//! static home page serving and the fixed test greeting.

pub mod greeting;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::Router;
