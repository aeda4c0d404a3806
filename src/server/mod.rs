// Server module entry point
// Listener binding and the connection accept loop

pub mod connection;
pub mod listener;

// Re-export commonly used entry points
pub use connection::run;
pub use listener::bind_listener;
