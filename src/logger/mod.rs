//! Logger module
//!
//! Plain line logging for the server: startup banner, access log lines,
//! warnings and errors. Info goes to stdout, errors to stderr.

use std::net::SocketAddr;

use chrono::Local;
use hyper::Method;

use crate::config::Config;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Home page file: {}", config.routes.home_file));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log one access-log line in common log style
pub fn log_request(method: &Method, path: &str, status: u16, body_bytes: u64) {
    let time = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
    write_info(&format!("[{time}] \"{method} {path}\" {status} {body_bytes}"));
}
