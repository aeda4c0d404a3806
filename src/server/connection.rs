// Connection handling module
// Accept loop plus per-connection HTTP/1.1 serving

use std::convert::Infallible;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::handler::Router;
use crate::logger;

/// Run the accept loop until the process is killed.
///
/// Each accepted connection is served on its own task. Accept errors are
/// logged and the loop keeps going.
pub async fn run(
    listener: TcpListener,
    router: Arc<Router>,
    access_log: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                handle_connection(stream, Arc::clone(&router), access_log);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection in a spawned task.
fn handle_connection(stream: TcpStream, router: Arc<Router>, access_log: bool) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let router = Arc::clone(&router);
                async move { Ok::<_, Infallible>(router.dispatch(req, access_log).await) }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
