//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use acervo_demo_api::config::ServerConfig;
use acervo_demo_api::http::DemoServer;
use acervo_demo_api::lifecycle::Shutdown;

/// Start the demo API on an ephemeral port.
///
/// The listener is bound before the server task is spawned, so requests can
/// be sent as soon as this returns. The `Shutdown` handle stops the server
/// at the end of the test.
pub async fn spawn_demo_server() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let server = DemoServer::new(ServerConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that ignores any ambient proxy settings.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
