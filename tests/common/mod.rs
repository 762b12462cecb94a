//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use vendor_dispatch::HttpServer;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Bind `server` to 127.0.0.1:0 and serve it in the background.
pub async fn spawn_server(server: HttpServer) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = server
            .run(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    TestServer {
        addr,
        shutdown: Some(tx),
    }
}

/// Non-pooled client so every request opens a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// GET `path` with an optional Accept header, returning status and body.
#[allow(dead_code)]
pub async fn get(server: &TestServer, path: &str, accept: Option<&str>) -> (u16, String) {
    let mut req = client().get(server.url(path));
    if let Some(accept) = accept {
        req = req.header(reqwest::header::ACCEPT, accept);
    }
    let res = req.send().await.expect("Server unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}
