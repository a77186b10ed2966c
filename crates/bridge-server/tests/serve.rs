//! Real-socket tests: bind an ephemeral port and talk to it over HTTP.

use std::net::SocketAddr;

use bridge_server::BridgeServer;
use bridge_test_utils::{hierarchical_document, ServedRoot};
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct Running {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Running {
    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn stop(self) {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap();
    }
}

fn start(root: &ServedRoot) -> Running {
    let (stop, stopped) = oneshot::channel::<()>();
    let server = BridgeServer::new(root.path()).unwrap();
    let (addr, running) = server
        .bind(([127, 0, 0, 1], 0).into(), async {
            stopped.await.ok();
        })
        .unwrap();
    Running {
        addr,
        stop,
        handle: tokio::spawn(running),
    }
}

#[tokio::test]
async fn data_json_over_http_has_json_type_and_cors() {
    let root = ServedRoot::with_document(&hierarchical_document(1));
    let server = start(&root);

    let res = reqwest::get(server.url("/data.json")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["sections"]["1c1d1n"].is_object());

    server.stop().await;
}

#[tokio::test]
async fn missing_path_over_http_is_404() {
    let root = ServedRoot::with_document(&hierarchical_document(1));
    let server = start(&root);

    let res = reqwest::get(server.url("/nope.css")).await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.headers()["access-control-allow-headers"], "Content-Type");

    server.stop().await;
}

#[tokio::test]
async fn files_are_served_from_root_not_cwd() {
    let root = ServedRoot::empty().file("only-here.txt", "root file");
    let server = start(&root);

    let res = reqwest::get(server.url("/only-here.txt")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "root file");

    let res = reqwest::get(server.url("/Cargo.toml")).await.unwrap();
    assert_eq!(res.status(), 404);

    server.stop().await;
}
