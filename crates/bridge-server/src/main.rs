use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use bridge_server::{BridgeServer, ServerConfig};
use clap::{value_parser, Arg, Command};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("bridge-serve")
        .version(bridge_server::VERSION)
        .about("Start Uma + PS Bridge System server")
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .default_value("9999")
                .value_parser(value_parser!(u16))
                .help("Port to run the server on"),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .default_value("0.0.0.0")
                .value_parser(value_parser!(IpAddr))
                .help("Address to listen on"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to serve (default: the directory holding this executable)"),
        )
        .get_matches();

    let mut config = ServerConfig::new();
    if let Some(port) = matches.get_one::<u16>("port") {
        config = config.with_port(*port);
    }
    if let Some(bind) = matches.get_one::<IpAddr>("bind") {
        config = config.with_bind(*bind);
    }
    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config = config.with_root(root);
    }

    let root = config.resolve_root().context("failed to resolve serving root")?;
    let server = BridgeServer::new(root)?;

    let (_, running) = server
        .bind(config.socket_addr(), async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl+C");
            }
        })
        .with_context(|| format!("failed to bind port {}", config.port))?;

    println!("Starting Uma + PS Bridge System server...");
    println!("Server running at: http://localhost:{}", config.port);
    println!("Serving from: {}", server.root().display());
    println!("\nOpen your browser and navigate to:");
    println!("  http://localhost:{}", config.port);
    println!("\nPress Ctrl+C to stop the server");

    running.await;
    println!("\n\nServer stopped.");
    Ok(())
}
