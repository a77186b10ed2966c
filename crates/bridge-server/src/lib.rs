//! Uma + PS Bridge System preview server
//!
//! Serves the reference page's directory over plain HTTP for local preview.
//! Every response carries permissive CORS headers; `.js`, `.css` and `.json`
//! files are served with fixed content types.
//!
//! # Example
//!
//! ```rust,no_run
//! use bridge_server::{BridgeServer, ServerConfig};
//!
//! # async fn run() -> bridge_server::ServerResult<()> {
//! let config = ServerConfig::new().with_port(8004).with_root("site");
//! let server = BridgeServer::new(config.resolve_root()?)?;
//! let (addr, running) = server.bind(config.socket_addr(), async {
//!     tokio::signal::ctrl_c().await.ok();
//! })?;
//! println!("listening on {addr}");
//! running.await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod listing;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tracing::info;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use routes::{cors_headers, forced_content_type, routes};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static server bound to one served root
#[derive(Debug, Clone)]
pub struct BridgeServer {
    root: PathBuf,
}

impl BridgeServer {
    /// Serve `root`, which must be an existing directory
    ///
    /// # Errors
    /// Returns error if `root` is not a directory
    pub fn new(root: impl Into<PathBuf>) -> ServerResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ServerError::RootNotFound(root));
        }
        Ok(Self { root })
    }

    /// Served directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bind `addr` and return the bound address with the server future
    ///
    /// The future completes once `shutdown` resolves and in-flight requests
    /// have finished.
    ///
    /// # Errors
    /// Returns error if the address cannot be bound
    pub fn bind(
        &self,
        addr: SocketAddr,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> ServerResult<(SocketAddr, impl Future<Output = ()> + 'static)> {
        let (bound, running) = warp::serve(routes(self.root.clone()))
            .try_bind_with_graceful_shutdown(addr, shutdown)?;
        info!(addr = %bound, root = %self.root.display(), "server bound");
        Ok((bound, running))
    }
}
