//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{ServerError, ServerResult};

/// Default listening port
pub const DEFAULT_PORT: u16 = 9999;

/// Where to listen and what to serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// Listening address
    pub bind: IpAddr,
    /// Served directory; `None` means the directory holding the executable
    pub root: Option<PathBuf>,
}

impl ServerConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With port
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// With listening address
    #[inline]
    #[must_use]
    pub fn with_bind(mut self, bind: IpAddr) -> Self {
        self.bind = bind;
        self
    }

    /// With explicit served root
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Socket address to listen on
    #[inline]
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Resolve the served root to an absolute, canonical directory
    ///
    /// # Errors
    /// Returns error if the executable path cannot be found or the root is
    /// not an existing directory
    pub fn resolve_root(&self) -> ServerResult<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => {
                let exe = std::env::current_exe()
                    .map_err(|e| ServerError::io_error("current executable", e))?;
                exe.parent()
                    .map(PathBuf::from)
                    .ok_or_else(|| ServerError::RootNotFound(exe.clone()))?
            }
        };

        let root = root
            .canonicalize()
            .map_err(|e| ServerError::io_error(&root, e))?;
        if !root.is_dir() {
            return Err(ServerError::RootNotFound(root));
        }
        Ok(root)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            root: None,
        }
    }
}
