//! Server configuration module.
//!
//! Contains the runtime configuration for the bells server: listen address
//! and the location of the recorded bells file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// File name of the recorded bells, looked up next to the executable.
pub const BELLS_FILE_NAME: &str = "christmas-bells-05.mp3";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 9000;

/// Default listen address (all interfaces).
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Runtime configuration for the server.
///
/// Built from command-line arguments at startup; nothing is read from the
/// environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub host: IpAddr,

    /// Port to listen on. 0 picks an ephemeral port.
    pub port: u16,

    /// Path to the recorded bells. If None, uses [`default_bells_file`].
    pub bells_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Creates a ServerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the effective bells path, using the default if not specified.
    pub fn effective_bells_file(&self) -> PathBuf {
        if let Some(ref path) = self.bells_file {
            path.clone()
        } else {
            default_bells_file()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        let bells_file = self.effective_bells_file();

        if bells_file.as_os_str().is_empty() {
            return Some("bells file path must not be empty".to_string());
        }
        if bells_file.is_dir() {
            return Some(format!(
                "bells file is a directory: {}",
                bells_file.display()
            ));
        }

        None
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            bells_file: None,
        }
    }
}

/// Returns the default bells path: [`BELLS_FILE_NAME`] in the directory
/// holding the running executable.
///
/// Falls back to the current directory if the executable path is unknown.
pub fn default_bells_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(BELLS_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(BELLS_FILE_NAME))
}
