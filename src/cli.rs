//! Command-line interface.
//!
//! Runs the HTTP server by default; `--write-tone` exports the synthesized
//! bell instead.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// santa-bells: ring bells on this machine over HTTP
#[derive(Parser, Debug)]
#[command(name = "santa-bells")]
#[command(about = "HTTP server that plays bells and gongs on the host speakers")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Recorded bells file (default: christmas-bells-05.mp3 next to the executable)
    #[arg(short, long)]
    pub bells_file: Option<PathBuf>,

    /// Write the synthesized bell tone to this WAV file and exit
    #[arg(long, value_name = "PATH")]
    pub write_tone: Option<PathBuf>,

    /// Channel count of the exported tone
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=8))]
    pub channels: u16,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns true if the tone should be exported instead of serving.
    pub fn is_export_mode(&self) -> bool {
        self.write_tone.is_some()
    }

    /// Builds the server configuration from the parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            bells_file: self.bells_file.clone(),
        }
    }
}
