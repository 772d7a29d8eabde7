//! santa-bells: HTTP server that plays bells and gongs on this machine.
//!
//! This binary can run in two modes:
//! - Server mode (default): listen for `/bells` and `/gong` requests
//! - Export mode (`--write-tone`): write the synthesized bell to a WAV file

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};

use santa_bells::audio::{bell_tone, write_wav, AudioOutput, HostOutput, UnavailableOutput};
use santa_bells::cli::Cli;
use santa_bells::config::ServerConfig;
use santa_bells::error::{BellsError, Result};
use santa_bells::http::{run_server, AppState};
use santa_bells::logging;
use santa_bells::playback::Dispatcher;

fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.is_export_mode() {
        let path = cli
            .write_tone
            .as_deref()
            .ok_or_else(|| BellsError::invalid_config("--write-tone needs a path"))?;
        export_tone(path, cli.channels)
    } else {
        run_server_mode(cli.server_config())
    }
}

/// Writes the synthesized bell to `path`.
fn export_tone(path: &Path, channels: u16) -> Result<()> {
    let tone = bell_tone(channels);
    write_wav(&tone, path)?;
    info!(
        path = %path.display(),
        channels = tone.channels,
        sample_rate = tone.sample_rate,
        frames = tone.frames(),
        "Bell tone written"
    );
    Ok(())
}

/// Opens the audio device and serves HTTP until Ctrl-C.
fn run_server_mode(config: ServerConfig) -> Result<()> {
    if let Some(reason) = config.validate() {
        return Err(BellsError::invalid_config(reason));
    }

    // The guard owns the output stream and must outlive the server.
    let (_guard, output) = match HostOutput::open_default() {
        Ok((guard, output)) => {
            info!(
                device = output.device_name(),
                channels = output.channels(),
                "Audio output opened"
            );
            (Some(guard), Arc::new(output) as Arc<dyn AudioOutput>)
        }
        Err(e) => {
            warn!("{}; cues will be logged but not heard", e);
            (
                None,
                Arc::new(UnavailableOutput::new(e.message)) as Arc<dyn AudioOutput>,
            )
        }
    };

    let bells_file = config.effective_bells_file();
    if bells_file.exists() {
        info!(path = %bells_file.display(), "Using recorded bells");
    } else {
        info!(path = %bells_file.display(), "Bells file not found, /bells will use the synthesized tone");
    }

    let state = AppState::new(Dispatcher::new(output, bells_file));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(BellsError::server_failed)?;

    runtime.block_on(run_server(&config, state))
}
