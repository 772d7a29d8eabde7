//! Error types for the bells server.
//!
//! Playback errors never reach an HTTP caller; they are logged by the
//! background task that hit them. Startup errors abort the process.

use std::fmt;

/// Error codes identifying what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No audio output device could be opened.
    /// Trigger: headless host, device busy, or audio server not running.
    AudioDeviceUnavailable,

    /// The bells asset could not be opened.
    /// Trigger: file removed between the existence check and the open, or permissions.
    AssetLoadFailed,

    /// The bells asset could not be decoded.
    /// Trigger: corrupt file or unsupported format.
    DecodeFailed,

    /// The audio library refused to start playback.
    /// Trigger: output stream dropped or device disappeared.
    PlaybackFailed,

    /// The HTTP listener could not bind its address.
    /// Trigger: port already in use or insufficient privileges.
    BindFailed,

    /// The HTTP server stopped with an I/O error.
    ServerFailed,

    /// Writing an exported tone to disk failed.
    WavWriteFailed,

    /// Command-line configuration is inconsistent.
    InvalidConfig,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AudioDeviceUnavailable => "AUDIO_DEVICE_UNAVAILABLE",
            ErrorCode::AssetLoadFailed => "ASSET_LOAD_FAILED",
            ErrorCode::DecodeFailed => "DECODE_FAILED",
            ErrorCode::PlaybackFailed => "PLAYBACK_FAILED",
            ErrorCode::BindFailed => "BIND_FAILED",
            ErrorCode::ServerFailed => "SERVER_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::AudioDeviceUnavailable => "No audio output device is available",
            ErrorCode::AssetLoadFailed => "Failed to open the bells audio asset",
            ErrorCode::DecodeFailed => "Failed to decode the bells audio asset",
            ErrorCode::PlaybackFailed => "Failed to start audio playback",
            ErrorCode::BindFailed => "Failed to bind the HTTP listener",
            ErrorCode::ServerFailed => "HTTP server terminated unexpectedly",
            ErrorCode::WavWriteFailed => "Failed to write WAV file",
            ErrorCode::InvalidConfig => "Invalid configuration",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::AudioDeviceUnavailable => {
                "Check that speakers are connected and the audio server (PulseAudio, \
                 PipeWire, CoreAudio) is running, then restart the server"
            }
            ErrorCode::AssetLoadFailed => {
                "Check permissions on the bells file, or remove it to use the synthesized tone"
            }
            ErrorCode::DecodeFailed => {
                "Replace the bells file with a valid MP3/WAV/OGG, \
                 or export one with --write-tone"
            }
            ErrorCode::PlaybackFailed => "Restart the server to reopen the audio device",
            ErrorCode::BindFailed => {
                "Pick a free port with --port, or stop the process already listening"
            }
            ErrorCode::ServerFailed => "Restart the server",
            ErrorCode::WavWriteFailed => {
                "Check that the output directory exists and is writable"
            }
            ErrorCode::InvalidConfig => "Run with --help to see valid options",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for server operations.
#[derive(Debug)]
pub struct BellsError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BellsError {
    /// Creates a new BellsError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new BellsError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an AUDIO_DEVICE_UNAVAILABLE error.
    pub fn audio_device_unavailable(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::AudioDeviceUnavailable,
            format!("Audio output unavailable: {}", reason.into()),
        )
    }

    /// Creates an ASSET_LOAD_FAILED error.
    pub fn asset_load_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::AssetLoadFailed,
            format!("Failed to open {}: {}", path.display(), source),
            source,
        )
    }

    /// Creates a DECODE_FAILED error.
    pub fn decode_failed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DecodeFailed,
            format!("Failed to decode {}: {}", path.display(), reason.into()),
        )
    }

    /// Creates a PLAYBACK_FAILED error.
    pub fn playback_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::PlaybackFailed,
            format!("Playback failed: {}", reason.into()),
        )
    }

    /// Creates a BIND_FAILED error.
    pub fn bind_failed(addr: std::net::SocketAddr, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::BindFailed,
            format!("Failed to bind {}: {}", addr, source),
            source,
        )
    }

    /// Creates a SERVER_FAILED error.
    pub fn server_failed(source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::ServerFailed,
            format!("Server error: {}", source),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::WavWriteFailed,
            format!("Failed to write WAV: {}", source),
            source,
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfig, reason)
    }
}

impl fmt::Display for BellsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for BellsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using BellsError.
pub type Result<T> = std::result::Result<T, BellsError>;
