use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertInfoError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown info type '{tag}', valid types: {}", .valid.join(", "))]
    UnknownInfoType { tag: String, valid: Vec<String> },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
    Usage,
}

impl CertInfoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } | Self::Output(_) => ErrorCategory::Io,
            Self::Parse { .. } => ErrorCategory::Parse,
            Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::InvalidConfigValue { .. } => ErrorCategory::Config,
            Self::UnknownInfoType { .. } => ErrorCategory::Usage,
        }
    }

    /// Process exit code; usage and config problems share clap's code 2.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Parse => 1,
            ErrorCategory::Config | ErrorCategory::Usage => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                format!("File not found: {}", path.display())
            }
            Self::Io { path, source }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                format!("Permission denied reading {}", path.display())
            }
            Self::ConfigRead { path, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                format!("Configuration file not found: {}", path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => {
                "The certificate archive is usually only readable by root, try running with sudo"
            }
            Self::Io { .. } => "Check that the certificate archive path is correct (see --config)",
            Self::ConfigRead { .. } => {
                "Check the file given with --config, or omit it to use the DSM defaults"
            }
            Self::Parse { .. } => "The certificate store file is corrupt or not in the expected format",
            Self::ConfigParse { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the [paths] section of the configuration file"
            }
            Self::UnknownInfoType { .. } => "Run with --help to list the available info types",
            Self::Output(_) => "Check that standard output is still open",
        }
    }
}

pub type Result<T> = std::result::Result<T, CertInfoError>;
