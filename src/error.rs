//! Failure taxonomy shared by every stage of card generation.

use std::io;
use std::path::PathBuf;

use qrcode::types::QrError;
use thiserror::Error;

/// Everything that can stop a card from being produced.
///
/// All variants are fatal: the run aborts at the first one and nothing is
/// retried. Messages leave the underlying cause to the `source()` chain.
#[derive(Debug, Error)]
pub enum CardError {
    /// Bad or missing combination of command-line arguments.
    #[error("{0}")]
    Usage(String),
    /// The payload does not fit in any QR version at the chosen level.
    #[error("failed to encode QR code")]
    Encoding(#[from] QrError),
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Failure while running the external CAD tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("'{program}' was not found; install OpenSCAD or pass --openscad <PATH>")]
    Missing { program: String },
    #[error("failed to launch '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program}' exited with {}", describe_code(*code))]
    Failed { program: String, code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl CardError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CardError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    ///
    /// A tool that exited with its own status passes that status through.
    pub fn exit_code(&self) -> u8 {
        match self {
            CardError::Usage(_) => 2,
            CardError::Encoding(_) | CardError::Io { .. } => 1,
            CardError::Tool(ToolError::Failed {
                code: Some(code), ..
            }) => (*code).clamp(1, 255) as u8,
            CardError::Tool(_) => 1,
        }
    }
}
