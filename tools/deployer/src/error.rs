use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("missing configuration: {0} must be set")]
    MissingVar(&'static str),

    #[error("could not read deployment info at {path}; run the deploy command first")]
    RecordUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deployment info in {path}: {reason}")]
    RecordInvalid { path: PathBuf, reason: String },

    #[error("failed to write deployment info to {path}")]
    RecordWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read contract metadata at {path}; build the contract first")]
    MetadataUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch cargo-contract: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("cargo-contract {step} failed: {stderr}")]
    CommandFailed { step: &'static str, stderr: String },

    #[error("unexpected cargo-contract output for {step}: {reason}")]
    Output { step: &'static str, reason: String },

    #[error("on-chain code hash {on_chain} does not match local build {local}")]
    CodeMismatch { on_chain: String, local: String },
}

pub type Result<T> = std::result::Result<T, DeployError>;
