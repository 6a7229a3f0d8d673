//! Error types for the VaultAcc client.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0} is not set")]
    MissingSetting(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("no Anchor.toml found in {0} or any parent directory")]
    WorkspaceNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed Anchor.toml: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("program {name} is not registered for cluster {cluster}")]
    ProgramNotFound { name: String, cluster: String },

    #[error("invalid program id for {name}: {value}")]
    InvalidProgramId { name: String, value: String },

    #[error("failed to load wallet {path}: {reason}")]
    Wallet { path: PathBuf, reason: String },

    #[error(transparent)]
    Rpc(#[from] anchor_client::ClientError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
