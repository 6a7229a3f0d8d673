//! Client harness for the VaultAcc program.
//!
//! Loads a provider the way `anchor test` sets one up (environment first,
//! `Anchor.toml` second), resolves the program by workspace name and sends
//! `initialize`.

pub mod config;
pub mod error;
pub mod program;
pub mod provider;
pub mod workspace;

pub use config::ProviderConfig;
pub use error::{ClientError, Result};
pub use program::{initialize_instruction, VaultAcc};
pub use provider::Provider;
pub use workspace::Workspace;
