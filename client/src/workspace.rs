//! Program resolution through `Anchor.toml`.
//!
//! A workspace maps program names to addresses per cluster, e.g.
//!
//! ```toml
//! [programs.localnet]
//! vault_acc = "9pU1ESxdgeWPKjQwg6R7vuVom8rno7L8CNb76EUh6vVN"
//! ```
//!
//! Names are matched loosely so `VaultAcc`, `vault_acc` and `vault-acc` all
//! refer to the same entry.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::error::{ClientError, Result};

pub const MANIFEST: &str = "Anchor.toml";

/// The `[provider]` section of `Anchor.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProviderSection {
    pub cluster: Option<String>,
    pub wallet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    provider: Option<ProviderSection>,
    #[serde(default)]
    programs: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub provider: Option<ProviderSection>,
    programs: BTreeMap<String, BTreeMap<String, String>>,
}

impl Workspace {
    /// Walk from `start` towards the filesystem root and load the first
    /// `Anchor.toml` found.
    pub fn discover(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            let path = dir.join(MANIFEST);
            if path.is_file() {
                debug!(path = %path.display(), "found workspace manifest");
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| ClientError::Io { path: path.clone(), source })?;
                return Self::from_toml(dir, &text);
            }
        }
        Err(ClientError::WorkspaceNotFound(start.to_path_buf()))
    }

    pub fn from_toml(root: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(text)?;
        // Cluster sections are keyed case-insensitively.
        let programs = manifest
            .programs
            .into_iter()
            .map(|(cluster, entries)| (cluster.to_lowercase(), entries))
            .collect();

        Ok(Self {
            root: root.into(),
            provider: manifest.provider,
            programs,
        })
    }

    /// Resolve `name` in the `[programs.<cluster>]` section.
    pub fn program_id(&self, name: &str, cluster: &str) -> Result<Pubkey> {
        let cluster = cluster.to_lowercase();
        let wanted = normalize(name);

        let (_, address) = self
            .programs
            .get(&cluster)
            .and_then(|entries| entries.iter().find(|(key, _)| normalize(key) == wanted))
            .ok_or_else(|| ClientError::ProgramNotFound {
                name: name.to_string(),
                cluster: cluster.clone(),
            })?;

        address.parse().map_err(|_| ClientError::InvalidProgramId {
            name: name.to_string(),
            value: address.clone(),
        })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
