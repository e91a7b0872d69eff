//! Environment-driven configuration for the deployer.
//!
//! | variable                 | used by                                  |
//! |--------------------------|------------------------------------------|
//! | `NODE_URL`               | all commands (default `ws://127.0.0.1:9944`) |
//! | `SURI`                   | deploy, transfer-ownership               |
//! | `DEPLOYER_ADDRESS`       | deploy                                   |
//! | `INITIAL_OWNER`          | deploy of `token` (defaults to deployer) |
//! | `MULTISIG_OWNER_ADDRESS` | deploy of `bonus`, transfer-ownership    |
//! | `TOKEN_ADDRESS`          | transfer-ownership (defaults to record)  |
//! | `TOKEN42_ROOT`           | workspace root (default `.`)             |

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{DeployError, Result};

pub const DEFAULT_NODE_URL: &str = "ws://127.0.0.1:9944";
pub const RECORD_FILE: &str = ".deployment-info.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Fixed-supply `Token42`.
    Token,
    /// Mintable `Token42Bonus`.
    Bonus,
}

impl Variant {
    pub fn crate_name(self) -> &'static str {
        match self {
            Variant::Token => "token42",
            Variant::Bonus => "token42_bonus",
        }
    }

    pub fn manifest_path(self, root: &Path) -> PathBuf {
        root.join("contracts").join(self.crate_name()).join("Cargo.toml")
    }

    /// Metadata file written by `cargo contract build`.
    pub fn metadata_path(self, root: &Path) -> PathBuf {
        let name = self.crate_name();
        root.join("target").join("ink").join(name).join(format!("{name}.json"))
    }
}

#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub node_url: String,
    pub suri: Option<String>,
    pub deployer_address: Option<String>,
    pub initial_owner: Option<String>,
    pub multisig_owner: Option<String>,
    pub token_address: Option<String>,
    pub workspace_root: PathBuf,
}

impl DeployConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            node_url: get("NODE_URL").unwrap_or_else(|| DEFAULT_NODE_URL.to_string()),
            suri: get("SURI"),
            deployer_address: get("DEPLOYER_ADDRESS"),
            initial_owner: get("INITIAL_OWNER"),
            multisig_owner: get("MULTISIG_OWNER_ADDRESS"),
            token_address: get("TOKEN_ADDRESS"),
            workspace_root: get("TOKEN42_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn record_path(&self) -> PathBuf {
        self.workspace_root.join(RECORD_FILE)
    }

    pub fn suri(&self) -> Result<&str> {
        self.suri.as_deref().ok_or(DeployError::MissingVar("SURI"))
    }

    pub fn deployer_address(&self) -> Result<&str> {
        self.deployer_address
            .as_deref()
            .ok_or(DeployError::MissingVar("DEPLOYER_ADDRESS"))
    }

    pub fn multisig_owner(&self) -> Result<&str> {
        self.multisig_owner
            .as_deref()
            .ok_or(DeployError::MissingVar("MULTISIG_OWNER_ADDRESS"))
    }

    /// `initial_owner` constructor argument for a deployment of `variant`.
    ///
    /// The bonus token always starts under the multisig owner.
    pub fn owner_for(&self, variant: Variant) -> Result<String> {
        match variant {
            Variant::Token => match &self.initial_owner {
                Some(owner) => Ok(owner.clone()),
                None => self.deployer_address().map(str::to_string),
            },
            Variant::Bonus => self.multisig_owner().map(str::to_string),
        }
    }
}
