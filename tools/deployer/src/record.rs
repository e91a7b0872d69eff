//! The `{contractAddress, deployerAddress}` file left behind by a deployment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract_address: String,
    pub deployer_address: String,
}

impl DeploymentRecord {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DeployError::RecordUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let record: Self = serde_json::from_str(&content).map_err(|e| DeployError::RecordInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if record.contract_address.is_empty() || record.deployer_address.is_empty() {
            return Err(DeployError::RecordInvalid {
                path: path.to_path_buf(),
                reason: "contractAddress and deployerAddress must be non-empty".to_string(),
            });
        }
        Ok(record)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| DeployError::RecordInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, json).map_err(|source| DeployError::RecordWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
