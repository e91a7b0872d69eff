//! Deployment harness for the Token42 contracts.
//!
//! Drives `cargo contract` against a node: instantiate either token variant,
//! hand the bonus token to its multisig owner, and check deployed code
//! against the local build.

pub mod cargo_contract;
pub mod commands;
pub mod config;
pub mod error;
pub mod record;

pub use cargo_contract::{CargoContract, Runner, SystemCargo};
pub use config::{DeployConfig, Variant};
pub use error::{DeployError, Result};
pub use record::DeploymentRecord;
