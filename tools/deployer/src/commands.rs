use std::fs;

use tracing::info;

use crate::cargo_contract::{local_code_hash, same_code_hash, CargoContract, Runner};
use crate::config::{DeployConfig, Variant};
use crate::error::{DeployError, Result};
use crate::record::DeploymentRecord;

/// Instantiates `variant` and records where it landed.
pub fn deploy<R: Runner>(cfg: &DeployConfig, cli: &CargoContract<R>, variant: Variant) -> Result<DeploymentRecord> {
    let suri = cfg.suri()?;
    let deployer_address = cfg.deployer_address()?.to_string();
    let initial_owner = cfg.owner_for(variant)?;

    info!(?variant, deployer = %deployer_address, owner = %initial_owner, "deploying contract");
    let contract_address = cli.instantiate(
        &variant.manifest_path(&cfg.workspace_root),
        &initial_owner,
        suri,
    )?;
    info!(contract = %contract_address, "contract deployed");

    let record = DeploymentRecord {
        contract_address,
        deployer_address,
    };
    let record_path = cfg.record_path();
    record.save(&record_path)?;
    info!(path = %record_path.display(), "deployment info saved");
    Ok(record)
}

/// Hands ownership of the token to the configured multisig owner.
///
/// The token address comes from `TOKEN_ADDRESS`, else from the deployment record.
pub fn transfer_ownership<R: Runner>(cfg: &DeployConfig, cli: &CargoContract<R>, variant: Variant) -> Result<()> {
    let suri = cfg.suri()?;
    let new_owner = cfg.multisig_owner()?;
    let token_address = match &cfg.token_address {
        Some(address) => address.clone(),
        None => DeploymentRecord::load(&cfg.record_path())?.contract_address,
    };

    info!(token = %token_address, new_owner, "transferring ownership");
    cli.call(
        &variant.manifest_path(&cfg.workspace_root),
        &token_address,
        "Ownable::transfer_ownership",
        &[new_owner],
        suri,
    )?;
    info!("ownership transferred");
    Ok(())
}

/// Checks that the code deployed at the recorded address is the local build.
///
/// Running it again on an already verified contract succeeds the same way.
pub fn verify<R: Runner>(cfg: &DeployConfig, cli: &CargoContract<R>, variant: Variant) -> Result<()> {
    let record = DeploymentRecord::load(&cfg.record_path())?;
    info!(
        contract = %record.contract_address,
        deployer = %record.deployer_address,
        "verifying contract"
    );

    let metadata_path = variant.metadata_path(&cfg.workspace_root);
    let metadata = fs::read_to_string(&metadata_path).map_err(|source| DeployError::MetadataUnreadable {
        path: metadata_path.clone(),
        source,
    })?;
    let local = local_code_hash(&metadata)?;
    let on_chain = cli.code_hash(&record.contract_address)?;

    if !same_code_hash(&on_chain, &local) {
        return Err(DeployError::CodeMismatch { on_chain, local });
    }
    info!(code_hash = %local, "contract verified");
    Ok(())
}
