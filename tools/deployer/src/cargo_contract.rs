//! Thin wrapper over the `cargo contract` CLI.
//!
//! Every invocation asks for `--output-json`; the parsers below pick the one
//! field each step needs out of that output.

use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tracing::debug;

use crate::error::{DeployError, Result};

/// Executes one `cargo` invocation and hands back its stdout.
pub trait Runner {
    fn run(&self, step: &'static str, args: &[String]) -> Result<String>;
}

/// Spawns the real `cargo` binary.
pub struct SystemCargo;

impl Runner for SystemCargo {}

pub struct CargoContract<R = SystemCargo> {
    node_url: String,
    runner: R,
}

impl CargoContract {
    pub fn new(node_url: impl Into<String>) -> Self {
        Self::with_runner(node_url, SystemCargo)
    }
}

impl<R: Runner> CargoContract<R> {
    pub fn with_runner(node_url: impl Into<String>, runner: R) -> Self {
        Self {
            node_url: node_url.into(),
            runner,
        }
    }

    pub fn instantiate_args(&self, manifest: &Path, initial_owner: &str, suri: &str) -> Vec<String> {
        vec![
            "contract".into(),
            "instantiate".into(),
            "--manifest-path".into(),
            manifest.display().to_string(),
            "--constructor".into(),
            "new".into(),
            "--args".into(),
            initial_owner.into(),
            "--suri".into(),
            suri.into(),
            "--url".into(),
            self.node_url.clone(),
            "--execute".into(),
            "--skip-confirm".into(),
            "--output-json".into(),
        ]
    }

    pub fn call_args(
        &self,
        manifest: &Path,
        contract: &str,
        message: &str,
        args: &[&str],
        suri: &str,
    ) -> Vec<String> {
        let mut argv: Vec<String> = vec![
            "contract".into(),
            "call".into(),
            "--manifest-path".into(),
            manifest.display().to_string(),
            "--contract".into(),
            contract.into(),
            "--message".into(),
            message.into(),
        ];
        if !args.is_empty() {
            argv.push("--args".into());
            argv.extend(args.iter().map(|arg| arg.to_string()));
        }
        argv.extend(
            ["--suri", suri, "--url", self.node_url.as_str(), "--execute", "--skip-confirm", "--output-json"]
                .iter()
                .map(|arg| arg.to_string()),
        );
        argv
    }

    pub fn info_args(&self, contract: &str) -> Vec<String> {
        vec![
            "contract".into(),
            "info".into(),
            "--contract".into(),
            contract.into(),
            "--url".into(),
            self.node_url.clone(),
            "--output-json".into(),
        ]
    }

    /// Deploys the contract at `manifest` and returns its address.
    pub fn instantiate(&self, manifest: &Path, initial_owner: &str, suri: &str) -> Result<String> {
        let stdout = self.runner.run("instantiate", &self.instantiate_args(manifest, initial_owner, suri))?;
        parse_instantiated_address(&stdout)
    }

    pub fn call(
        &self,
        manifest: &Path,
        contract: &str,
        message: &str,
        args: &[&str],
        suri: &str,
    ) -> Result<()> {
        self.runner.run("call", &self.call_args(manifest, contract, message, args, suri))?;
        Ok(())
    }

    /// Code hash the chain has on record for `contract`.
    pub fn code_hash(&self, contract: &str) -> Result<String> {
        let stdout = self.runner.run("info", &self.info_args(contract))?;
        parse_code_hash(&stdout)
    }
}

/// First JSON object in `stdout`; cargo may print build chatter before it.
fn first_json(step: &'static str, stdout: &str) -> Result<Value> {
    let start = stdout.find('{').ok_or_else(|| DeployError::Output {
        step,
        reason: "no JSON object in output".to_string(),
    })?;
    serde_json::Deserializer::from_str(&stdout[start..])
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| DeployError::Output {
            step,
            reason: "empty JSON stream".to_string(),
        })?
        .map_err(|e| DeployError::Output {
            step,
            reason: e.to_string(),
        })
}

fn string_field(step: &'static str, value: &Value, pointer: &str) -> Result<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DeployError::Output {
            step,
            reason: format!("missing `{pointer}`"),
        })
}

pub fn parse_instantiated_address(stdout: &str) -> Result<String> {
    let value = first_json("instantiate", stdout)?;
    string_field("instantiate", &value, "/contract")
}

pub fn parse_code_hash(stdout: &str) -> Result<String> {
    let value = first_json("info", stdout)?;
    string_field("info", &value, "/code_hash")
}

/// `source.hash` from a contract metadata file.
pub fn local_code_hash(metadata: &str) -> Result<String> {
    let value = first_json("metadata", metadata)?;
    string_field("metadata", &value, "/source/hash")
}

/// Hashes compare case-insensitively, with or without a `0x` prefix.
pub fn same_code_hash(on_chain: &str, local: &str) -> bool {
    fn normalize(hash: &str) -> String {
        hash.trim().trim_start_matches("0x").to_ascii_lowercase()
    }
    normalize(on_chain) == normalize(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn instantiate_args_pass_owner_as_constructor_argument() {
        let cli = CargoContract::new("ws://node:9944");
        let argv = cli.instantiate_args(&PathBuf::from("contracts/token42/Cargo.toml"), "5Owner", "//Alice");
        let joined = argv.join(" ");
        assert!(joined.starts_with("contract instantiate --manifest-path contracts/token42/Cargo.toml"));
        assert!(joined.contains("--constructor new --args 5Owner"));
        assert!(joined.contains("--suri //Alice --url ws://node:9944"));
        assert!(joined.ends_with("--output-json"));
    }

    #[test]
    fn call_args_name_the_trait_message() {
        let cli = CargoContract::new("ws://node:9944");
        let argv = cli.call_args(
            &PathBuf::from("m/Cargo.toml"),
            "5Token",
            "Ownable::transfer_ownership",
            &["5Safe"],
            "//Alice",
        );
        let joined = argv.join(" ");
        assert!(joined.contains("--contract 5Token --message Ownable::transfer_ownership --args 5Safe"));
    }

    #[test]
    fn parses_address_after_build_chatter() {
        let stdout = "Compiling token42 v0.1.0\n{\n  \"result\": \"Success!\",\n  \"contract\": \"5Fabc\",\n  \"code_hash\": \"0x11\"\n}\n";
        assert_eq!(parse_instantiated_address(stdout).unwrap(), "5Fabc");
    }

    #[test]
    fn missing_fields_are_output_errors() {
        assert!(matches!(
            parse_instantiated_address("nothing here"),
            Err(DeployError::Output { step: "instantiate", .. })
        ));
        assert!(matches!(
            parse_code_hash(r#"{"trie_id": "0x00"}"#),
            Err(DeployError::Output { step: "info", .. })
        ));
    }

    #[test]
    fn reads_local_hash_from_metadata() {
        let metadata = r#"{"source": {"hash": "0xABCD", "language": "ink! 5.1.1"}, "spec": {}}"#;
        let local = local_code_hash(metadata).unwrap();
        assert!(same_code_hash("abcd", &local));
        assert!(!same_code_hash("0xabce", &local));
    }
}
