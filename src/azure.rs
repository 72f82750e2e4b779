//! Azure metadata lookups through the `az` CLI.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::process::Command;

/// One SKU record from `az cognitiveservices account list-skus`.
#[derive(Debug, Clone, Deserialize)]
pub struct Sku {
    pub kind: String,
    pub name: String,
    pub tier: String,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Live metadata the wizard validates input against.
pub trait AzureMetadata {
    /// Valid region names, sorted.
    fn list_locations(&self) -> Result<Vec<String>>;

    /// SKUs for a Cognitive Services kind, optionally scoped to one region.
    fn list_skus(&self, kind: &str, region: Option<&str>) -> Result<Vec<Sku>>;

    /// Object id of the signed-in principal, if the CLI resolves one.
    fn signed_in_object_id(&self) -> Result<Option<String>>;
}

/// Production implementation shelling out to `az`.
pub struct AzCli;

impl AzCli {
    fn run(args: &[&str]) -> Result<String> {
        let output = Command::new("az")
            .args(args)
            .output()
            .with_context(|| format!("failed to run az {}", args.join(" ")))?;
        if !output.status.success() {
            anyhow::bail!(
                "az {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl AzureMetadata for AzCli {
    fn list_locations(&self) -> Result<Vec<String>> {
        let stdout = Self::run(&["account", "list-locations", "--query", "[].name", "-o", "json"])?;
        let mut locations: Vec<String> =
            serde_json::from_str(&stdout).context("unexpected az list-locations output")?;
        locations.sort();
        Ok(locations)
    }

    fn list_skus(&self, kind: &str, region: Option<&str>) -> Result<Vec<Sku>> {
        let mut args = vec!["cognitiveservices", "account", "list-skus", "--kind", kind];
        if let Some(region) = region {
            args.extend(["--location", region]);
        }
        args.extend(["-o", "json"]);
        let stdout = Self::run(&args)?;
        serde_json::from_str(&stdout).context("unexpected az list-skus output")
    }

    fn signed_in_object_id(&self) -> Result<Option<String>> {
        let stdout = Self::run(&["ad", "signed-in-user", "show", "--query", "id", "-o", "tsv"])?;
        let id = stdout.trim();
        Ok(if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        })
    }
}

/// Deployable alternatives for a kind: matching records on a paid tier,
/// ordered by their region lists.
pub fn alternatives(skus: &[Sku], kind: &str) -> Vec<Sku> {
    let mut matching: Vec<Sku> = skus
        .iter()
        .filter(|s| s.kind == kind && s.tier != "Free")
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.locations.cmp(&b.locations));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(kind: &str, name: &str, tier: &str, locations: &[&str]) -> Sku {
        Sku {
            kind: kind.to_string(),
            name: name.to_string(),
            tier: tier.to_string(),
            locations: locations.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn parses_az_list_skus_output() {
        let json = r#"[
            {"kind": "OpenAI", "name": "S0", "tier": "Standard", "locations": ["EASTUS"], "resourceType": "accounts"},
            {"kind": "ComputerVision", "name": "F0", "tier": "Free", "locations": ["WESTUS", "EASTUS"]}
        ]"#;
        let skus: Vec<Sku> = serde_json::from_str(json).unwrap();
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].kind, "OpenAI");
        assert_eq!(skus[1].locations, vec!["WESTUS", "EASTUS"]);
    }

    #[test]
    fn alternatives_keeps_only_paid_tiers_of_the_kind() {
        let skus = vec![
            sku("ComputerVision", "F0", "Free", &["eastus"]),
            sku("ComputerVision", "S1", "Standard", &["westus"]),
            sku("OpenAI", "S0", "Standard", &["eastus"]),
        ];
        let found = alternatives(&skus, "ComputerVision");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "S1");
    }

    #[test]
    fn alternatives_sorts_by_region_list() {
        let skus = vec![
            sku("OpenAI", "S0", "Standard", &["westus"]),
            sku("OpenAI", "S0", "Standard", &["eastus", "westus"]),
            sku("OpenAI", "S0", "Standard", &["eastus"]),
        ];
        let found = alternatives(&skus, "OpenAI");
        assert_eq!(found[0].locations, vec!["eastus"]);
        assert_eq!(found[1].locations, vec!["eastus", "westus"]);
        assert_eq!(found[2].locations, vec!["westus"]);
    }
}
