use anyhow::{Context, Result};

/// Ambient values azd provides to hook processes. Resolved once at startup,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct SetupContext {
    /// Name of the azd environment being provisioned.
    pub env_name: String,
    /// Region hint azd may already carry.
    pub location_hint: Option<String>,
}

impl SetupContext {
    /// Load the context from the process environment.
    pub fn load() -> Result<Self> {
        let env_name = std::env::var("AZURE_ENV_NAME")
            .context("AZURE_ENV_NAME is not set - run this through 'azd provision'")?;
        let location_hint = std::env::var("AZURE_LOCATION")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            env_name,
            location_hint,
        })
    }
}
