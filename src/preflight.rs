//! Preflight checks - ensure the collaborating CLIs are available.

use anyhow::Result;

const REQUIRED_TOOLS: &[(&str, &str)] = &[
    ("az", "https://learn.microsoft.com/cli/azure/install-azure-cli"),
    (
        "azd",
        "https://learn.microsoft.com/azure/developer/azure-developer-cli/install-azd",
    ),
];

/// Verify `az` and `azd` are on PATH before the first prompt is shown.
pub fn check_tools() -> Result<()> {
    for (tool, install_url) in REQUIRED_TOOLS {
        if which::which(tool).is_err() {
            anyhow::bail!("'{tool}' was not found on PATH - install it from {install_url}");
        }
    }
    Ok(())
}
