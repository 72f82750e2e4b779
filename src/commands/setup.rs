//! The azd preprovision hook: run the wizard against the real collaborators.

use anyhow::Result;

use aidemos_setup::azure::AzCli;
use aidemos_setup::config::SetupContext;
use aidemos_setup::preflight;
use aidemos_setup::prompt::Prompter;
use aidemos_setup::store::AzdEnv;
use aidemos_setup::wizard::SetupWizard;

pub fn execute() -> Result<()> {
    preflight::check_tools()?;

    let context = SetupContext::load()?;
    let mut store = AzdEnv::new();
    let mut prompter = Prompter::stdio();

    SetupWizard::new(&context, &mut store, &AzCli, &mut prompter).run()
}
