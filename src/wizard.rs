//! The interactive pre-provisioning flow.
//!
//! Every decision is persisted exactly once: keys that already hold a value
//! are never prompted for again, which makes re-running the hook a no-op
//! once an environment is fully configured.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::azure::{alternatives, AzureMetadata};
use crate::config::SetupContext;
use crate::features::{Demo, DEMOS};
use crate::prompt::Prompter;
use crate::store::{ensure, ConfigStore};

pub const OBJECT_ID_KEY: &str = "YOUR_OBJECT_ID";
pub const MULTI_RESOURCE_GROUP_KEY: &str = "MULTI_RESOURCE_GROUP";
pub const DEFAULT_LOCATION_KEY: &str = "DEFAULT_LOCATION";

/// Interactive setup: resolves the acting identity, resource-group names,
/// and validated regions for every selected demo.
pub struct SetupWizard<'a, S, C, R, W> {
    context: &'a SetupContext,
    store: &'a mut S,
    azure: &'a C,
    prompter: &'a mut Prompter<R, W>,
}

impl<'a, S, C, R, W> SetupWizard<'a, S, C, R, W>
where
    S: ConfigStore,
    C: AzureMetadata,
    R: BufRead,
    W: Write,
{
    pub fn new(
        context: &'a SetupContext,
        store: &'a mut S,
        azure: &'a C,
        prompter: &'a mut Prompter<R, W>,
    ) -> Self {
        Self {
            context,
            store,
            azure,
            prompter,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.prompter.say(&format!(
            "🔧 Collecting deployment settings for environment '{}'",
            self.context.env_name
        ))?;

        self.resolve_object_id()?;

        let multi_rg = format!("rg-multi-{}", self.context.env_name);
        ensure(self.store, MULTI_RESOURCE_GROUP_KEY, || Ok(multi_rg))?;

        let catalog = self.azure.list_locations()?;
        let default_location = self.resolve_default_location(&catalog)?;

        self.select_demos(&catalog, &default_location)?;

        self.prompter
            .say("\n✨ Setup complete - azd can now provision the selected demos.")?;
        Ok(())
    }

    /// Use an already-persisted object id, the signed-in principal, or a
    /// manual answer, in that order.
    fn resolve_object_id(&mut self) -> Result<()> {
        if self.store.get(OBJECT_ID_KEY).is_some() {
            return Ok(());
        }

        let object_id = match self.azure.signed_in_object_id()? {
            Some(id) => {
                self.prompter.say(&format!("Signed-in object id: {id}"))?;
                if self.prompter.confirm("Grant access to this object id")? {
                    id
                } else {
                    self.prompter.ask("Enter the object id to use")?
                }
            }
            None => self.prompter.ask("Enter the object id to use")?,
        };

        self.store.set(OBJECT_ID_KEY, &object_id)?;
        Ok(())
    }

    fn resolve_default_location(&mut self, catalog: &[String]) -> Result<String> {
        if let Some(existing) = self.store.get(DEFAULT_LOCATION_KEY) {
            return Ok(existing);
        }

        let mut candidate = match self.context.location_hint.clone() {
            Some(hint) => {
                if self
                    .prompter
                    .confirm(&format!("Use '{hint}' as the default location"))?
                {
                    hint
                } else {
                    self.prompter.ask("Enter the default location")?
                }
            }
            None => self.prompter.ask("Enter the default location")?,
        };

        while !catalog.contains(&candidate) {
            self.print_invalid_region(&candidate, catalog)?;
            candidate = self.prompter.ask("Enter the default location")?;
        }

        self.store.set(DEFAULT_LOCATION_KEY, &candidate)?;
        Ok(candidate)
    }

    /// One question for everything, or one per demo. Demos whose flag is
    /// already persisted keep their stored answer and are not asked again.
    fn select_demos(&mut self, catalog: &[String], default_location: &str) -> Result<()> {
        let all_answered = DEMOS
            .iter()
            .all(|demo| self.store.get(&demo.flag_key()).is_some());
        let provision_all = if all_answered {
            false
        } else {
            self.prompter.confirm("Do you want to provision all the demos")?
        };

        for demo in DEMOS {
            if provision_all {
                self.configure_demo(demo, catalog, default_location)?;
                continue;
            }
            match self.store.get(&demo.flag_key()) {
                Some(flag) => {
                    if flag == "true" {
                        self.configure_demo(demo, catalog, default_location)?;
                    }
                }
                None => {
                    if self.prompter.confirm(&format!("Add the {} demo", demo.display))? {
                        self.configure_demo(demo, catalog, default_location)?;
                    } else {
                        self.store.set(&demo.flag_key(), "false")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn configure_demo(
        &mut self,
        demo: &Demo,
        catalog: &[String],
        default_location: &str,
    ) -> Result<()> {
        let flag = ensure(self.store, &demo.flag_key(), || Ok("true".to_string()))?;
        if flag != "true" {
            // Declined in an earlier run; the stored answer stands.
            return Ok(());
        }

        let resource_group = demo.resource_group_name(&self.context.env_name);
        ensure(self.store, &demo.resource_group_key(), || Ok(resource_group))?;

        if let (Some(kind), Some(location_key)) = (demo.kind, demo.location_key) {
            self.select_location(location_key, demo.display, kind, catalog, Some(default_location))?;
        }
        Ok(())
    }

    /// Prompt for a region until one validates against the catalog and has
    /// capacity for the kind, then persist it under the given key.
    pub fn select_location(
        &mut self,
        key: &str,
        alias: &str,
        kind: &str,
        catalog: &[String],
        default: Option<&str>,
    ) -> Result<()> {
        if self.store.get(key).is_some() {
            return Ok(());
        }

        loop {
            let prompt = match default {
                Some(default) => format!("Location for {alias} [{default}]"),
                None => format!("Location for {alias}"),
            };
            let mut region = self.prompter.ask(&prompt)?;
            if region.is_empty() {
                if let Some(default) = default {
                    region = default.to_string();
                }
            }

            if !catalog.contains(&region) {
                self.print_invalid_region(&region, catalog)?;
                continue;
            }

            let available = self.azure.list_skus(kind, Some(region.as_str()))?;
            if available.is_empty() {
                self.prompter
                    .warn(&format!("{alias} is not available in '{region}'."))?;
                let all = self.azure.list_skus(kind, None)?;
                self.prompter
                    .say(&format!("Regions with {alias} capacity:"))?;
                for sku in alternatives(&all, kind) {
                    self.prompter.say(&format!(
                        "  {} {} - {}",
                        sku.name,
                        sku.tier,
                        sku.locations.join(", ")
                    ))?;
                }
                continue;
            }

            self.store.set(key, &region)?;
            return Ok(());
        }
    }

    fn print_invalid_region(&mut self, region: &str, catalog: &[String]) -> Result<()> {
        self.prompter
            .error(&format!("'{region}' is not a valid Azure location."))?;
        self.prompter.say("Valid locations:")?;
        self.prompter.say(&format!("  {}", catalog.join(", ")))?;
        Ok(())
    }
}
