use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Interactive pre-provisioning setup for the Azure AI demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect and persist deployment settings (the azd preprovision hook)
    Run,

    /// Ask the provisioned chat deployment a question grounded in the search index
    Chat {
        /// Question to ask (a default is used when omitted)
        question: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // azd hooks invoke the bare binary, which runs the wizard.
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::setup::execute()?,
        Commands::Chat { question } => commands::chat::execute(question)?,
    }

    Ok(())
}
