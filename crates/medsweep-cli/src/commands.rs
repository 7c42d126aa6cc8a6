use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "medsweep")]
#[command(about = "Catalog a media library, enrich it with TMDb metadata, and sweep reviewed files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the configured libraries and write the master ledger
    Scan,
    /// Delete the files marked DELETE in the reviewed master ledger
    Delete {
        /// Skip the interactive confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print configuration values
    PrintConfig,
}
