//! CLI commands.

mod contract;
mod of;
mod parse;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mirror_entity_id::{EntityIdCodec, EntityIdConfig};
use tracing::debug;

use crate::output::OutputFormat;

/// entityctl - Convert ledger entity IDs between representations.
#[derive(Debug, Parser)]
#[command(name = "entityctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Shard used for the short `realm.num` form.
    ///
    /// Overrides MIRROR_SHARD.
    #[arg(long, global = true)]
    shard: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse entity IDs and print every representation.
    Parse(parse::ParseCommand),

    /// Build an entity ID from shard, realm, and num.
    Of(of::OfCommand),

    /// Split contract ID filter values.
    Contract(contract::ContractCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        let mut config = EntityIdConfig::from_env().context("Failed to load configuration")?;
        if let Some(shard) = self.shard {
            config.system_shard = shard;
        }
        debug!(?config, "Loaded configuration");

        let codec = EntityIdCodec::from_config(&config).context("Invalid configuration")?;
        let ctx = CommandContext { codec, format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Of(cmd) => cmd.run(&ctx),
            Commands::Contract(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("entityctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub codec: EntityIdCodec,
    pub format: OutputFormat,
}
