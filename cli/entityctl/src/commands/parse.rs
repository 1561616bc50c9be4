//! Parse command.

use anyhow::Result;
use clap::Args;
use mirror_entity_id::{EvmAddressFlavor, ParseOptions};
use tracing::debug;

use super::CommandContext;
use crate::output::{print_entity_ids, EntityIdView};

/// Parse entity IDs in any accepted form.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Entity IDs: shard.realm.num, realm.num, packed integer, or EVM address.
    ids: Vec<String>,

    /// EVM address shapes to accept (any, no-shard-realm, optional-shard-realm).
    #[arg(long, default_value_t = EvmAddressFlavor::Any)]
    flavor: EvmAddressFlavor,

    /// Parameter name to report in errors.
    #[arg(long)]
    parameter: Option<String>,

    /// Treat a missing ID as the null entity ID instead of an error.
    #[arg(long)]
    nullable: bool,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let options = ParseOptions {
            parameter: self.parameter.as_deref(),
            nullable: self.nullable,
            flavor: self.flavor,
        };

        let views = parse_all(ctx, &self.ids, &options)?;
        print_entity_ids(&views, ctx.format);
        Ok(())
    }
}

fn parse_all(
    ctx: &CommandContext,
    ids: &[String],
    options: &ParseOptions<'_>,
) -> Result<Vec<EntityIdView>> {
    if ids.is_empty() {
        let id = ctx.codec.parse(None, options)?;
        return Ok(vec![EntityIdView::new("", &id)]);
    }

    let mut views = Vec::with_capacity(ids.len());
    for raw in ids {
        let id = ctx.codec.parse(Some(raw), options)?;
        debug!(raw = %raw, id = %id, "Parsed entity ID");
        views.push(EntityIdView::new(raw.as_str(), &id));
    }
    Ok(views)
}
