//! Of command.

use anyhow::Result;
use clap::Args;
use mirror_entity_id::EntityId;

use super::CommandContext;
use crate::output::{print_entity_ids, EntityIdView};

/// Build an entity ID from its parts.
#[derive(Debug, Args)]
pub struct OfCommand {
    /// Shard (at most 32767).
    shard: u64,

    /// Realm (at most 65535).
    realm: u64,

    /// Num (at most 4294967295).
    num: u64,
}

impl OfCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = EntityId::of(self.shard, self.realm, self.num)?;
        let input = format!("{}.{}.{}", self.shard, self.realm, self.num);
        print_entity_ids(&[EntityIdView::new(input, &id)], ctx.format);
        Ok(())
    }
}
