//! Error display for the CLI.

use colored::Colorize;
use mirror_entity_id::{
    ConfigError, EntityIdError, CACHE_MAX_AGE_ENV, CACHE_MAX_SIZE_ENV, MAX_NUM, MAX_REALM, MAX_SHARD,
    SHARD_ENV,
};

const ACCEPTED_FORMS: &str =
    "Accepted forms: shard.realm.num, realm.num, packed integer, or a 40 hex digit EVM address.";

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(id_err) = err.downcast_ref::<EntityIdError>() {
        return Some(match id_err {
            EntityIdError::NullNotAllowed { .. } => {
                "Hint: Pass an entity ID, or use --nullable to accept none.".to_string()
            }
            EntityIdError::Malformed { .. } => format!(
                "Hint: {ACCEPTED_FORMS} Use --flavor to choose which EVM address shapes are accepted."
            ),
            EntityIdError::OutOfRange { .. } => format!(
                "Hint: shard must be at most {MAX_SHARD}, realm at most {MAX_REALM}, and num at most {MAX_NUM}."
            ),
        });
    }

    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
        .map(|_| format!("Hint: Check {SHARD_ENV}, {CACHE_MAX_SIZE_ENV}, and {CACHE_MAX_AGE_ENV}."))
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn test_hint_for_out_of_range() {
        let err = anyhow::Error::new(
            "0.0.4294967296"
                .parse::<mirror_entity_id::EntityId>()
                .unwrap_err(),
        );
        assert!(hint_for(&err).unwrap().contains("4294967295"));
    }

    #[test]
    fn test_hint_for_config_error() {
        let result: Result<(), ConfigError> = Err(ConfigError::ShardOutOfRange(40000));
        let err = result.context("Invalid configuration").unwrap_err();
        assert!(hint_for(&err).unwrap().contains("MIRROR_SHARD"));
    }

    #[test]
    fn test_no_hint_for_other_errors() {
        assert!(hint_for(&anyhow::anyhow!("boom")).is_none());
    }
}
