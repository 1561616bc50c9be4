//! Codec configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, MAX_SHARD};

/// Environment variable holding the system shard.
pub const SHARD_ENV: &str = "MIRROR_SHARD";

/// Environment variable holding the cache entry limit.
pub const CACHE_MAX_SIZE_ENV: &str = "MIRROR_CACHE_ENTITY_ID_MAX_SIZE";

/// Environment variable holding the cache entry time to live, in seconds.
pub const CACHE_MAX_AGE_ENV: &str = "MIRROR_CACHE_ENTITY_ID_MAX_AGE";

const DEFAULT_CACHE_MAX_SIZE: usize = 100_000;
const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 1800;

/// Settings supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityIdConfig {
    /// Shard used for the short `realm.num` form.
    pub system_shard: u64,
    /// Maximum cached entries. Zero disables the cache.
    pub cache_max_size: usize,
    /// Seconds a cached entry stays valid after insertion.
    pub cache_max_age_secs: u64,
}

impl Default for EntityIdConfig {
    fn default() -> Self {
        Self {
            system_shard: 0,
            cache_max_size: DEFAULT_CACHE_MAX_SIZE,
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
        }
    }
}

impl EntityIdConfig {
    /// Load from the environment, using defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let system_shard = env_or(&lookup, SHARD_ENV, defaults.system_shard)?;
        let cache_max_size = env_or(&lookup, CACHE_MAX_SIZE_ENV, defaults.cache_max_size)?;
        let cache_max_age_secs = env_or(&lookup, CACHE_MAX_AGE_ENV, defaults.cache_max_age_secs)?;

        let config = Self {
            system_shard,
            cache_max_size,
            cache_max_age_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the system shard fits the shard bit width and returns it.
    pub fn validate(&self) -> Result<u16, ConfigError> {
        if self.system_shard > MAX_SHARD {
            return Err(ConfigError::ShardOutOfRange(self.system_shard));
        }
        u16::try_from(self.system_shard).map_err(|_| ConfigError::ShardOutOfRange(self.system_shard))
    }

    /// Cache entry time to live.
    pub fn cache_max_age(&self) -> Duration {
        Duration::from_secs(self.cache_max_age_secs)
    }
}

fn env_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&'static str, &str)]) -> Result<EntityIdConfig, ConfigError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        EntityIdConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), EntityIdConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            (SHARD_ENV, "2"),
            (CACHE_MAX_SIZE_ENV, "500"),
            (CACHE_MAX_AGE_ENV, " 60 "),
        ])
        .unwrap();
        assert_eq!(config.system_shard, 2);
        assert_eq!(config.cache_max_size, 500);
        assert_eq!(config.cache_max_age(), Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_value() {
        let err = load(&[(CACHE_MAX_SIZE_ENV, "lots")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: CACHE_MAX_SIZE_ENV,
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_shard_out_of_range() {
        let err = load(&[(SHARD_ENV, "32768")]).unwrap_err();
        assert_eq!(err, ConfigError::ShardOutOfRange(32768));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EntityIdConfig = serde_json::from_str(r#"{"system_shard": 1}"#).unwrap();
        assert_eq!(config.system_shard, 1);
        assert_eq!(config.cache_max_size, DEFAULT_CACHE_MAX_SIZE);
        assert_eq!(config.cache_max_age_secs, DEFAULT_CACHE_MAX_AGE_SECS);
    }
}
