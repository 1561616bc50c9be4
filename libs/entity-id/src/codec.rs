//! Entry point for turning raw request values into entity IDs.

use std::num::NonZeroUsize;

use tracing::{debug, info};

use crate::guard::{self, Rejection};
use crate::{
    parse, validate, ConfigError, EntityId, EntityIdCache, EntityIdConfig, EntityIdError,
    EvmAddressFlavor,
};

/// Options describing the call site of a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions<'a> {
    /// Name of the request parameter, used in error messages.
    pub parameter: Option<&'a str>,
    /// Whether an absent value yields [`EntityId::NULL`] instead of an error.
    pub nullable: bool,
    /// Which EVM address shapes are accepted.
    pub flavor: EvmAddressFlavor,
}

impl<'a> ParseOptions<'a> {
    /// Options for a named request parameter.
    #[must_use]
    pub fn for_parameter(name: &'a str) -> Self {
        Self {
            parameter: Some(name),
            ..Self::default()
        }
    }

    /// Allow absent values.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Accept the given EVM address flavor.
    #[must_use]
    pub fn with_flavor(mut self, flavor: EvmAddressFlavor) -> Self {
        self.flavor = flavor;
        self
    }
}

/// Parses entity IDs, memoizing successful results.
///
/// Each codec owns its cache, so independent instances never share state.
#[derive(Debug)]
pub struct EntityIdCodec {
    system_shard: u16,
    cache: Option<EntityIdCache>,
}

impl EntityIdCodec {
    /// Create a codec without a cache.
    pub fn new(system_shard: u16) -> Self {
        Self {
            system_shard,
            cache: None,
        }
    }

    /// Create a codec backed by `cache`.
    pub fn with_cache(system_shard: u16, cache: EntityIdCache) -> Self {
        Self {
            system_shard,
            cache: Some(cache),
        }
    }

    /// Create a codec from configuration. A zero cache size disables caching.
    pub fn from_config(config: &EntityIdConfig) -> Result<Self, ConfigError> {
        let system_shard = config.validate()?;
        let codec = match NonZeroUsize::new(config.cache_max_size) {
            Some(capacity) => {
                Self::with_cache(system_shard, EntityIdCache::new(capacity, config.cache_max_age()))
            }
            None => Self::new(system_shard),
        };

        info!(
            system_shard,
            cache_max_size = config.cache_max_size,
            cache_max_age_secs = config.cache_max_age_secs,
            "Entity ID codec configured"
        );
        Ok(codec)
    }

    /// Shard substituted when parsing the short `realm.num` form.
    pub fn system_shard(&self) -> u16 {
        self.system_shard
    }

    /// The result cache, if enabled.
    pub fn cache(&self) -> Option<&EntityIdCache> {
        self.cache.as_ref()
    }

    /// Parse a raw entity ID.
    ///
    /// Accepts `shard.realm.num`, `realm.num`, a packed entity ID, or an EVM
    /// address of the flavor in `options`. An absent value returns
    /// [`EntityId::NULL`] when `options.nullable` is set.
    pub fn parse(
        &self,
        raw: Option<&str>,
        options: &ParseOptions<'_>,
    ) -> Result<EntityId, EntityIdError> {
        match guard::check_null(raw, options.nullable, options.parameter)? {
            Some(raw) => self.parse_present(raw, options),
            None => Ok(EntityId::NULL),
        }
    }

    /// Parse an already numeric packed entity ID, signed or unsigned.
    ///
    /// The value takes the same path as its decimal string, so negative or
    /// oversized values fail like their textual forms would.
    pub fn parse_encoded<T>(
        &self,
        raw: Option<T>,
        options: &ParseOptions<'_>,
    ) -> Result<EntityId, EntityIdError>
    where
        T: Into<i128>,
    {
        match guard::check_null(raw, options.nullable, options.parameter)? {
            Some(encoded) => self.parse_present(&encoded.into().to_string(), options),
            None => Ok(EntityId::NULL),
        }
    }

    fn parse_present(
        &self,
        raw: &str,
        options: &ParseOptions<'_>,
    ) -> Result<EntityId, EntityIdError> {
        if let Some(id) = self.cache.as_ref().and_then(|c| c.get(raw, options.flavor)) {
            return Ok(id);
        }

        let id = decode(raw, options.flavor, self.system_shard).map_err(|rejection| {
            debug!(
                raw = %raw,
                parameter = options.parameter.unwrap_or_default(),
                flavor = %options.flavor,
                ?rejection,
                "Rejected entity ID"
            );
            rejection.into_error(raw, options.parameter)
        })?;

        if let Some(cache) = &self.cache {
            cache.insert(raw, options.flavor, id);
        }
        Ok(id)
    }
}

/// Classify, extract, and range-check a present raw value.
pub(crate) fn decode(
    raw: &str,
    flavor: EvmAddressFlavor,
    system_shard: u16,
) -> Result<EntityId, Rejection> {
    let parts = if validate::is_dotted_entity_id(raw) {
        parse::from_dotted(raw, system_shard)?
    } else if validate::is_encoded_entity_id(raw) {
        parse::from_encoded(raw)?
    } else if validate::is_valid_evm_address(raw, flavor) {
        parse::from_evm_address(raw)?
    } else {
        return Err(Rejection::Malformed);
    };

    let (shard, realm, num) = guard::check_range(parts)?;
    Ok(EntityId::from_parts(shard, realm, num))
}
