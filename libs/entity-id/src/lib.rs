//! # mirror-entity-id
//!
//! Entity ID parsing, validation, and encoding for the ledger mirror.
//!
//! Every ledger entity (account, contract, file, topic, token, schedule) is
//! addressed by a `shard.realm.num` triple. This crate converts between the
//! representations clients send and the structured [`EntityId`] value.
//!
//! ## Accepted Formats
//!
//! | Form                  | Example                                          |
//! |-----------------------|--------------------------------------------------|
//! | Dotted                | `0.0.1001`                                       |
//! | Dotted (short)        | `0.1001` (shard defaults to the system shard)    |
//! | Packed integer        | `4294968296`                                     |
//! | EVM address           | `0x00000000000000000000000000000000000003e9`     |
//! | EVM address (qualified) | `0.0.00000000000000000000000000000000000003e9` |
//!
//! ## Packed Layout
//!
//! ```text
//! | 0 | 15-bit shard | 16-bit realm | 32-bit num |
//! ```
//!
//! The top bit is always zero so the packed value fits a signed 64-bit
//! column.
//!
//! ## Usage
//!
//! ```
//! use mirror_entity_id::{EntityIdCodec, ParseOptions};
//!
//! let codec = EntityIdCodec::new(0);
//! let id = codec.parse(Some("0.0.1001"), &ParseOptions::default()).unwrap();
//! assert_eq!(id.encoded_id(), Some(1001));
//! assert_eq!(
//!     id.to_evm_address().as_deref(),
//!     Some("0x00000000000000000000000000000000000003e9")
//! );
//! ```

mod cache;
mod codec;
mod config;
mod contract;
mod entity;
mod error;
mod guard;
mod macros;
mod parse;
mod types;
mod validate;

pub use cache::{CacheStats, CacheStatsSnapshot, EntityIdCache};
pub use codec::{EntityIdCodec, ParseOptions};
pub use config::{EntityIdConfig, CACHE_MAX_AGE_ENV, CACHE_MAX_SIZE_ENV, SHARD_ENV};
pub use contract::{contract_id_parts, ContractIdParts, ContractTarget};
pub use entity::EntityId;
pub use error::{ConfigError, EntityIdError};
pub use types::*;
pub use validate::{
    is_create2_address, is_valid_entity_id, is_valid_evm_address, EvmAddressFlavor,
};

/// Bits used by the num field.
pub const NUM_BITS: u32 = 32;

/// Bits used by the realm field.
pub const REALM_BITS: u32 = 16;

/// Bits used by the shard field.
pub const SHARD_BITS: u32 = 15;

/// Largest num that can be packed.
pub const MAX_NUM: u64 = (1 << NUM_BITS) - 1;

/// Largest realm that can be packed.
pub const MAX_REALM: u64 = (1 << REALM_BITS) - 1;

/// Largest shard that can be packed.
pub const MAX_SHARD: u64 = (1 << SHARD_BITS) - 1;

/// Largest packed entity ID.
pub const MAX_ENCODED_ID: u64 = i64::MAX as u64;

/// Length of an EVM address in bytes.
pub const EVM_ADDRESS_LEN: usize = 20;
