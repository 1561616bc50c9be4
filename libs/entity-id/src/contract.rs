//! Splitting contract ID filter values.
//!
//! A contract filter is `[shard.][realm.]target` where the target is either
//! a num or an EVM address. A long-zero address decodes to the num it
//! embeds. Create2 addresses cannot be mapped back to an entity ID, so they
//! are kept as raw bytes for comparison against stored addresses.

use serde::Serialize;

use crate::guard::{self, Rejection};
use crate::{is_valid_evm_address, parse, EntityIdError, EvmAddressFlavor, EVM_ADDRESS_LEN};

/// What a contract filter value points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractTarget {
    /// A contract num.
    Num(u64),
    /// An opaque create2 EVM address.
    Create2EvmAddress(
        #[serde(serialize_with = "hex_bytes::serialize")] [u8; EVM_ADDRESS_LEN],
    ),
}

/// The pieces of a contract filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractIdParts {
    pub shard: Option<u64>,
    pub realm: Option<u64>,
    pub target: ContractTarget,
}

/// Split a contract filter value into shard, realm, and target.
///
/// Shard and realm are absent when not given. Fields are not range-checked
/// here; callers compare them against stored columns.
pub fn contract_id_parts(value: &str) -> Result<ContractIdParts, EntityIdError> {
    let malformed = || EntityIdError::malformed(value, None);

    let mut pieces: Vec<&str> = value.split('.').collect();
    if pieces.len() > 3 {
        return Err(malformed());
    }
    let target = pieces.pop().ok_or_else(malformed)?;

    let number = |piece: &str| piece.parse::<u64>().map_err(|_| malformed());
    let (shard, realm) = match pieces.as_slice() {
        [] => (None, None),
        [realm] => (None, Some(number(*realm)?)),
        [shard, realm] => (Some(number(*shard)?), Some(number(*realm)?)),
        _ => return Err(malformed()),
    };

    let target = if is_valid_evm_address(target, EvmAddressFlavor::NoShardRealm) {
        evm_target(target).map_err(|rejection| rejection.into_error(value, None))?
    } else {
        ContractTarget::Num(number(target)?)
    };

    Ok(ContractIdParts {
        shard,
        realm,
        target,
    })
}

/// Decodes the 40 hex digits of an address target. The embedded shard and
/// realm are not compared against the filter's own qualifier.
fn evm_target(address: &str) -> Result<ContractTarget, Rejection> {
    let parts = parse::from_evm_address(address)?;
    if parts.exceeds_range() {
        let hex = address.strip_prefix("0x").unwrap_or(address);
        let mut bytes = [0u8; EVM_ADDRESS_LEN];
        hex::decode_to_slice(hex, &mut bytes).map_err(|_| Rejection::Malformed)?;
        return Ok(ContractTarget::Create2EvmAddress(bytes));
    }

    let (_, _, num) = guard::check_range(parts)?;
    Ok(ContractTarget::Num(u64::from(num)))
}

mod hex_bytes {
    use serde::Serializer;

    pub fn serialize<S>(
        bytes: &[u8; crate::EVM_ADDRESS_LEN],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }
}
