//! Extraction of shard, realm, and num from each accepted format.
//!
//! Parsers assume the input already passed the matching validator and do
//! not range-check; see [`crate::guard`].

use crate::guard::{RawParts, Rejection};
use crate::{MAX_ENCODED_ID, NUM_BITS, REALM_BITS};

const NUM_MASK: u64 = (1 << NUM_BITS) - 1;
const REALM_MASK: u64 = (1 << REALM_BITS) - 1;

/// Parses `shard.realm.num`, or `realm.num` with `system_shard` prepended.
pub(crate) fn from_dotted(s: &str, system_shard: u16) -> Result<RawParts, Rejection> {
    let fields = s
        .split('.')
        .map(|part| part.parse::<u64>().map_err(|_| Rejection::Malformed))
        .collect::<Result<Vec<_>, _>>()?;

    match fields.as_slice() {
        [realm, num] => Ok(RawParts {
            shard: u64::from(system_shard),
            realm: *realm,
            num: *num,
        }),
        [shard, realm, num] => Ok(RawParts {
            shard: *shard,
            realm: *realm,
            num: *num,
        }),
        _ => Err(Rejection::Malformed),
    }
}

/// Parses a packed entity ID.
pub(crate) fn from_encoded(s: &str) -> Result<RawParts, Rejection> {
    let encoded = s.parse::<u64>().map_err(|_| Rejection::Malformed)?;
    decode_packed(encoded)
}

/// Splits a packed value into its fields.
pub(crate) fn decode_packed(encoded: u64) -> Result<RawParts, Rejection> {
    if encoded > MAX_ENCODED_ID {
        return Err(Rejection::OutOfRange);
    }

    let num = encoded & NUM_MASK;
    let shard_realm = encoded >> NUM_BITS;
    let realm = shard_realm & REALM_MASK;
    let shard = shard_realm >> REALM_BITS;
    Ok(RawParts { shard, realm, num })
}

/// Parses the hex digits of an EVM address. Any `shard.realm.` qualifier is
/// ignored; the fields come from the 40 hex digits alone.
pub(crate) fn from_evm_address(s: &str) -> Result<RawParts, Rejection> {
    let last = s.rsplit('.').next().unwrap_or(s);
    let hex = last.strip_prefix("0x").unwrap_or(last);

    let field = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u64::from_str_radix(digits, 16).ok())
            .ok_or(Rejection::Malformed)
    };

    Ok(RawParts {
        shard: field(0..8)?,
        realm: field(8..24)?,
        num: field(24..40)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(shard: u64, realm: u64, num: u64) -> RawParts {
        RawParts { shard, realm, num }
    }

    #[test]
    fn test_from_dotted_full() {
        assert_eq!(from_dotted("1.2.3", 0), Ok(parts(1, 2, 3)));
        assert_eq!(
            from_dotted("99999.99999.9999999999", 0),
            Ok(parts(99999, 99999, 9999999999))
        );
    }

    #[test]
    fn test_from_dotted_short_uses_system_shard() {
        assert_eq!(from_dotted("2.3", 0), Ok(parts(0, 2, 3)));
        assert_eq!(from_dotted("2.3", 7), Ok(parts(7, 2, 3)));
    }

    #[test]
    fn test_from_dotted_rejects_garbage() {
        assert_eq!(from_dotted("1.x.3", 0), Err(Rejection::Malformed));
        assert_eq!(from_dotted("1", 0), Err(Rejection::Malformed));
    }

    #[test]
    fn test_from_encoded() {
        assert_eq!(from_encoded("1001"), Ok(parts(0, 0, 1001)));
        assert_eq!(from_encoded("4294968296"), Ok(parts(0, 1, 1000)));
        assert_eq!(
            from_encoded("9223372036854775807"),
            Ok(parts(32767, 65535, 4294967295))
        );
    }

    #[test]
    fn test_from_encoded_above_63_bits() {
        assert_eq!(
            from_encoded("9223372036854775808"),
            Err(Rejection::OutOfRange)
        );
        assert_eq!(
            from_encoded("9999999999999999999"),
            Err(Rejection::OutOfRange)
        );
    }

    #[test]
    fn test_from_evm_address() {
        assert_eq!(
            from_evm_address("0x0000000100000000000000020000000000000003"),
            Ok(parts(1, 2, 3))
        );
        assert_eq!(
            from_evm_address("0000000100000000000000020000000000000003"),
            Ok(parts(1, 2, 3))
        );
        assert_eq!(
            from_evm_address("5.6.0000000100000000000000020000000000000003"),
            Ok(parts(1, 2, 3))
        );
    }

    #[test]
    fn test_from_evm_address_wide_fields() {
        assert_eq!(
            from_evm_address("0xffffffffffffffffffffffffffffffffffffffff"),
            Ok(parts(u64::from(u32::MAX), u64::MAX, u64::MAX))
        );
    }

    #[test]
    fn test_from_evm_address_too_short() {
        assert_eq!(from_evm_address("0x1234"), Err(Rejection::Malformed));
    }
}
