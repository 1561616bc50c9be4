//! The structured entity ID value.

use std::fmt;
use std::str::FromStr;

use crate::codec::{decode, ParseOptions};
use crate::guard;
use crate::{EntityIdError, EVM_ADDRESS_LEN, NUM_BITS, REALM_BITS};

/// Offset of the shard field in the packed layout.
const SHARD_OFFSET: u32 = NUM_BITS + REALM_BITS;

/// A ledger entity ID.
///
/// Either all three of shard, realm, and num are present, or none are (the
/// null ID returned for absent nullable input). Values are immutable; the
/// packed form is computed once at construction.
///
/// Ordering follows the packed integer, with the null ID first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    parts: Option<Parts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Parts {
    shard: u16,
    realm: u16,
    num: u32,
    encoded: i64,
}

impl EntityId {
    /// The null entity ID.
    pub const NULL: Self = Self { parts: None };

    /// Creates an entity ID from already range-checked fields.
    pub(crate) const fn from_parts(shard: u16, realm: u16, num: u32) -> Self {
        Self {
            parts: Some(Parts {
                shard,
                realm,
                num,
                encoded: encode(shard, realm, num),
            }),
        }
    }

    /// Creates an entity ID from trusted numeric parts.
    ///
    /// Bypasses parsing and caching entirely. Fields are still checked
    /// against their bit widths.
    pub fn of(shard: u64, realm: u64, num: u64) -> Result<Self, EntityIdError> {
        let (shard, realm, num) = guard::check_range(guard::RawParts { shard, realm, num })
            .map_err(|rejection| {
                rejection.into_error(&format!("{shard}.{realm}.{num}"), None)
            })?;
        Ok(Self::from_parts(shard, realm, num))
    }

    /// The shard, absent for the null ID.
    #[must_use]
    pub fn shard(&self) -> Option<u16> {
        self.parts.map(|p| p.shard)
    }

    /// The realm, absent for the null ID.
    #[must_use]
    pub fn realm(&self) -> Option<u16> {
        self.parts.map(|p| p.realm)
    }

    /// The num, absent for the null ID.
    #[must_use]
    pub fn num(&self) -> Option<u32> {
        self.parts.map(|p| p.num)
    }

    /// Returns true for the null ID.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns true for `0.0.0`.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        matches!(
            self.parts,
            Some(Parts {
                shard: 0,
                realm: 0,
                num: 0,
                ..
            })
        )
    }

    /// The packed `shard << 48 | realm << 32 | num` form.
    #[must_use]
    pub fn encoded_id(&self) -> Option<i64> {
        self.parts.map(|p| p.encoded)
    }

    /// The 20-byte EVM address: 4-byte shard, 8-byte realm, 8-byte num,
    /// all big-endian.
    #[must_use]
    pub fn evm_address_bytes(&self) -> Option<[u8; EVM_ADDRESS_LEN]> {
        self.parts.map(|p| {
            let mut bytes = [0u8; EVM_ADDRESS_LEN];
            bytes[..4].copy_from_slice(&u32::from(p.shard).to_be_bytes());
            bytes[4..12].copy_from_slice(&u64::from(p.realm).to_be_bytes());
            bytes[12..].copy_from_slice(&u64::from(p.num).to_be_bytes());
            bytes
        })
    }

    /// The EVM address as lowercase hex with a `0x` prefix.
    #[must_use]
    pub fn to_evm_address(&self) -> Option<String> {
        self.evm_address_bytes()
            .map(|bytes| format!("0x{}", hex::encode(bytes)))
    }

    /// The `shard.realm.num` string, absent for the null ID and for `0.0.0`.
    #[must_use]
    pub fn to_display_string(&self) -> Option<String> {
        if self.is_all_zero() {
            return None;
        }
        self.parts
            .map(|p| format!("{}.{}.{}", p.shard, p.realm, p.num))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NULL
    }
}

/// Packs the fields. Each field is at most its bit width, so the result
/// never touches the sign bit.
const fn encode(shard: u16, realm: u16, num: u32) -> i64 {
    ((shard as i64) << SHARD_OFFSET) | ((realm as i64) << NUM_BITS) | num as i64
}

/// Formats as `shard.realm.num`, including `0.0.0`. The null ID formats as
/// an empty string.
impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts {
            Some(p) => write!(f, "{}.{}.{}", p.shard, p.realm, p.num),
            None => Ok(()),
        }
    }
}

/// Parses with default options, no cache, and shard `0` for the short
/// `realm.num` form.
impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = ParseOptions::default();
        decode(s, options.flavor, 0).map_err(|rejection| rejection.into_error(s, None))
    }
}

impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.parts {
            Some(_) => serializer.collect_str(self),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

struct EntityIdVisitor;

impl<'de> serde::de::Visitor<'de> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an entity ID string, a packed entity ID, or null")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(EntityId::NULL)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(EntityId::NULL)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
