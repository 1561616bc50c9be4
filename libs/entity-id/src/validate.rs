//! Format classification for raw entity ID strings.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parse;

/// Which EVM address shapes a call site accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvmAddressFlavor {
    /// Either the bare or the shard/realm qualified form.
    Any,
    /// Only the bare form, `0x` optional. Used for sender style fields.
    NoShardRealm,
    /// Only the qualified form, `[shard.][realm.]hex40`.
    #[default]
    OptionalShardRealm,
}

impl EvmAddressFlavor {
    /// The kebab-case name of this flavor.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EvmAddressFlavor::Any => "any",
            EvmAddressFlavor::NoShardRealm => "no-shard-realm",
            EvmAddressFlavor::OptionalShardRealm => "optional-shard-realm",
        }
    }
}

impl fmt::Display for EvmAddressFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvmAddressFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(EvmAddressFlavor::Any),
            "no-shard-realm" => Ok(EvmAddressFlavor::NoShardRealm),
            "optional-shard-realm" => Ok(EvmAddressFlavor::OptionalShardRealm),
            other => Err(format!(
                "unknown EVM address flavor '{other}', expected one of: any, no-shard-realm, optional-shard-realm"
            )),
        }
    }
}

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($re).expect(concat!("invalid pattern ", $re)))
        }
    };
}

pattern!(dotted_regex, r"^([0-9]{1,5}\.){1,2}[0-9]{1,10}$");
pattern!(encoded_regex, r"^[0-9]{1,19}$");
pattern!(evm_address_regex, r"^(0x)?[A-Fa-f0-9]{40}$");
pattern!(evm_address_shard_realm_regex, r"^([0-9]{1,10}\.){0,2}[A-Fa-f0-9]{40}$");

/// Matches `shard.realm.num` or `realm.num`.
pub(crate) fn is_dotted_entity_id(s: &str) -> bool {
    dotted_regex().is_match(s)
}

/// Matches a packed entity ID of up to 19 decimal digits.
pub(crate) fn is_encoded_entity_id(s: &str) -> bool {
    encoded_regex().is_match(s)
}

/// Returns true for `shard.realm.num`, `realm.num`, or a packed entity ID.
///
/// Only the shape is checked; field ranges are validated during parsing.
pub fn is_valid_entity_id(s: &str) -> bool {
    is_dotted_entity_id(s) || is_encoded_entity_id(s)
}

/// Returns true if `s` is an EVM address in a shape `flavor` accepts.
pub fn is_valid_evm_address(s: &str, flavor: EvmAddressFlavor) -> bool {
    match flavor {
        EvmAddressFlavor::Any => {
            evm_address_regex().is_match(s) || evm_address_shard_realm_regex().is_match(s)
        }
        EvmAddressFlavor::NoShardRealm => evm_address_regex().is_match(s),
        EvmAddressFlavor::OptionalShardRealm => evm_address_shard_realm_regex().is_match(s),
    }
}

/// Returns true if `s` is a valid EVM address whose embedded shard, realm,
/// or num is wider than an entity ID allows.
///
/// Such addresses were not derived from an entity ID and must be handled as
/// opaque bytes.
pub fn is_create2_address(s: &str) -> bool {
    if !is_valid_evm_address(s, EvmAddressFlavor::Any) {
        return false;
    }
    parse::from_evm_address(s)
        .map(|parts| parts.exceeds_range())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.0.1001", true)]
    #[case("0.1001", true)]
    #[case("99999.99999.9999999999", true)]
    #[case("4294968296", true)]
    #[case("9223372036854775807", true)]
    #[case("1001", true)]
    #[case("0.0.0.1", false)]
    #[case("123456.0.1", false)]
    #[case("0.0.12345678901", false)]
    #[case("12345678901234567890", false)]
    #[case("0.0.", false)]
    #[case(".0.1", false)]
    #[case("-1", false)]
    #[case("0.0.a", false)]
    #[case("", false)]
    fn test_is_valid_entity_id(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_entity_id(input), expected, "input: {input}");
    }

    const HEX40: &str = "00000000000000000000000000000000000003e9";

    #[rstest]
    #[case(EvmAddressFlavor::Any, "0x00000000000000000000000000000000000003e9", true)]
    #[case(EvmAddressFlavor::Any, HEX40, true)]
    #[case(EvmAddressFlavor::Any, "0.0.00000000000000000000000000000000000003e9", true)]
    #[case(EvmAddressFlavor::NoShardRealm, "0x00000000000000000000000000000000000003e9", true)]
    #[case(EvmAddressFlavor::NoShardRealm, HEX40, true)]
    #[case(EvmAddressFlavor::NoShardRealm, "0.0.00000000000000000000000000000000000003e9", false)]
    #[case(EvmAddressFlavor::OptionalShardRealm, "0x00000000000000000000000000000000000003e9", false)]
    #[case(EvmAddressFlavor::OptionalShardRealm, HEX40, true)]
    #[case(EvmAddressFlavor::OptionalShardRealm, "1.2.00000000000000000000000000000000000003e9", true)]
    #[case(EvmAddressFlavor::OptionalShardRealm, "1.2.3.00000000000000000000000000000000000003e9", false)]
    #[case(EvmAddressFlavor::Any, "0x00000000000000000000000000000000000003e", false)]
    #[case(EvmAddressFlavor::Any, "0x00000000000000000000000000000000000003e9a", false)]
    #[case(EvmAddressFlavor::Any, "0x0000000000000000000000000000000000000g00", false)]
    #[case(EvmAddressFlavor::Any, "0X00000000000000000000000000000000000003e9", false)]
    fn test_is_valid_evm_address(
        #[case] flavor: EvmAddressFlavor,
        #[case] input: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(
            is_valid_evm_address(input, flavor),
            expected,
            "flavor: {flavor}, input: {input}"
        );
    }

    #[rstest]
    #[case("0x00000000000000000000000000000000000003e9", false)]
    #[case("0x71eaa748d5252be68c1185588beca495459fdba4", true)]
    #[case("0.0.71eaa748d5252be68c1185588beca495459fdba4", true)]
    #[case("0x0000800000000000000000000000000000000001", true)]
    #[case("0x0000000000000000000100000000000000000001", true)]
    #[case("0x0000000000000000000000000000000100000000", true)]
    #[case("not an address", false)]
    fn test_is_create2_address(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_create2_address(input), expected, "input: {input}");
    }

    #[test]
    fn test_flavor_from_str() {
        for flavor in [
            EvmAddressFlavor::Any,
            EvmAddressFlavor::NoShardRealm,
            EvmAddressFlavor::OptionalShardRealm,
        ] {
            assert_eq!(flavor.as_str().parse::<EvmAddressFlavor>(), Ok(flavor));
        }
        assert!("bare".parse::<EvmAddressFlavor>().is_err());
    }

    #[test]
    fn test_flavor_json() {
        let json = serde_json::to_string(&EvmAddressFlavor::NoShardRealm).unwrap();
        assert_eq!(json, "\"no-shard-realm\"");
    }
}
