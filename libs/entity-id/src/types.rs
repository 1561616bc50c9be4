//! Typed entity IDs for each kind of ledger entity.
//!
//! All kinds share the same `shard.realm.num` space; the wrappers only keep
//! an account ID from being passed where a token ID is expected.

use crate::define_entity_id;

define_entity_id!(AccountId, "account");
define_entity_id!(ContractId, "contract");
define_entity_id!(FileId, "file");
define_entity_id!(ScheduleId, "schedule");
define_entity_id!(TokenId, "token");
define_entity_id!(TopicId, "topic");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityId, EntityIdCodec, EntityIdError, EvmAddressFlavor, ParseOptions};

    #[test]
    fn test_account_id_roundtrip() {
        let id = AccountId::of(0, 0, 98).unwrap();
        let s = id.to_string();
        assert_eq!(s, "0.0.98");
        let parsed: AccountId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_contract_id_parse_through_codec() {
        let codec = EntityIdCodec::new(0);
        let options = ParseOptions::for_parameter("contract.id").with_flavor(EvmAddressFlavor::Any);
        let id = ContractId::parse(
            &codec,
            Some("0x00000000000000000000000000000000000003e9"),
            &options,
        )
        .unwrap();
        assert_eq!(id.entity_id(), EntityId::of(0, 0, 1001).unwrap());
    }

    #[test]
    fn test_typed_id_invalid() {
        let result: Result<TokenId, _> = "0.0.4294967296".parse();
        assert!(matches!(result, Err(EntityIdError::OutOfRange { .. })));
    }

    #[test]
    fn test_typed_id_json_roundtrip() {
        let id = TopicId::of(0, 0, 1234).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0.0.1234\"");
        let parsed: TopicId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_id_conversions() {
        let entity = EntityId::of(1, 2, 3).unwrap();
        let file = FileId::from(entity);
        assert_eq!(EntityId::from(file), entity);
        assert_eq!(file.as_ref(), &entity);
        assert!(ScheduleId::default().entity_id().is_null());
    }

    #[test]
    fn test_all_kinds_unique() {
        let kinds = [
            AccountId::KIND,
            ContractId::KIND,
            FileId::KIND,
            ScheduleId::KIND,
            TokenId::KIND,
            TopicId::KIND,
        ];

        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(kinds.len(), unique.len(), "Duplicate entity kinds found!");
    }
}
