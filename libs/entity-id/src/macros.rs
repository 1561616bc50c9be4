//! Macros for defining typed entity IDs.

/// Macro to define a typed entity ID for one kind of ledger entity.
///
/// This generates a newtype wrapper around [`EntityId`](crate::EntityId) with:
/// - A `KIND` constant naming the entity kind
/// - `parse()` going through an [`EntityIdCodec`](crate::EntityIdCodec)
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_entity_id!(AccountId, "account");
///
/// let account = AccountId::parse(&codec, Some("0.0.98"), &ParseOptions::default())?;
/// let parsed: AccountId = "0.0.98".parse()?;
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($name:ident, $kind:literal) => {
        #[doc = concat!("A typed entity ID for a ledger ", $kind, ".")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::EntityId);

        impl $name {
            /// The entity kind this ID refers to.
            pub const KIND: &'static str = $kind;

            /// Wraps an untyped entity ID.
            #[must_use]
            pub const fn from_entity_id(id: $crate::EntityId) -> Self {
                Self(id)
            }

            /// Returns the underlying entity ID.
            #[must_use]
            pub const fn entity_id(&self) -> $crate::EntityId {
                self.0
            }

            /// Creates an ID from trusted numeric parts.
            pub fn of(shard: u64, realm: u64, num: u64) -> Result<Self, $crate::EntityIdError> {
                $crate::EntityId::of(shard, realm, num).map(Self)
            }

            /// Parses a raw value through `codec`.
            pub fn parse(
                codec: &$crate::EntityIdCodec,
                raw: Option<&str>,
                options: &$crate::ParseOptions<'_>,
            ) -> Result<Self, $crate::EntityIdError> {
                codec.parse(raw, options).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::EntityIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$crate::EntityId>().map(Self)
            }
        }

        impl From<$crate::EntityId> for $name {
            fn from(id: $crate::EntityId) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $crate::EntityId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<$crate::EntityId> for $name {
            fn as_ref(&self) -> &$crate::EntityId {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$crate::EntityId as serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}
