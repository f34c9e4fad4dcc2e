//! Identifier newtypes for content and generated records.
//!
//! Every identifier is an opaque string. Wrapping them keeps a mage id from
//! ever being passed where a card id is expected, which matters because all
//! pools are plain ordered lists of identifiers.

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

string_id!(
    /// Identifier of a playable mage.
    MageId
);
string_id!(
    /// Identifier of a supply card (gem, relic or spell).
    CardId
);
string_id!(
    /// Identifier of a treasure card.
    TreasureId
);
string_id!(
    /// Identifier of an expedition variant (battle layout).
    VariantId
);
string_id!(
    /// Identifier of a market setup.
    MarketId
);
string_id!(
    /// Identifier of a generated expedition.
    ExpeditionId
);
string_id!(
    /// Identifier of a generated battle.
    BattleId
);
