//! Oracle access errors.

/// Errors that occur when a required oracle is missing from the [`super::Env`].
///
/// These are fatal: the generator cannot proceed without access to cards,
/// variants, treasures, settings or identifiers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("CardOracle not available")]
    CardsNotAvailable,

    #[error("VariantOracle not available")]
    VariantsNotAvailable,

    #[error("TreasureOracle not available")]
    TreasuresNotAvailable,

    #[error("SettingsOracle not available")]
    SettingsNotAvailable,

    #[error("IdGenerator not available")]
    IdsNotAvailable,
}
