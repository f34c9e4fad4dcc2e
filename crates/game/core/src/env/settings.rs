use crate::error::GenerationError;
use crate::state::{MarketId, SettingsSnapshot};

/// Builds the settings snapshot an expedition is generated against.
pub trait SettingsOracle: Send + Sync {
    /// Returns `existing` when given, otherwise a fresh snapshot of the
    /// current selection using the market `market_id`.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedReference` when a fresh snapshot is needed and the
    /// market does not exist.
    fn settings_snapshot(
        &self,
        existing: Option<&SettingsSnapshot>,
        market_id: &MarketId,
    ) -> Result<SettingsSnapshot, GenerationError>;
}
