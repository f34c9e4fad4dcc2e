use crate::error::GenerationError;
use crate::sample::SlotCount;

/// Generation constants and tunable parameters.
///
/// Slot counts are stored signed because they arrive from data files; they
/// are validated through [`SlotCount`] when a generation step reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationConfig {
    /// Mages rolled into the barracks.
    pub mage_slots: i64,
    /// Treasures rolled when the first battle starts with a treasure.
    pub treasure_slots: i64,
    /// Level of the treasures eligible for the opening roll.
    pub treasure_level: u8,
}

impl GenerationConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAGE_SLOTS: i64 = 4;
    pub const DEFAULT_TREASURE_SLOTS: i64 = 5;
    pub const DEFAULT_TREASURE_LEVEL: u8 = 1;

    pub fn new() -> Self {
        Self {
            mage_slots: Self::DEFAULT_MAGE_SLOTS,
            treasure_slots: Self::DEFAULT_TREASURE_SLOTS,
            treasure_level: Self::DEFAULT_TREASURE_LEVEL,
        }
    }

    pub fn with_mage_slots(mut self, mage_slots: i64) -> Self {
        self.mage_slots = mage_slots;
        self
    }

    pub fn with_treasure_slots(mut self, treasure_slots: i64) -> Self {
        self.treasure_slots = treasure_slots;
        self
    }

    pub fn mage_slot_count(&self) -> Result<SlotCount, GenerationError> {
        SlotCount::try_from(self.mage_slots)
    }

    pub fn treasure_slot_count(&self) -> Result<SlotCount, GenerationError> {
        SlotCount::try_from(self.treasure_slots)
    }

    /// Checks every count up front, for loaders that want to fail early.
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.mage_slot_count()?;
        self.treasure_slot_count()?;
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}
