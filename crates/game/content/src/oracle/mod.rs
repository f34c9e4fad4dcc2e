//! In-memory implementations of the `expedition-core` oracle traits.
//!
//! The data is immutable once built; front-ends wrap these in `Arc` and hand
//! references to [`expedition_core::Env`].
mod cards;
mod settings;
mod treasures;
mod variants;

pub use cards::CardOracleImpl;
pub use settings::{ExpansionSelection, SettingsOracleImpl};
pub use treasures::TreasureOracleImpl;
pub use variants::VariantOracleImpl;
