//! Error types for the expedition generation pipeline.

use crate::error::{ErrorSeverity, GameError, GenerationError};

/// Identifies which step of the pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationStage {
    Settings,
    Mages,
    Supply,
    Treasures,
}

impl GenerationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::Settings => "settings",
            GenerationStage::Mages => "mages",
            GenerationStage::Supply => "supply",
            GenerationStage::Treasures => "treasures",
        }
    }
}

/// Associates a pipeline stage with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{} stage failed: {error}", .stage.as_str())]
pub struct ExpeditionError {
    pub stage: GenerationStage,
    pub error: GenerationError,
}

impl ExpeditionError {
    pub fn new(stage: GenerationStage, error: GenerationError) -> Self {
        Self { stage, error }
    }

    /// Adapter for `map_err`: tags any generation error with `stage`.
    pub fn at<E>(stage: GenerationStage) -> impl FnOnce(E) -> Self
    where
        E: Into<GenerationError>,
    {
        move |error| Self::new(stage, error.into())
    }
}

impl GameError for ExpeditionError {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}

/// Field of an expedition whose replay did not reproduce the stored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplayField {
    MageIds,
    SupplyIds,
    TreasureIds,
    Seed,
}

/// Errors surfaced while auditing an expedition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplayError {
    #[error("replay failed: {0}")]
    Generation(#[from] ExpeditionError),

    #[error("replay mismatch in {field}")]
    Mismatch { field: ReplayField },
}

impl GameError for ReplayError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Generation(error) => error.severity(),
            Self::Mismatch { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Generation(error) => error.error_code(),
            Self::Mismatch { .. } => "REPLAY_MISMATCH",
        }
    }
}
