//! Traits describing read-only content and collaborators.
//!
//! Oracles expose card, variant and treasure definitions, build settings
//! snapshots and hand out identifiers. The [`Env`] aggregate bundles them so
//! the generator can access everything it needs without hard coupling to
//! concrete implementations.
mod cards;
mod error;
mod ids;
mod settings;
mod treasures;
mod variants;

pub use cards::CardOracle;
pub use error::OracleError;
pub use ids::{IdGenerator, SequentialIds};
pub use settings::SettingsOracle;
pub use treasures::TreasureOracle;
pub use variants::VariantOracle;

/// Aggregates the read-only oracles required by the generator.
pub struct Env<'a, C, V, T, S, I>
where
    C: CardOracle + ?Sized,
    V: VariantOracle + ?Sized,
    T: TreasureOracle + ?Sized,
    S: SettingsOracle + ?Sized,
    I: IdGenerator + ?Sized,
{
    cards: Option<&'a C>,
    variants: Option<&'a V>,
    treasures: Option<&'a T>,
    settings: Option<&'a S>,
    ids: Option<&'a I>,
}

impl<C, V, T, S, I> Clone for Env<'_, C, V, T, S, I>
where
    C: CardOracle + ?Sized,
    V: VariantOracle + ?Sized,
    T: TreasureOracle + ?Sized,
    S: SettingsOracle + ?Sized,
    I: IdGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Only references are held, so copying never requires the oracles to be Clone.
impl<C, V, T, S, I> Copy for Env<'_, C, V, T, S, I>
where
    C: CardOracle + ?Sized,
    V: VariantOracle + ?Sized,
    T: TreasureOracle + ?Sized,
    S: SettingsOracle + ?Sized,
    I: IdGenerator + ?Sized,
{
}

pub type GenerationEnv<'a> = Env<
    'a,
    dyn CardOracle + 'a,
    dyn VariantOracle + 'a,
    dyn TreasureOracle + 'a,
    dyn SettingsOracle + 'a,
    dyn IdGenerator + 'a,
>;

impl<'a, C, V, T, S, I> Env<'a, C, V, T, S, I>
where
    C: CardOracle + ?Sized,
    V: VariantOracle + ?Sized,
    T: TreasureOracle + ?Sized,
    S: SettingsOracle + ?Sized,
    I: IdGenerator + ?Sized,
{
    pub fn new(
        cards: Option<&'a C>,
        variants: Option<&'a V>,
        treasures: Option<&'a T>,
        settings: Option<&'a S>,
        ids: Option<&'a I>,
    ) -> Self {
        Self {
            cards,
            variants,
            treasures,
            settings,
            ids,
        }
    }

    pub fn with_all(
        cards: &'a C,
        variants: &'a V,
        treasures: &'a T,
        settings: &'a S,
        ids: &'a I,
    ) -> Self {
        Self::new(
            Some(cards),
            Some(variants),
            Some(treasures),
            Some(settings),
            Some(ids),
        )
    }

    pub fn empty() -> Self {
        Self {
            cards: None,
            variants: None,
            treasures: None,
            settings: None,
            ids: None,
        }
    }

    /// Returns the CardOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CardsNotAvailable` if no card oracle was provided.
    pub fn cards(&self) -> Result<&'a C, OracleError> {
        self.cards.ok_or(OracleError::CardsNotAvailable)
    }

    /// Returns the VariantOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::VariantsNotAvailable` if no variant oracle was provided.
    pub fn variants(&self) -> Result<&'a V, OracleError> {
        self.variants.ok_or(OracleError::VariantsNotAvailable)
    }

    /// Returns the TreasureOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TreasuresNotAvailable` if no treasure oracle was provided.
    pub fn treasures(&self) -> Result<&'a T, OracleError> {
        self.treasures.ok_or(OracleError::TreasuresNotAvailable)
    }

    /// Returns the SettingsOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SettingsNotAvailable` if no settings oracle was provided.
    pub fn settings(&self) -> Result<&'a S, OracleError> {
        self.settings.ok_or(OracleError::SettingsNotAvailable)
    }

    /// Returns the IdGenerator, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::IdsNotAvailable` if no id generator was provided.
    pub fn ids(&self) -> Result<&'a I, OracleError> {
        self.ids.ok_or(OracleError::IdsNotAvailable)
    }
}

impl<'a, C, V, T, S, I> Env<'a, C, V, T, S, I>
where
    C: CardOracle + 'a,
    V: VariantOracle + 'a,
    T: TreasureOracle + 'a,
    S: SettingsOracle + 'a,
    I: IdGenerator + 'a,
{
    /// Converts this environment into a trait-object based `GenerationEnv`.
    pub fn into_generation_env(self) -> GenerationEnv<'a> {
        let cards: Option<&'a dyn CardOracle> = self.cards.map(|cards| cards as _);
        let variants: Option<&'a dyn VariantOracle> = self.variants.map(|variants| variants as _);
        let treasures: Option<&'a dyn TreasureOracle> =
            self.treasures.map(|treasures| treasures as _);
        let settings: Option<&'a dyn SettingsOracle> = self.settings.map(|settings| settings as _);
        let ids: Option<&'a dyn IdGenerator> = self.ids.map(|ids| ids as _);
        Env::new(cards, variants, treasures, settings, ids)
    }
}
