//! Game configuration types.
//!
//! A game is configured once, at reset, by a `RulesConfig`:
//! - `Variant`: Nine or Twelve Men's Morris (piece count, placement length, topology)
//! - Draw thresholds: fifty-move and repetition limits
//!
//! The variant is immutable for the lifetime of a game; only `reset` changes it.

use serde::{Deserialize, Serialize};

/// Game variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Nine Men's Morris.
    #[default]
    Nine,
    /// Twelve Men's Morris: diagonal corner lines, twelve pieces per side.
    Twelve,
}

impl Variant {
    /// Pieces each side places during the placement phase.
    #[must_use]
    pub const fn pieces_per_side(self) -> u32 {
        match self {
            Variant::Nine => 9,
            Variant::Twelve => 12,
        }
    }

    /// Length of the placement phase in plies.
    #[must_use]
    pub const fn placement_plies(self) -> u32 {
        self.pieces_per_side() * 2
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Nine => write!(f, "Nine Men's Morris"),
            Variant::Twelve => write!(f, "Twelve Men's Morris"),
        }
    }
}

/// Default number of quiet plies that draws the game.
pub const DEFAULT_FIFTY_MOVE_PLIES: u32 = 100;

/// Default number of occurrences of a position that draws the game.
pub const DEFAULT_REPETITION_COUNT: u32 = 3;

/// Complete rules configuration for one game.
///
/// ## Example
///
/// ```
/// use muhle_rules::core::{RulesConfig, Variant};
///
/// let config = RulesConfig::new(Variant::Twelve);
/// assert_eq!(config.placement_plies(), 24);
/// assert_eq!(config.fifty_move_plies, 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesConfigFields")]
pub struct RulesConfig {
    /// Board variant.
    pub variant: Variant,

    /// Consecutive quiet plies that end the game in a draw.
    pub fifty_move_plies: u32,

    /// Occurrences of the same position that end the game in a draw.
    pub repetition_count: u32,
}

impl RulesConfig {
    /// Standard rules for a variant.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            fifty_move_plies: DEFAULT_FIFTY_MOVE_PLIES,
            repetition_count: DEFAULT_REPETITION_COUNT,
        }
    }

    /// Override the fifty-move threshold.
    ///
    /// # Panics
    ///
    /// Panics if `plies` is zero.
    #[must_use]
    pub fn with_fifty_move_plies(mut self, plies: u32) -> Self {
        self.fifty_move_plies = plies;
        if let Err(reason) = self.validate() {
            panic!("{reason}");
        }
        self
    }

    /// Override the repetition threshold.
    ///
    /// # Panics
    ///
    /// Panics if `count` is below 2.
    #[must_use]
    pub fn with_repetition_count(mut self, count: u32) -> Self {
        self.repetition_count = count;
        if let Err(reason) = self.validate() {
            panic!("{reason}");
        }
        self
    }

    /// Check the draw thresholds.
    ///
    /// The fields are public, so a config built by hand or read from a file
    /// can hold values the builders refuse.
    pub fn validate(&self) -> Result<(), String> {
        if self.fifty_move_plies == 0 {
            return Err("fifty-move threshold must be positive".to_string());
        }
        if self.repetition_count < 2 {
            return Err(format!(
                "repetition threshold must be at least 2, got {}",
                self.repetition_count
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn pieces_per_side(&self) -> u32 {
        self.variant.pieces_per_side()
    }

    #[must_use]
    pub const fn placement_plies(&self) -> u32 {
        self.variant.placement_plies()
    }
}

/// Unchecked wire form of `RulesConfig`.
#[derive(Deserialize)]
struct RulesConfigFields {
    variant: Variant,
    fifty_move_plies: u32,
    repetition_count: u32,
}

impl TryFrom<RulesConfigFields> for RulesConfig {
    type Error = String;

    fn try_from(fields: RulesConfigFields) -> Result<Self, Self::Error> {
        let config = RulesConfig {
            variant: fields.variant,
            fifty_move_plies: fields.fifty_move_plies,
            repetition_count: fields.repetition_count,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl From<Variant> for RulesConfig {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}
