//! Game configuration.
//!
//! A game is configured by:
//! - `stones_per_pit`: stones placed in each pit at setup (3 or 4 in the
//!   classic board game)
//! - `undo_budget`: undos a player may take before the turn passes
//!
//! `GameConfig` is plain serde data so front ends can keep it alongside their
//! own settings (theme, window size, ...). Call `validate()` before use;
//! [`BoardEngine::from_config`](crate::session::BoardEngine::from_config)
//! does this for you.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default undo budget.
pub const MAX_UNDO_COUNT: u32 = 3;

/// Default stones per pit.
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Upper bound on stones per pit.
pub const MAX_STONES_PER_PIT: u32 = 64;

/// Configuration for one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Stones placed in every pit at setup.
    pub stones_per_pit: u32,

    /// Consecutive undos allowed before the turn passes to the opponent.
    pub undo_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            undo_budget: MAX_UNDO_COUNT,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Set the undo budget. Zero disables undo.
    #[must_use]
    pub fn with_undo_budget(mut self, budget: u32) -> Self {
        self.undo_budget = budget;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_stones_per_pit(self.stones_per_pit)
    }

    /// Stones on the board for this configuration.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        2 * crate::core::PITS_PER_PLAYER as u32 * self.stones_per_pit
    }
}

/// Check a stones-per-pit value.
pub fn validate_stones_per_pit(stones: u32) -> Result<(), ConfigError> {
    if stones == 0 {
        return Err(ConfigError::ZeroStones);
    }
    if stones > MAX_STONES_PER_PIT {
        return Err(ConfigError::TooManyStones {
            requested: stones,
            max: MAX_STONES_PER_PIT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.stones_per_pit, 4);
        assert_eq!(config.undo_budget, 3);
        assert_eq!(config.total_stones(), 48);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_stones_per_pit(3).with_undo_budget(1);
        assert_eq!(config.stones_per_pit, 3);
        assert_eq!(config.undo_budget, 1);
        assert_eq!(config.total_stones(), 36);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = GameConfig::new().with_stones_per_pit(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroStones));
    }

    #[test]
    fn test_validate_rejects_too_many() {
        let config = GameConfig::new().with_stones_per_pit(65);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyStones {
                requested: 65,
                max: MAX_STONES_PER_PIT
            })
        );
        assert!(GameConfig::new().with_stones_per_pit(64).validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_stones_per_pit(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"stones_per_pit": 3}"#).unwrap();
        assert_eq!(config.stones_per_pit, 3);
        assert_eq!(config.undo_budget, MAX_UNDO_COUNT);
    }
}
