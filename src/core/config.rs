//! Board configuration.
//!
//! The layout (two rows of six pits plus a mancala each) is fixed. Only the
//! number of beads placed in each pit at the start is configurable, which
//! covers the common Kalah(6, n) variants.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::board::{PITS_PER_ROW, PLAYER_COUNT};

/// Largest starting count such that every bead on the board fits in one pit.
pub const MAX_BEADS_PER_PIT: u8 = 20;

/// Starting-position configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Beads placed in every pit at the start of a game.
    pub beads_per_pit: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { beads_per_pit: 4 }
    }
}

impl BoardConfig {
    /// Create a config with a custom starting count.
    pub fn with_beads_per_pit(mut self, beads: u8) -> Self {
        self.beads_per_pit = beads;
        self
    }

    /// Total beads in play for this configuration.
    #[must_use]
    pub fn total_beads(&self) -> u32 {
        u32::from(self.beads_per_pit) * (PITS_PER_ROW * PLAYER_COUNT) as u32
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beads_per_pit == 0 {
            return Err(ConfigError::Validation(
                "beads_per_pit must be > 0".into(),
            ));
        }
        if self.beads_per_pit > MAX_BEADS_PER_PIT {
            return Err(ConfigError::Validation(format!(
                "beads_per_pit must be <= {MAX_BEADS_PER_PIT}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.beads_per_pit, 4);
        assert_eq!(config.total_beads(), 48);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(BoardConfig::default().with_beads_per_pit(0).validate().is_err());
        assert!(BoardConfig::default().with_beads_per_pit(21).validate().is_err());
        assert!(BoardConfig::default().with_beads_per_pit(20).validate().is_ok());
    }

    #[test]
    fn test_serde_defaults() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());

        let config: BoardConfig = serde_json::from_str(r#"{"beads_per_pit": 6}"#).unwrap();
        assert_eq!(config.total_beads(), 72);
    }
}
