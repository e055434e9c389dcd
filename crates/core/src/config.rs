//! Cube configuration.

use crate::error::EngineError;
use crate::types::{Piece, DEFAULT_EXTENT, MIN_RUN, PALETTE_SIZE};

/// Settings used to deal a cube
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeConfig {
    pub extent: usize,
    pub seed: u32,
    /// Highest palette ordinal in each face's starting palette, inclusive
    pub populate_limit: usize,
    pub include_blocks: bool,
    pub max_cascade_rounds: usize,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            seed: 1,
            populate_limit: 4,
            include_blocks: false,
            max_cascade_rounds: 32,
        }
    }
}

impl CubeConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let parsed = |key: &str| env::var(key).ok().and_then(|s| s.trim().parse::<usize>().ok());

        let extent = parsed("CUBE_MATCH3_EXTENT").unwrap_or(defaults.extent);
        let seed = env::var("CUBE_MATCH3_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let populate_limit =
            parsed("CUBE_MATCH3_POPULATE_LIMIT").unwrap_or(defaults.populate_limit);
        let include_blocks = env::var("CUBE_MATCH3_BLOCKS")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.include_blocks);
        let max_cascade_rounds =
            parsed("CUBE_MATCH3_MAX_CASCADE").unwrap_or(defaults.max_cascade_rounds);

        Self {
            extent,
            seed,
            populate_limit,
            include_blocks,
            max_cascade_rounds,
        }
    }

    /// Starting palette of every face: palette ordinals `0..=populate_limit`
    pub fn palette(&self) -> Vec<Piece> {
        let last = self.populate_limit.min(PALETTE_SIZE - 1);
        Piece::PALETTE[..=last].to_vec()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.extent < MIN_RUN {
            return Err(EngineError::InvalidConfig(format!(
                "extent {} is too small for a run of {}",
                self.extent, MIN_RUN
            )));
        }
        if self.populate_limit >= PALETTE_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "populate limit {} is past the last palette entry {}",
                self.populate_limit,
                PALETTE_SIZE - 1
            )));
        }
        if self.max_cascade_rounds == 0 {
            return Err(EngineError::InvalidConfig(
                "cascade needs at least one round".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CubeConfig::default();
        assert_eq!(config.extent, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn palette_follows_populate_limit() {
        let config = CubeConfig {
            populate_limit: 2,
            ..CubeConfig::default()
        };
        assert_eq!(
            config.palette(),
            vec![Piece::Piece1, Piece::Piece2, Piece::Piece3]
        );
        assert_eq!(CubeConfig::default().palette().len(), 5);
    }

    #[test]
    fn test_cube_config_from_env() {
        // Should not panic whatever the environment holds
        let _config = CubeConfig::from_env();
    }

    #[test]
    fn validate_rejects_unusable_settings() {
        let small = CubeConfig {
            extent: 2,
            ..CubeConfig::default()
        };
        assert_eq!(small.validate().unwrap_err().code(), "invalid_config");

        let wide = CubeConfig {
            populate_limit: 10,
            ..CubeConfig::default()
        };
        assert!(wide.validate().is_err());

        let still = CubeConfig {
            max_cascade_rounds: 0,
            ..CubeConfig::default()
        };
        assert!(still.validate().is_err());
    }
}
