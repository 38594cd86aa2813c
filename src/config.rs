use crate::error::GuessError;

const DEFAULT_MAX: u32 = 1000;

/// Inclusive upper bound of the range the player picks from.
///
/// The search itself runs up to `max + PADDING`, which keeps the very top of
/// the range reachable with the `guess - 1` / `guess + 1` narrowing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max: u32,
}

impl GameConfig {
    pub const PADDING: u32 = 2;
    /// Largest `max` whose padded ceiling still fits an `i32`.
    pub const MAX_SUPPORTED: u32 = i32::MAX as u32 - Self::PADDING;

    pub fn new(max: u32) -> Result<Self, GuessError> {
        if max == 0 || max > Self::MAX_SUPPORTED {
            return Err(GuessError::InvalidMax { max });
        }
        Ok(Self { max })
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn ceiling(&self) -> i64 {
        i64::from(self.max) + i64::from(Self::PADDING)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max: DEFAULT_MAX }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_thousand() {
        let config = GameConfig::default();
        assert_eq!(config.max(), 1000);
        assert_eq!(config.ceiling(), 1002);
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            GameConfig::new(0),
            Err(GuessError::InvalidMax { max: 0 })
        ));
    }

    #[test]
    fn accepts_supported_extremes() {
        assert_eq!(GameConfig::new(1).unwrap().ceiling(), 3);
        let top = GameConfig::new(GameConfig::MAX_SUPPORTED).unwrap();
        assert_eq!(top.ceiling(), i64::from(i32::MAX));
        assert!(GameConfig::new(GameConfig::MAX_SUPPORTED + 1).is_err());
    }
}
