//! Cleaning parameters.
use crate::error::Error;

/// Parameters of the cleaning stages.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanConfig {
    /// Tokens longer than this are replaced by `<LONGER_THAN_{max_token_length}>`.
    pub max_token_length: usize,
    /// Lines need at least this many tokens.
    pub min_sequence_length: usize,
    /// Lines need at least this portion of letters among non-whitespace characters.
    pub purity: f64,
}

impl CleanConfig {
    /// Check that the purity is a fraction.
    pub fn validate(&self) -> Result<(), Error> {
        check_purity(self.purity)
    }
}

/// Fails if `purity` is not within `[0, 1]` (NaN included).
pub fn check_purity(purity: f64) -> Result<(), Error> {
    if !(0.0..=1.0).contains(&purity) {
        return Err(Error::Config(format!(
            "purity must be within [0, 1], got {}",
            purity
        )));
    }
    Ok(())
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            max_token_length: 40,
            min_sequence_length: 1,
            purity: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = CleanConfig::default();
        assert_eq!(c.max_token_length, 40);
        assert_eq!(c.min_sequence_length, 1);
        assert_eq!(c.purity, 0.5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn purity_bounds() {
        for purity in [0.0, 1.0] {
            let c = CleanConfig {
                purity,
                ..Default::default()
            };
            assert!(c.validate().is_ok());
        }

        for purity in [-0.1, 1.5, f64::NAN] {
            let c = CleanConfig {
                purity,
                ..Default::default()
            };
            assert!(matches!(c.validate(), Err(Error::Config(_))));
        }
    }
}
