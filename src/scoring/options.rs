use serde::{Deserialize, Serialize};

/// Saturday, counted from Sunday = 0.
pub const MIDI_WEEKDAY: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Multiplier applied to the mean day score to get a power rating.
    pub rating_scale: f64,
    pub decimal_places: u32,
    /// Weekday dropped by the `exclude_midis` filter.
    pub excluded_weekday: u32,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            rating_scale: 1000.0,
            decimal_places: 2,
            excluded_weekday: MIDI_WEEKDAY,
        }
    }
}

impl ScoringOptions {
    pub fn validate(&self) -> Result<(), String> {
        if !self.rating_scale.is_finite() || self.rating_scale <= 0.0 {
            return Err(format!("Rating scale must be positive, got {}", self.rating_scale));
        }

        if self.decimal_places > 10 {
            return Err(format!(
                "Decimal places must be at most 10, got {}",
                self.decimal_places
            ));
        }

        if self.excluded_weekday > 6 {
            return Err(format!(
                "Excluded weekday must be between 0 (Sunday) and 6 (Saturday), got {}",
                self.excluded_weekday
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScoringOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut options = ScoringOptions::default();
        options.rating_scale = 0.0;
        assert!(options.validate().is_err());

        let mut options = ScoringOptions::default();
        options.excluded_weekday = 7;
        assert!(options.validate().is_err());
    }
}
