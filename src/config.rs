use serde::Deserialize;

use crate::error::LipSyncError;

/// Trailing buffer added when the total audio duration must be estimated
/// from the last unit's end. A heuristic, not a guarantee.
pub const TRAILING_BUFFER_S: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CueBuilderConfig {
    /// Cues shorter than this are dropped; below ~30 ms a mouth-shape
    /// change is not visually registrable.
    pub min_duration_s: f64,
    /// Gaps shorter than this count as continuous; longer gaps get an
    /// explicit silence cue.
    pub gap_threshold_s: f64,
}

impl CueBuilderConfig {
    pub const DEFAULT_MIN_DURATION_S: f64 = 0.03;
    pub const DEFAULT_GAP_THRESHOLD_S: f64 = 0.01;

    pub fn validate(&self) -> Result<(), LipSyncError> {
        if !self.min_duration_s.is_finite() || self.min_duration_s <= 0.0 {
            return Err(LipSyncError::invalid_input(format!(
                "min_duration_s must be a positive number, got {}",
                self.min_duration_s
            )));
        }
        if !self.gap_threshold_s.is_finite() || self.gap_threshold_s <= 0.0 {
            return Err(LipSyncError::invalid_input(format!(
                "gap_threshold_s must be a positive number, got {}",
                self.gap_threshold_s
            )));
        }
        Ok(())
    }
}

impl Default for CueBuilderConfig {
    fn default() -> Self {
        Self {
            min_duration_s: Self::DEFAULT_MIN_DURATION_S,
            gap_threshold_s: Self::DEFAULT_GAP_THRESHOLD_S,
        }
    }
}
