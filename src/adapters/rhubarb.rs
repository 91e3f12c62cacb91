//! Rhubarb passthrough adapter.
//!
//! Rhubarb already emits the canonical wire format, so no cue building is
//! needed — only parsing and a validation pass over the data-model
//! invariants before handing the document to a consumer.

use crate::error::LipSyncError;
use crate::types::Timeline;

pub const SOURCE_NAME: &str = "rhubarb";

/// Parses and validates a Rhubarb JSON document.
pub fn from_json(data: &str) -> Result<Timeline, LipSyncError> {
    let timeline: Timeline =
        serde_json::from_str(data).map_err(|e| LipSyncError::json("parse Rhubarb timeline", e))?;
    validate(&timeline)?;
    Ok(timeline)
}

/// Checks the finished-timeline invariants: finite non-negative spans,
/// ascending order, no overlap between consecutive cues.
pub fn validate(timeline: &Timeline) -> Result<(), LipSyncError> {
    for (i, cue) in timeline.mouth_cues.iter().enumerate() {
        if !cue.start.is_finite() || !cue.end.is_finite() {
            return Err(LipSyncError::invalid_input(format!(
                "cue {i} has non-finite timing"
            )));
        }
        if cue.start < 0.0 || cue.end <= cue.start {
            return Err(LipSyncError::invalid_input(format!(
                "cue {i} has an empty or negative span: [{}, {})",
                cue.start, cue.end
            )));
        }
    }
    for (i, pair) in timeline.mouth_cues.windows(2).enumerate() {
        if pair[1].start < pair[0].end {
            return Err(LipSyncError::invalid_input(format!(
                "cues {i} and {} overlap or are out of order",
                i + 1
            )));
        }
    }
    Ok(())
}
