//! The cue timeline builder: turns an ordered (or orderable) stream of
//! resolved `(viseme, start, end)` units into the canonical mouth-cue
//! sequence — gap-filled with silence, minimum-duration-filtered, and
//! run-length-merged.

use crate::config::{CueBuilderConfig, TRAILING_BUFFER_S};
use crate::error::LipSyncError;
use crate::types::{ConversionRequest, CueUnit, MouthCue, Timeline, TimelineMetadata, Viseme};

/// Rounds to millisecond precision for output stability; unrounded floats
/// cause spurious gap/merge decisions when a timeline is re-processed.
pub(crate) fn round_ms(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Estimates the total audio duration when the backend supplied none:
/// the last unit's end plus a fixed trailing buffer. A heuristic.
pub fn estimate_total_duration(units: &[CueUnit]) -> f64 {
    units
        .iter()
        .map(|u| u.end)
        .fold(0.0_f64, f64::max)
        + TRAILING_BUFFER_S
}

/// Builds the canonical mouth-cue sequence over `[0, total_duration_s)`.
///
/// Contract: output cues are sorted ascending, non-overlapping, cover the
/// whole duration within `gap_threshold_s`, and no two consecutive cues
/// share a viseme. Malformed spans (zero/negative/NaN) are absorbed by
/// skipping, never raised.
pub fn build_mouth_cues(
    units: &[CueUnit],
    total_duration_s: f64,
    config: &CueBuilderConfig,
) -> Vec<MouthCue> {
    let mut sorted: Vec<CueUnit> = units
        .iter()
        .copied()
        .filter(|u| u.start.is_finite() && u.end.is_finite() && u.start >= 0.0)
        .collect();
    // Inputs are expected sorted but must not be assumed so.
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let gap = config.gap_threshold_s;
    let min_duration = config.min_duration_s;

    let mut cues: Vec<MouthCue> = Vec::with_capacity(sorted.len() + 2);
    let mut last_end = 0.0_f64;
    let mut last_viseme: Option<Viseme> = None;

    for unit in sorted {
        // Short transients are absorbed into whatever silence or cue
        // follows; they neither emit nor advance last_end.
        if unit.end - unit.start < min_duration {
            tracing::debug!(
                viseme = %unit.viseme,
                start = unit.start,
                end = unit.end,
                "skipping sub-minimum unit"
            );
            continue;
        }

        if last_viseme == Some(unit.viseme) && unit.start - last_end < gap {
            // Run-length merge: temporally and symbolically continuous with
            // the last emitted cue. Extend, never shrink.
            if let Some(last) = cues.last_mut() {
                last.end = last.end.max(unit.end);
                last_end = last.end;
            }
            continue;
        }

        // Clamp overlap against the last emitted cue so the output stays
        // non-overlapping even when upstream spans collide. A remnant left
        // below the minimum duration is dropped like any other transient.
        let start = unit.start.max(last_end);
        if unit.end - start < min_duration {
            tracing::debug!(
                viseme = %unit.viseme,
                start = unit.start,
                clamped_start = start,
                end = unit.end,
                "skipping sub-minimum overlap remnant"
            );
            continue;
        }

        if start - last_end > gap {
            push_cue(&mut cues, Viseme::X, last_end, start);
        }

        push_cue(&mut cues, unit.viseme, start, unit.end);
        last_end = unit.end;
        last_viseme = Some(unit.viseme);
    }

    if cues.is_empty() {
        // Degenerate all-silence timeline.
        return vec![MouthCue {
            start: 0.0,
            end: round_ms(total_duration_s.max(0.0)),
            value: Viseme::X,
        }];
    }

    if total_duration_s - last_end > gap {
        push_cue(&mut cues, Viseme::X, last_end, total_duration_s);
    }

    for cue in &mut cues {
        cue.start = round_ms(cue.start);
        cue.end = round_ms(cue.end);
    }
    cues
}

/// Appends a cue, folding it into the previous one when the viseme repeats
/// (gap-fill silence next to an explicit silence unit, for example) so no
/// two consecutive cues share a symbol.
fn push_cue(cues: &mut Vec<MouthCue>, value: Viseme, start: f64, end: f64) {
    if let Some(last) = cues.last_mut() {
        if last.value == value {
            last.end = last.end.max(end);
            return;
        }
    }
    cues.push(MouthCue { start, end, value });
}

/// Validates a request, resolves the total duration, runs the builder, and
/// packages the result with metadata. The single entry shared by every
/// backend adapter.
pub fn build_timeline(
    request: &ConversionRequest,
    mut metadata: TimelineMetadata,
) -> Result<Timeline, LipSyncError> {
    request.config.validate()?;
    if !request.total_duration_s.is_finite() {
        return Err(LipSyncError::invalid_input(format!(
            "total_duration_s must be finite, got {}",
            request.total_duration_s
        )));
    }

    let total = if request.total_duration_s > 0.0 {
        request.total_duration_s
    } else {
        estimate_total_duration(&request.units)
    };

    let mouth_cues = build_mouth_cues(&request.units, total, &request.config);
    metadata.duration = round_ms(total);

    Ok(Timeline {
        metadata,
        mouth_cues,
    })
}
