//! Backend adapters: one thin translator per speech-timing backend.
//!
//! Each adapter turns its backend's native output shape into the
//! `(viseme, start, end)` unit stream and lets [`timeline_from_source`]
//! do the merging, gap-filling, and filtering — adapters differ only in
//! how they construct the units, never in how cues are built.

use std::collections::BTreeMap;

use crate::config::CueBuilderConfig;
use crate::error::LipSyncError;
use crate::timeline::build_timeline;
use crate::types::{ConversionRequest, CueUnit, Timeline, TimelineMetadata};

pub mod azure;
pub mod gentle;
pub mod hybrid;
pub mod rhubarb;
pub mod whisperx;

/// A backend's parsed output, viewed as a producer of resolved cue units.
pub trait UnitSource {
    /// Identifier recorded in `metadata.source` (e.g. `"gentlejs"`).
    fn source_name(&self) -> &'static str;

    fn transcript(&self) -> String;

    /// Total audio duration the backend knows about, if any. `None` asks
    /// the builder to estimate one from the last unit.
    fn total_duration_hint(&self) -> Option<f64> {
        None
    }

    fn collect_units(&self) -> Result<Vec<CueUnit>, LipSyncError>;

    /// Backend-specific metadata fields beyond the canonical four.
    fn metadata_extras(&self) -> BTreeMap<String, serde_json::Value> {
        BTreeMap::new()
    }
}

/// Conversion parameters shared by all adapters.
#[derive(Debug, Clone, Default)]
pub struct TimelineOptions {
    pub sound_file: String,
    /// Overrides the source's own duration hint when set.
    pub total_duration_s: Option<f64>,
    pub config: CueBuilderConfig,
}

/// Builds a canonical timeline from any backend source. The one merge/fill
/// path every backend shares.
pub fn timeline_from_source(
    source: &dyn UnitSource,
    options: &TimelineOptions,
) -> Result<Timeline, LipSyncError> {
    let units = source.collect_units()?;
    let total_duration_s = options
        .total_duration_s
        .or_else(|| source.total_duration_hint())
        .unwrap_or(0.0);

    let request = ConversionRequest {
        units,
        total_duration_s,
        config: options.config,
    };
    let metadata = TimelineMetadata {
        sound_file: options.sound_file.clone(),
        duration: 0.0, // filled by the builder
        transcript: source.transcript(),
        source: source.source_name().to_string(),
        language: None,
        voice_engine: None,
        extra: source.metadata_extras(),
    };
    let mut timeline = build_timeline(&request, metadata)?;
    apply_well_known_extras(&mut timeline.metadata);
    Ok(timeline)
}

/// Promotes `language` / `voiceEngine` out of the extras map into their
/// named metadata fields so the wire format matches the original outputs.
fn apply_well_known_extras(metadata: &mut TimelineMetadata) {
    if let Some(serde_json::Value::String(lang)) = metadata.extra.remove("language") {
        metadata.language = Some(lang);
    }
    if let Some(serde_json::Value::String(engine)) = metadata.extra.remove("voiceEngine") {
        metadata.voice_engine = Some(engine);
    }
}
