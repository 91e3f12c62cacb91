//! Azure Speech Service viseme-event adapter.
//!
//! The SDK delivers instantaneous viseme events through a callback during an
//! asynchronous synthesis call. [`AzureVisemeCapture`] buffers those events;
//! only once the synthesis reports a terminal result does [`finish`]
//! (`AzureVisemeCapture::finish`) seal the buffer into a source — partial
//! streams are never handed to the builder. Each event's span runs to the
//! next event's offset; the final event runs to the total audio duration.

use serde::Deserialize;

use crate::error::LipSyncError;
use crate::normalize::viseme_for_vendor_id;
use crate::types::CueUnit;

use super::UnitSource;

pub const SOURCE_NAME: &str = "azure";
const VOICE_ENGINE: &str = "Microsoft Azure Speech Service";

/// One instantaneous viseme event: a vendor ID at an audio offset.
/// Offsets are seconds; SDK callers convert from 100-nanosecond ticks.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AzureVisemeEvent {
    pub viseme_id: u32,
    pub audio_offset_s: f64,
}

/// Buffers viseme events until synthesis completes.
#[derive(Debug, Default)]
pub struct AzureVisemeCapture {
    events: Vec<AzureVisemeEvent>,
}

impl AzureVisemeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one event from the synthesis callback.
    pub fn push(&mut self, viseme_id: u32, audio_offset_s: f64) {
        self.events.push(AzureVisemeEvent {
            viseme_id,
            audio_offset_s,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Seals the buffer once the synthesis reported a terminal result.
    /// `audio_duration_s` comes from the synthesis result when available;
    /// pass `None` to fall back to the last-offset estimate.
    pub fn finish(self, transcript: String, audio_duration_s: Option<f64>) -> AzureVisemeStream {
        AzureVisemeStream {
            events: self.events,
            transcript,
            audio_duration_s,
        }
    }
}

/// A completed, ordered event stream ready for conversion.
#[derive(Debug, Clone)]
pub struct AzureVisemeStream {
    pub events: Vec<AzureVisemeEvent>,
    pub transcript: String,
    pub audio_duration_s: Option<f64>,
}

impl AzureVisemeStream {
    /// Total duration from the synthesis result, or the last event's offset
    /// plus the trailing buffer when the result carried none.
    fn resolved_duration(&self) -> f64 {
        self.audio_duration_s.unwrap_or_else(|| {
            self.events
                .iter()
                .map(|e| e.audio_offset_s)
                .fold(0.0_f64, f64::max)
                + crate::config::TRAILING_BUFFER_S
        })
    }
}

impl UnitSource for AzureVisemeStream {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn transcript(&self) -> String {
        self.transcript.clone()
    }

    fn total_duration_hint(&self) -> Option<f64> {
        // The pairing below already runs the final event out to this value;
        // exposing it keeps the builder from re-estimating on top of it.
        Some(self.resolved_duration())
    }

    fn metadata_extras(&self) -> std::collections::BTreeMap<String, serde_json::Value> {
        let mut extra = std::collections::BTreeMap::new();
        extra.insert("voiceEngine".to_string(), serde_json::json!(VOICE_ENGINE));
        extra
    }

    fn collect_units(&self) -> Result<Vec<CueUnit>, LipSyncError> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| a.audio_offset_s.total_cmp(&b.audio_offset_s));

        let total = self.resolved_duration();

        let mut units = Vec::with_capacity(events.len());
        for (i, event) in events.iter().enumerate() {
            let end = events
                .get(i + 1)
                .map(|next| next.audio_offset_s)
                .unwrap_or(total);
            units.push(CueUnit::new(
                viseme_for_vendor_id(event.viseme_id),
                event.audio_offset_s,
                end,
            ));
        }
        Ok(units)
    }
}
