use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CueBuilderConfig;

/// Mouth-shape class used by the playback demo. The vocabulary is the
/// Rhubarb/Preston-Blair nine-symbol set and never grows at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viseme {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    X,
}

impl Viseme {
    pub fn description(self) -> &'static str {
        match self {
            Viseme::A => "Closed lips (M, B, P)",
            Viseme::B => "Clenched teeth (K, S, T, EE)",
            Viseme::C => "Open mouth medium (EH, AE)",
            Viseme::D => "Wide open (AA, AH)",
            Viseme::E => "Slightly rounded (AO, ER)",
            Viseme::F => "Puckered lips (UW, OW, W)",
            Viseme::G => "Teeth on lip (F, V)",
            Viseme::H => "Tongue up (L)",
            Viseme::X => "Rest/silence",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Viseme::A => "A",
            Viseme::B => "B",
            Viseme::C => "C",
            Viseme::D => "D",
            Viseme::E => "E",
            Viseme::F => "F",
            Viseme::G => "G",
            Viseme::H => "H",
            Viseme::X => "X",
        }
    }
}

impl fmt::Display for Viseme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical timeline entry.
/// Time contract is [start, end) in seconds, start inclusive/end exclusive,
/// rounded to millisecond precision once the builder has finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouthCue {
    pub start: f64,
    pub end: f64,
    pub value: Viseme,
}

impl MouthCue {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetadata {
    pub sound_file: String,
    pub duration: f64,
    pub transcript: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_engine: Option<String>,
    /// Backend-specific metadata the canonical four fields do not cover
    /// (e.g. the hybrid pipeline's stage details).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The wire format consumed by the playback demo:
/// `{ "metadata": {...}, "mouthCues": [{ "start", "end", "value" }, ...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub metadata: TimelineMetadata,
    pub mouth_cues: Vec<MouthCue>,
}

/// A backend-native timed unit after symbol resolution: the triple stream
/// every adapter hands to the cue timeline builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueUnit {
    pub viseme: Viseme,
    pub start: f64,
    pub end: f64,
}

impl CueUnit {
    pub fn new(viseme: Viseme, start: f64, end: f64) -> Self {
        Self { viseme, start, end }
    }
}

/// Input contract for the cue timeline builder. Units may arrive unsorted;
/// a non-positive `total_duration_s` asks the builder to estimate one.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub units: Vec<CueUnit>,
    pub total_duration_s: f64,
    pub config: CueBuilderConfig,
}
