//! WhisperX transcription-aligner adapter.
//!
//! WhisperX emits either per-character absolute spans (when char alignments
//! were requested) or per-word spans only. The char path maps each timed
//! character through the character table; the word fallback distributes the
//! word's duration evenly across the non-silence visemes estimated from its
//! characters.

use serde::Deserialize;

use crate::error::LipSyncError;
use crate::normalize::viseme_for_char;
use crate::types::{CueUnit, Viseme};

use super::UnitSource;

pub const SOURCE_NAME: &str = "whisperx";

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperXResult {
    pub segments: Vec<WhisperXSegment>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperXSegment {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub chars: Option<Vec<WhisperXChar>>,
    #[serde(default)]
    pub words: Option<Vec<WhisperXWord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperXChar {
    pub char: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperXWord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

impl WhisperXResult {
    pub fn from_json(data: &str) -> Result<Self, LipSyncError> {
        serde_json::from_str(data).map_err(|e| LipSyncError::json("parse WhisperX result", e))
    }
}

/// Estimates the viseme sequence for a word from its characters, dropping
/// silence symbols (spaces/punctuation contribute nothing inside a word).
pub(crate) fn estimate_visemes_from_word(word: &str) -> Vec<Viseme> {
    word.chars()
        .map(viseme_for_char)
        .filter(|&v| v != Viseme::X)
        .collect()
}

impl UnitSource for WhisperXResult {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn transcript(&self) -> String {
        self.text.clone().unwrap_or_default()
    }

    fn total_duration_hint(&self) -> Option<f64> {
        self.segments.iter().filter_map(|s| s.end).reduce(f64::max)
    }

    fn metadata_extras(&self) -> std::collections::BTreeMap<String, serde_json::Value> {
        let mut extra = std::collections::BTreeMap::new();
        if let Some(language) = &self.language {
            extra.insert("language".to_string(), serde_json::json!(language));
        }
        extra
    }

    fn collect_units(&self) -> Result<Vec<CueUnit>, LipSyncError> {
        let mut units = Vec::new();

        for segment in &self.segments {
            if segment.start.is_none() || segment.end.is_none() {
                continue;
            }

            match (&segment.chars, &segment.words) {
                (Some(chars), _) if !chars.is_empty() => {
                    for timed in chars {
                        // Leading spaces and some punctuation arrive untimed.
                        let (Some(start), Some(end)) = (timed.start, timed.end) else {
                            continue;
                        };
                        let Some(c) = timed.char.chars().next() else {
                            continue;
                        };
                        units.push(CueUnit::new(viseme_for_char(c), start, end));
                    }
                }
                (_, Some(words)) => {
                    for word in words {
                        let (Some(start), Some(end)) = (word.start, word.end) else {
                            continue;
                        };
                        let text = word.word.as_deref().unwrap_or_default();
                        let visemes = estimate_visemes_from_word(text);
                        if visemes.is_empty() {
                            // The word still bounds the gap computation via
                            // its span; it just emits no cues.
                            continue;
                        }
                        let step = (end - start) / visemes.len() as f64;
                        let mut viseme_start = start;
                        for viseme in visemes {
                            units.push(CueUnit::new(viseme, viseme_start, viseme_start + step));
                            viseme_start += step;
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(units)
    }
}
