//! Gentle forced-aligner adapter.
//!
//! Gentle reports per-word spans plus per-phone *durations* (not absolute
//! times); absolute phone spans are derived by walking cumulative durations
//! from the word's start. Words the aligner could not find in the audio
//! contribute no units — the builder's gap-fill covers them with silence.

use serde::Deserialize;

use crate::error::LipSyncError;
use crate::normalize::viseme_for_phoneme;
use crate::types::CueUnit;

use super::UnitSource;

pub const SOURCE_NAME: &str = "gentlejs";

const CASE_NOT_FOUND: &str = "not-found-in-audio";

#[derive(Debug, Clone, Deserialize)]
pub struct GentleAlignment {
    pub words: Vec<GentleWord>,
    #[serde(default)]
    pub transcript: Option<String>,
    /// End of the audio in seconds, when Gentle reports one.
    #[serde(default)]
    pub end: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GentleWord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub case: Option<String>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub phones: Option<Vec<GentlePhone>>,
    /// Word-level phone label for entries without a phone list.
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GentlePhone {
    pub phone: String,
    #[serde(default)]
    pub duration: Option<f64>,
}

impl GentleAlignment {
    pub fn from_json(data: &str) -> Result<Self, LipSyncError> {
        serde_json::from_str(data).map_err(|e| LipSyncError::json("parse Gentle alignment", e))
    }
}

impl UnitSource for GentleAlignment {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn transcript(&self) -> String {
        self.transcript.clone().unwrap_or_default()
    }

    fn total_duration_hint(&self) -> Option<f64> {
        self.end
    }

    fn collect_units(&self) -> Result<Vec<CueUnit>, LipSyncError> {
        let mut units = Vec::new();

        for word in &self.words {
            if word.case.as_deref() == Some(CASE_NOT_FOUND) {
                continue;
            }
            let (Some(word_start), Some(word_end)) = (word.start, word.end) else {
                // Aligned entries carry timing; anything else is skippable
                // upstream noise.
                continue;
            };

            match word.phones.as_deref() {
                Some(phones) if !phones.is_empty() => {
                    // Walk cumulative phone durations from the word start.
                    let mut phone_start = word_start;
                    for phone in phones {
                        let duration = phone.duration.unwrap_or(0.0);
                        let phone_end = phone_start + duration.max(0.0);
                        units.push(CueUnit::new(
                            viseme_for_phoneme(&phone.phone),
                            phone_start,
                            phone_end,
                        ));
                        phone_start = phone_end;
                    }
                }
                _ => {
                    // No phone breakdown: one unit over the word span using
                    // the word-level label, silence if none.
                    let label = word.phone.as_deref().unwrap_or("SIL");
                    units.push(CueUnit::new(viseme_for_phoneme(label), word_start, word_end));
                }
            }
        }

        Ok(units)
    }
}
