//! Hybrid WhisperX→Gentle adapter.
//!
//! The hybrid pipeline uses WhisperX for transcription and Gentle for
//! phoneme-level forced alignment against that transcript, combining
//! accurate text with accurate timing. The cue construction is exactly the
//! Gentle path; this wrapper only changes the source tag and carries the
//! WhisperX stage details into metadata.

use std::collections::BTreeMap;

use crate::error::LipSyncError;
use crate::types::CueUnit;

use super::gentle::GentleAlignment;
use super::UnitSource;

pub const SOURCE_NAME: &str = "hybrid-whisperx-gentle";

#[derive(Debug, Clone)]
pub struct HybridAlignment {
    pub alignment: GentleAlignment,
    /// WhisperX model that produced the transcript (e.g. "base").
    pub whisperx_model: Option<String>,
    pub language: Option<String>,
}

impl HybridAlignment {
    pub fn new(alignment: GentleAlignment) -> Self {
        Self {
            alignment,
            whisperx_model: None,
            language: None,
        }
    }

    pub fn with_whisperx_model(mut self, model: impl Into<String>) -> Self {
        self.whisperx_model = Some(model.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl UnitSource for HybridAlignment {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn transcript(&self) -> String {
        self.alignment.transcript()
    }

    fn total_duration_hint(&self) -> Option<f64> {
        self.alignment.total_duration_hint()
    }

    fn metadata_extras(&self) -> BTreeMap<String, serde_json::Value> {
        let mut extra = BTreeMap::new();
        extra.insert(
            "transcriptionEngine".to_string(),
            serde_json::json!("whisperx"),
        );
        extra.insert("alignmentEngine".to_string(), serde_json::json!("gentle"));
        if let Some(model) = &self.whisperx_model {
            extra.insert("whisperxModel".to_string(), serde_json::json!(model));
        }
        if let Some(language) = &self.language {
            extra.insert("language".to_string(), serde_json::json!(language));
        }
        extra
    }

    fn collect_units(&self) -> Result<Vec<CueUnit>, LipSyncError> {
        self.alignment.collect_units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{timeline_from_source, TimelineOptions};

    fn sample_alignment() -> GentleAlignment {
        GentleAlignment::from_json(
            r#"{
                "transcript": "go",
                "end": 1.0,
                "words": [{
                    "word": "go",
                    "case": "success",
                    "start": 0.1,
                    "end": 0.5,
                    "phones": [
                        {"phone": "g_B", "duration": 0.2},
                        {"phone": "ow_E", "duration": 0.2}
                    ]
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn hybrid_reuses_gentle_units_with_its_own_source_tag() {
        let hybrid = HybridAlignment::new(sample_alignment())
            .with_whisperx_model("base")
            .with_language("en");
        let gentle_units = sample_alignment().collect_units().unwrap();
        assert_eq!(hybrid.collect_units().unwrap(), gentle_units);

        let timeline = timeline_from_source(&hybrid, &TimelineOptions::default()).unwrap();
        assert_eq!(timeline.metadata.source, SOURCE_NAME);
        assert_eq!(timeline.metadata.language.as_deref(), Some("en"));
        assert_eq!(
            timeline.metadata.extra["whisperxModel"],
            serde_json::json!("base")
        );
        assert_eq!(
            timeline.metadata.extra["transcriptionEngine"],
            serde_json::json!("whisperx")
        );
    }
}
