//! Converts timing data from speech-alignment backends (Rhubarb, Gentle,
//! WhisperX, Azure Speech, and the hybrid WhisperX→Gentle pipeline) into one
//! canonical mouth-cue timeline for lip-sync playback.

pub mod adapters;
pub mod config;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod timeline;
pub mod types;

pub use adapters::{timeline_from_source, TimelineOptions, UnitSource};
pub use config::CueBuilderConfig;
pub use error::LipSyncError;
pub use timeline::{build_mouth_cues, build_timeline, estimate_total_duration};
pub use types::{ConversionRequest, CueUnit, MouthCue, Timeline, TimelineMetadata, Viseme};
