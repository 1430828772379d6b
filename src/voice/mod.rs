//! Voice system — host TTS voices, catalog building, selection and playback

pub mod catalog;
pub mod host;
pub mod playback;
pub mod select;

use anyhow::Result;
use std::fmt;

pub use catalog::{build_catalog, describe_voices};
pub use select::{SelectionResult, select_voice};

/// A voice as reported by the host speech engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostVoice {
    /// Opaque identifier, stable within one process run
    pub id: String,
    pub name: String,
    /// Raw language tags (e.g. "en_US", "en-gb")
    pub languages: Vec<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
}

/// Gender inferred from a voice name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Unknown,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A host voice with inferred gender and matched language codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub language_codes: Vec<&'static str>,
}

impl VoiceDescriptor {
    pub fn speaks(&self, code: &str) -> bool {
        self.language_codes.iter().any(|c| *c == code)
    }
}

/// Engine parameters for one utterance; `None` leaves the engine default
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechSettings {
    pub voice: Option<String>,
    /// Words per minute
    pub rate: Option<u32>,
    /// 0.0 – 1.0
    pub volume: Option<f32>,
}

/// A platform text-to-speech engine
pub trait SpeechHost {
    fn name(&self) -> &str;

    /// Enumerate installed voices, in engine order
    fn list_voices(&self) -> Result<Vec<HostVoice>>;

    /// Speak `text`, blocking until playback finishes
    fn speak(&self, text: &str, settings: &SpeechSettings) -> Result<()>;
}
