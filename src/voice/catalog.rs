use anyhow::{Context, Result};

use super::{Gender, HostVoice, SpeechHost, VoiceDescriptor};
use crate::languages::{self, MALE_KEYWORDS};

/// Enumerate the host's voices and classify each one
pub fn build_catalog(host: &dyn SpeechHost) -> Result<Vec<VoiceDescriptor>> {
    let voices = host
        .list_voices()
        .with_context(|| format!("listing voices from {}", host.name()))?;
    let catalog = describe_voices(&voices);
    tracing::debug!(
        engine = host.name(),
        voices = catalog.len(),
        "voice catalog built"
    );
    Ok(catalog)
}

/// Classify host voices by name, keeping enumeration order
pub fn describe_voices(voices: &[HostVoice]) -> Vec<VoiceDescriptor> {
    voices.iter().map(describe).collect()
}

fn describe(voice: &HostVoice) -> VoiceDescriptor {
    let name_lower = voice.name.to_lowercase();

    let language_codes = languages::profiles()
        .iter()
        .filter(|p| p.voice_keywords.iter().any(|kw| name_lower.contains(kw)))
        .map(|p| p.code)
        .collect();

    VoiceDescriptor {
        id: voice.id.clone(),
        name: voice.name.clone(),
        gender: infer_gender(&name_lower),
        language_codes,
    }
}

/// Female keywords are checked first: "female" also contains "male"
fn infer_gender(name_lower: &str) -> Gender {
    if languages::female_keywords().any(|kw| name_lower.contains(kw)) {
        Gender::Female
    } else if MALE_KEYWORDS.iter().any(|kw| name_lower.contains(kw)) {
        Gender::Male
    } else {
        Gender::Unknown
    }
}
