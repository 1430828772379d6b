use super::{Gender, VoiceDescriptor};
use crate::languages;

/// Outcome of a voice search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub voice_id: Option<String>,
    pub status: String,
}

impl SelectionResult {
    fn found(voice: &VoiceDescriptor, status: String) -> Self {
        Self {
            voice_id: Some(voice.id.clone()),
            status,
        }
    }

    fn none(status: impl Into<String>) -> Self {
        Self {
            voice_id: None,
            status: status.into(),
        }
    }
}

/// Pick the first voice for `code` in catalog order, female first when preferred.
///
/// Never fails: unsupported codes and empty matches come back as a status
/// message with no voice id.
pub fn select_voice(
    catalog: &[VoiceDescriptor],
    code: &str,
    prefer_female: bool,
) -> SelectionResult {
    let Some(profile) = languages::profile(code) else {
        return SelectionResult::none("Language not supported");
    };

    if prefer_female {
        if let Some(voice) = catalog
            .iter()
            .find(|v| v.speaks(code) && v.gender == Gender::Female)
        {
            let status = format!("Female {} voice", profile.display_name);
            return SelectionResult::found(voice, status);
        }
    }

    match catalog.iter().find(|v| v.speaks(code)) {
        Some(voice) => SelectionResult::found(
            voice,
            format!("{} {} voice", voice.gender, profile.display_name),
        ),
        None => SelectionResult::none(format!("No voice found for {}", profile.display_name)),
    }
}
