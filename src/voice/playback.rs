use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::{SelectionResult, SpeechHost, SpeechSettings, build_catalog, select_voice};
use crate::languages;
use crate::output;

/// Play `text` with the selected voice, or the engine default when none was found
pub fn play(
    host: &dyn SpeechHost,
    selection: &SelectionResult,
    rate: u32,
    volume: f32,
    text: &str,
) -> Result<()> {
    let settings = match &selection.voice_id {
        Some(id) => SpeechSettings {
            voice: Some(id.clone()),
            rate: Some(rate),
            volume: Some(volume),
        },
        None => {
            println!("Using default voice as fallback");
            SpeechSettings::default()
        }
    };

    tracing::info!(
        engine = host.name(),
        voice = settings.voice.as_deref().unwrap_or("default"),
        chars = text.len(),
        "speaking"
    );
    host.speak(text, &settings)
}

/// Full speech cycle: catalog → selection → read file → play.
///
/// Engine failures are reported here and swallowed so an interactive
/// session can carry on with the next prompt.
pub fn speak_file(
    host: &dyn SpeechHost,
    code: &str,
    path: &Path,
    prefer_female: bool,
    volume: f32,
) -> Option<SelectionResult> {
    match try_speak_file(host, code, path, prefer_female, volume) {
        Ok(selection) => Some(selection),
        Err(e) => {
            tracing::error!("speech failed: {e:#}");
            eprintln!("{}", format!("Error during speech synthesis: {e:#}").red());
            None
        }
    }
}

fn try_speak_file(
    host: &dyn SpeechHost,
    code: &str,
    path: &Path,
    prefer_female: bool,
    volume: f32,
) -> Result<SelectionResult> {
    let catalog = build_catalog(host)?;
    let selection = select_voice(&catalog, code, prefer_female);
    println!("\n{}", selection.status);

    let rate = languages::profile(code)
        .unwrap_or_else(languages::default_profile)
        .speech_rate;

    let content = output::read_output_file(path)?;
    play(host, &selection, rate, volume, &content)?;
    Ok(selection)
}
