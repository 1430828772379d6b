//! Voice discovery — list, dump and audition host voices

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::voice::{HostVoice, SpeechHost, SpeechSettings};

pub const DEFAULT_TEST_TEXT: &str = "This is a test of the text to speech system.";

/// One entry of `available_voices.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceRecord {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub languages: Vec<String>,
    pub age: String,
    pub gender: String,
    pub system: String,
}

impl VoiceRecord {
    fn new(index: usize, voice: &HostVoice, system: &str) -> Self {
        Self {
            index,
            id: voice.id.clone(),
            name: voice.name.clone(),
            languages: voice.languages.clone(),
            age: voice.age.clone().unwrap_or_else(|| "Unknown".into()),
            gender: voice.gender.clone().unwrap_or_else(|| "Unknown".into()),
            system: system.to_string(),
        }
    }
}

/// OS name in the form users know it: Windows, Darwin, Linux
pub fn system_name() -> String {
    match std::env::consts::OS {
        "windows" => "Windows".into(),
        "macos" => "Darwin".into(),
        "linux" => "Linux".into(),
        other => other.to_string(),
    }
}

pub fn voice_records(voices: &[HostVoice], system: &str) -> Vec<VoiceRecord> {
    voices
        .iter()
        .enumerate()
        .map(|(i, v)| VoiceRecord::new(i, v, system))
        .collect()
}

/// Print every host voice and save the list as JSON
pub fn discover(host: &dyn SpeechHost, dump_file: &Path) -> Result<Vec<VoiceRecord>> {
    let voices = host
        .list_voices()
        .with_context(|| format!("listing voices from {}", host.name()))?;
    let records = voice_records(&voices, &system_name());

    println!("\n=== Available Voice Details ===\n");
    for r in &records {
        println!("Voice {}:", r.index);
        println!("  Name: {}", r.name);
        println!("  ID: {}", r.id);
        println!("  Languages: {}", r.languages.join(", "));
        println!("  Age: {}", r.age);
        println!("  Gender: {}", r.gender);
        println!();
    }

    write_dump(&records, dump_file)?;

    println!("\nTotal voices found: {}", records.len());
    println!(
        "Voice information has been saved to '{}'",
        dump_file.display()
    );
    Ok(records)
}

/// Write records as a 2-space-indented JSON array
pub fn write_dump(records: &[VoiceRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Speak `text` with the voice whose id is `voice_id`; false when it is not installed
pub fn test_voice(host: &dyn SpeechHost, voice_id: &str, text: &str) -> Result<bool> {
    let voices = host.list_voices()?;
    let Some(voice) = voices.iter().find(|v| v.id == voice_id) else {
        println!("Voice ID {voice_id} not found.");
        return Ok(false);
    };

    println!("\nTesting voice: {}", voice.name);
    let settings = SpeechSettings {
        voice: Some(voice.id.clone()),
        ..SpeechSettings::default()
    };
    host.speak(text, &settings)?;
    Ok(true)
}

/// Map a 1-based menu answer onto a record; anything else means skip
pub fn pick_record<'a>(records: &'a [VoiceRecord], answer: &str) -> Option<&'a VoiceRecord> {
    let n: usize = answer.trim().parse().ok()?;
    if n == 0 {
        return None;
    }
    records.get(n - 1)
}

/// How to install more voices on the given system
pub fn install_instructions(system: &str) -> &'static str {
    match system {
        "Windows" => {
            "To install additional voices on Windows:
1. Open Windows Settings
2. Go to Time & Language > Language & Region
3. Click 'Add a language'
4. Select desired languages and make sure to check 'Text-to-Speech' during installation
5. Wait for the download and installation to complete

Alternatively, you can:
1. Control Panel > Speech Recognition > Text to Speech
2. Install additional TTS engines like:
   - IVONA voices
   - Microsoft Speech Platform
   - CereProc voices"
        }
        "Darwin" => {
            "To install additional voices on macOS:
1. Apple menu > System Settings
2. Click 'Accessibility'
3. Click 'Spoken Content'
4. Click 'System Voice'
5. Select 'Customize'
6. Choose additional voices to download"
        }
        "Linux" => {
            "To install additional voices on Linux:
1. Install eSpeak NG and its voice data:
   sudo apt-get install espeak-ng espeak-ng-data

2. Install mbrola voices:
   sudo apt-get install mbrola mbrola-*

3. Consider installing other TTS engines:
   - festival with festvox-* voices
   - RHVoice
   - SVOX Pico"
        }
        _ => "No installation instructions for this system.",
    }
}
