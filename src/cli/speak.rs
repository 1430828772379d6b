use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::voice::host;
use crate::voice::playback::speak_file;

/// Speak a saved response file in the given language
pub fn run(config: &Config, code: &str, file: Option<&Path>) -> Result<()> {
    let host = host::detect(&config.speech)?;
    let path = file.unwrap_or(config.speech.output_file.as_path());
    let code = code.trim().to_lowercase();

    speak_file(
        host.as_ref(),
        &code,
        path,
        config.speech.prefer_female,
        config.speech.volume,
    );
    Ok(())
}
