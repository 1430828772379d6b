use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Strip markdown emphasis and collapse whitespace for speech
pub fn clean_text(text: &str) -> String {
    static WS_RE: OnceLock<Regex> = OnceLock::new();
    let ws_re = WS_RE.get_or_init(|| Regex::new(r"\s+").unwrap());

    let text = text.replace('*', "");
    ws_re.replace_all(&text, " ").trim().to_string()
}

/// Write the cleaned response to `path`
pub fn save_response(response: Option<&str>, path: &Path) -> Result<()> {
    let Some(response) = response else {
        println!("No response was generated.");
        return Ok(());
    };

    let cleaned = clean_text(response);
    std::fs::write(path, format!("{cleaned}\n"))
        .with_context(|| format!("writing response to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = cleaned.len(), "response saved");
    println!("Content has been saved to {}", path.display());
    Ok(())
}

/// Read a previously saved response
pub fn read_output_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("No output file found: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
