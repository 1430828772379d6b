use anyhow::Result;
use colored::Colorize;

use crate::auth::AuthStore;
use crate::config::Config;
use crate::voice::host;

/// Guided first-run setup
pub fn run() -> Result<()> {
    eprintln!("{}", "Welcome to lingovox\n".bold());

    // 1. Gemini credentials
    eprintln!("{}", "1. Gemini API key".bold());
    match AuthStore::load().and_then(|a| a.gemini_api_key()) {
        Ok(_) => eprintln!("   {} API key found", "✓".green()),
        Err(_) => {
            eprintln!(
                "   {} No API key found — set GEMINI_API_KEY or add it to {}",
                "⚠".yellow(),
                AuthStore::credentials_path().display()
            );
            eprintln!("   → Get a key at https://aistudio.google.com/apikey");
        }
    }

    // 2. Speech engine
    eprintln!("\n{}", "2. Speech engine".bold());
    let config = Config::load().unwrap_or_default();
    match host::detect(&config.speech).and_then(|h| {
        let count = h.list_voices()?.len();
        Ok((h.name().to_string(), count))
    }) {
        Ok((engine, count)) => {
            eprintln!("   {} {engine}: {count} voices installed", "✓".green());
            if count == 0 {
                eprintln!("   Run `lingovox voices` for install instructions");
            }
        }
        Err(e) => eprintln!("   {} {e:#}", "⚠".yellow()),
    }

    // 3. Config file
    let config_path = Config::default_path();
    if !config_path.exists() {
        Config::default().save()?;
        eprintln!(
            "\n{} Config written to {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        eprintln!(
            "\n{} Config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    }

    eprintln!("\n{}", "Ready! Run `lingovox chat` to start.".green().bold());
    Ok(())
}
