use anyhow::Result;

use super::answer_and_speak;
use crate::auth::AuthStore;
use crate::client::GeminiClient;
use crate::config::Config;
use crate::languages;
use crate::voice::host;

/// Answer a single prompt and exit
pub async fn run(
    config: &Config,
    message: &str,
    code: &str,
    speak: bool,
    model_language: Option<&str>,
) -> Result<()> {
    let code = code.trim().to_lowercase();
    if languages::profile(&code).is_none() {
        anyhow::bail!("Unsupported language code: {code}");
    }

    let auth = AuthStore::load()?;
    let client = GeminiClient::new(auth.gemini_api_key()?, &config.model.name)?;
    let host = if speak {
        Some(host::detect(&config.speech)?)
    } else {
        None
    };

    let response = answer_and_speak(
        &client,
        host.as_deref(),
        config,
        message,
        &code,
        model_language,
    )
    .await?;

    if let Some(text) = response {
        println!("{text}");
    }
    Ok(())
}
