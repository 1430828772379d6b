use anyhow::Result;
use colored::Colorize;

use super::{Input, Prompter, answer_and_speak, select_language};
use crate::auth::AuthStore;
use crate::client::GeminiClient;
use crate::config::Config;
use crate::languages;
use crate::voice::{SpeechHost, host};

/// How an interactive session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User typed 0
    Exit,
    /// Input closed
    Eof,
    /// Ctrl-C at a prompt or while an answer was being produced
    Cancelled,
}

/// Interactive prompt → answer → speech loop
pub async fn run(config: &Config, model_language: Option<&str>) -> Result<()> {
    let auth = AuthStore::load()?;
    let client = GeminiClient::new(auth.gemini_api_key()?, &config.model.name)?;
    let host = host::detect(&config.speech)?;

    let names: Vec<&str> = languages::profiles().iter().map(|p| p.display_name).collect();
    println!("\n{}", "Welcome to the Multilingual AI Assistant!".bold());
    println!("Supported languages: {}", names.join(", "));

    let mut prompter = Prompter::new();
    let end = session(&client, host.as_ref(), config, &mut prompter, model_language).await?;
    tracing::debug!(?end, "chat session finished");

    println!("\n{}", "Thank you for using the Multilingual AI Assistant!".dimmed());
    Ok(())
}

/// Prompt until the user exits, input closes or Ctrl-C is pressed
pub async fn session(
    client: &GeminiClient,
    host: &dyn SpeechHost,
    config: &Config,
    prompter: &mut Prompter,
    model_language: Option<&str>,
) -> Result<SessionEnd> {
    loop {
        let prompt = match prompter.ask("\nEnter your prompt (0 to exit): ").await? {
            Input::Line(line) => line,
            Input::Eof => return Ok(SessionEnd::Eof),
            Input::Cancelled => return Ok(cancelled()),
        };

        let prompt = prompt.trim();
        if prompt == "0" {
            println!("Exiting...");
            return Ok(SessionEnd::Exit);
        }
        if prompt.is_empty() {
            continue;
        }

        let Some(code) = select_language(prompter, &config.speech.default_language).await?
        else {
            return Ok(cancelled());
        };

        let cycle = answer_and_speak(client, Some(host), config, prompt, code, model_language);
        match prompter.interruptible(cycle).await {
            None => return Ok(cancelled()),
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                tracing::error!("prompt failed: {e:#}");
                eprintln!("{}", format!("Error: {e:#}").red());
            }
        }
    }
}

fn cancelled() -> SessionEnd {
    println!("{}", "\nOperation cancelled by user".dimmed());
    SessionEnd::Cancelled
}
