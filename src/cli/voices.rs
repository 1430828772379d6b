use anyhow::Result;
use colored::Colorize;

use super::{Input, Prompter};
use crate::config::Config;
use crate::discovery::{self, DEFAULT_TEST_TEXT};
use crate::voice::host;

/// Voice discovery tool: list, dump, show install help, optionally audition
pub async fn run(config: &Config, test: bool) -> Result<()> {
    println!("{}", "Voice Discovery Tool".bold());
    println!("===================");

    let host = host::detect(&config.speech)?;
    let records = discovery::discover(host.as_ref(), &config.voices.dump_file)?;

    println!("\n=== Installing Additional Voices ===\n");
    println!("{}", discovery::install_instructions(&discovery::system_name()));

    if !test || records.is_empty() {
        return Ok(());
    }

    let mut prompter = Prompter::new();
    println!("\nWould you like to test any of the voices?");
    let Input::Line(answer) = prompter
        .ask("Enter voice number to test, or press Enter to skip: ")
        .await?
    else {
        return Ok(());
    };
    let Some(record) = discovery::pick_record(&records, &answer) else {
        return Ok(());
    };

    let text = match prompter
        .ask("Enter test text (or press Enter for default message): ")
        .await?
    {
        Input::Line(text) if !text.trim().is_empty() => text,
        Input::Line(_) => DEFAULT_TEST_TEXT.to_string(),
        Input::Eof | Input::Cancelled => return Ok(()),
    };

    if let Err(e) = discovery::test_voice(host.as_ref(), &record.id, &text) {
        tracing::error!("voice test failed: {e:#}");
        eprintln!("{}", format!("Error during speech synthesis: {e:#}").red());
    }
    Ok(())
}
