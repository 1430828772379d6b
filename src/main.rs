use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lingovox::{cli, config, languages, logging};

#[derive(Parser)]
#[command(name = "lingovox", version, about = "Ask Gemini, hear the answer in your language 🔊")]
struct Cli {
    /// Config file (default: ~/.config/lingovox/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language the model should answer in (default: the chosen speech language)
    #[arg(long, global = true)]
    model_language: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt loop
    Chat,
    /// Answer a single prompt
    Ask {
        /// Prompt text
        #[arg(short, long)]
        message: String,
        /// Speech language code
        #[arg(short, long, default_value = languages::DEFAULT_CODE)]
        lang: String,
        /// Save the answer without speaking it
        #[arg(long)]
        no_speak: bool,
    },
    /// Speak a saved response file
    Speak {
        #[arg(short, long, default_value = languages::DEFAULT_CODE)]
        lang: String,
        /// Response file (default: speech.output_file)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List installed voices and save them to JSON
    Voices {
        /// Skip the interactive voice test
        #[arg(long)]
        no_test: bool,
    },
    /// Show supported languages
    Languages,
    /// Guided first-run setup
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load().unwrap_or_default(),
    };

    // Init logging
    let _ = logging::init(&config.logging);

    let model_language = cli.model_language.as_deref();

    match cli.command {
        Some(Commands::Chat) | None => cli::chat::run(&config, model_language).await,
        Some(Commands::Ask {
            message,
            lang,
            no_speak,
        }) => cli::ask::run(&config, &message, &lang, !no_speak, model_language).await,
        Some(Commands::Speak { lang, file }) => cli::speak::run(&config, &lang, file.as_deref()),
        Some(Commands::Voices { no_test }) => cli::voices::run(&config, !no_test).await,
        Some(Commands::Languages) => {
            for p in languages::profiles() {
                println!("{:<4}{:<16}{} wpm", p.code, p.display_name, p.speech_rate);
            }
            Ok(())
        }
        Some(Commands::Init) => cli::init::run(),
    }
}
