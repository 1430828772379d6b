pub mod ask;
pub mod chat;
pub mod init;
pub mod speak;
pub mod voices;

use anyhow::Result;
use colored::Colorize;
use std::future::Future;
use std::io::{BufRead, BufReader, Read, Write};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::client::{GeminiClient, compose_prompt};
use crate::config::Config;
use crate::languages;
use crate::output;
use crate::voice::SpeechHost;
use crate::voice::playback::speak_file;

/// What came back from a console prompt
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Eof,
    Cancelled,
}

/// Console input with Ctrl-C turned into a cancel signal.
///
/// Lines are read on a plain thread so a pending read never holds up
/// runtime shutdown. Interrupts are queued, so one that lands while no
/// prompt is waiting still cancels the next wait.
pub struct Prompter {
    lines: UnboundedReceiver<std::io::Result<String>>,
    interrupts: UnboundedReceiver<()>,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    /// Read stdin and listen for Ctrl-C. Must be called inside the runtime.
    pub fn new() -> Self {
        Self::with_input(std::io::stdin(), ctrl_c_interrupts())
    }

    pub fn with_input<R>(reader: R, interrupts: UnboundedReceiver<()>) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, lines) = unbounded_channel();
        std::thread::spawn(move || {
            for line in BufReader::new(reader).lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines, interrupts }
    }

    pub async fn ask(&mut self, prompt: &str) -> Result<Input> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        tokio::select! {
            biased;
            Some(()) = self.interrupts.recv() => {
                println!();
                Ok(Input::Cancelled)
            }
            line = self.lines.recv() => Ok(match line {
                Some(line) => Input::Line(line?),
                None => Input::Eof,
            }),
        }
    }

    /// Run `fut` unless Ctrl-C arrives first; `None` when interrupted
    pub async fn interruptible<F: Future>(&mut self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            Some(()) = self.interrupts.recv() => None,
            out = fut => Some(out),
        }
    }
}

fn ctrl_c_interrupts() -> UnboundedReceiver<()> {
    let (tx, rx) = unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Resolve a language menu answer: blank picks `default`, otherwise a known code
pub fn parse_language_choice(answer: &str, default: &str) -> Option<&'static str> {
    let answer = answer.trim().to_lowercase();
    let code = if answer.is_empty() { default } else { answer.as_str() };
    languages::profile(code).map(|p| p.code)
}

pub fn print_language_menu() {
    println!("\nAvailable languages:");
    for p in languages::profiles() {
        println!("{}: {}", p.code, p.display_name);
    }
}

/// Show the menu and ask until a supported code is given; `None` on cancel/EOF
pub async fn select_language(
    prompter: &mut Prompter,
    default: &str,
) -> Result<Option<&'static str>> {
    print_language_menu();
    loop {
        let answer = match prompter
            .ask("\nSelect language code (or press Enter for English): ")
            .await?
        {
            Input::Line(answer) => answer,
            Input::Eof | Input::Cancelled => return Ok(None),
        };
        match parse_language_choice(&answer, default) {
            Some(code) => return Ok(Some(code)),
            None => println!("{}", "Invalid language code. Please try again.".yellow()),
        }
    }
}

/// Name of the language the model is asked to reply in
pub fn reply_language(code: &str, model_language: Option<&str>) -> String {
    match model_language {
        Some(lang) => lang.to_string(),
        None => languages::profile(code)
            .map(|p| p.display_name)
            .unwrap_or(code)
            .to_string(),
    }
}

/// One prompt cycle: generate → save → speak. Returns the raw response.
pub async fn answer_and_speak(
    client: &GeminiClient,
    host: Option<&dyn SpeechHost>,
    config: &Config,
    prompt: &str,
    code: &str,
    model_language: Option<&str>,
) -> Result<Option<String>> {
    let language = reply_language(code, model_language);
    let full_prompt = compose_prompt(&config.model.preamble, prompt, &language);

    let response = client.generate(&full_prompt).await?;
    output::save_response(response.as_deref(), &config.speech.output_file)?;

    if let (Some(_), Some(host)) = (&response, host) {
        speak_file(
            host,
            code,
            &config.speech.output_file,
            config.speech.prefer_female,
            config.speech.volume,
        );
    }
    Ok(response)
}
