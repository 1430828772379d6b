//! Platform speech engines, driven through their command-line front ends

use anyhow::{Context, Result};
use regex::Regex;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use super::{HostVoice, SpeechHost, SpeechSettings};
use crate::config::SpeechConfig;

/// Pick the engine named in config, or the platform default for "auto"
pub fn detect(config: &SpeechConfig) -> Result<Box<dyn SpeechHost>> {
    let engine = match config.engine.as_str() {
        "auto" => {
            if cfg!(target_os = "macos") {
                "say"
            } else if cfg!(target_os = "windows") {
                "sapi"
            } else {
                "espeak"
            }
        }
        other => other,
    };
    tracing::debug!(engine, "selected speech engine");

    match engine {
        "say" => Ok(Box::new(SayEngine)),
        "espeak" => Ok(Box::new(EspeakEngine::new(&config.espeak_binary))),
        "sapi" => Ok(Box::new(SapiEngine)),
        _ => anyhow::bail!("Unknown speech engine: {engine}. Available: auto, say, espeak, sapi"),
    }
}

// ───────────────────── macOS `say` ─────────────────────

#[derive(Debug)]
pub struct SayEngine;

impl SpeechHost for SayEngine {
    fn name(&self) -> &str {
        "say"
    }

    fn list_voices(&self) -> Result<Vec<HostVoice>> {
        let stdout = run(Command::new("say").args(["-v", "?"]), "say")?;
        Ok(parse_say_voices(&stdout))
    }

    fn speak(&self, text: &str, settings: &SpeechSettings) -> Result<()> {
        let mut cmd = Command::new("say");
        if let Some(voice) = &settings.voice {
            cmd.arg("-v").arg(voice);
        }
        if let Some(rate) = settings.rate {
            cmd.arg("-r").arg(rate.to_string());
        }
        if settings.volume.is_some() {
            tracing::debug!("say has no volume control, ignoring");
        }
        cmd.args(["-f", "-"]);
        run_with_stdin(&mut cmd, "say", text)
    }
}

/// Parse `say -v ?` lines: `Name   locale   # sample sentence`
pub fn parse_say_voices(output: &str) -> Vec<HostVoice> {
    output
        .lines()
        .filter_map(|line| {
            let (head, _) = line.split_once('#')?;
            let (name, locale) = head.trim().rsplit_once(char::is_whitespace)?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(HostVoice {
                id: name.to_string(),
                name: name.to_string(),
                languages: vec![locale.to_string()],
                gender: None,
                age: None,
            })
        })
        .collect()
}

// ───────────────────── eSpeak NG ─────────────────────

#[derive(Debug)]
pub struct EspeakEngine {
    binary: String,
}

impl EspeakEngine {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

impl SpeechHost for EspeakEngine {
    fn name(&self) -> &str {
        "espeak"
    }

    fn list_voices(&self) -> Result<Vec<HostVoice>> {
        let stdout = run(Command::new(&self.binary).arg("--voices"), &self.binary)?;
        Ok(parse_espeak_voices(&stdout))
    }

    fn speak(&self, text: &str, settings: &SpeechSettings) -> Result<()> {
        let mut cmd = Command::new(&self.binary);
        if let Some(voice) = &settings.voice {
            cmd.arg("-v").arg(voice);
        }
        if let Some(rate) = settings.rate {
            cmd.arg("-s").arg(rate.to_string());
        }
        if let Some(volume) = settings.volume {
            let amplitude = (volume * 100.0).round().clamp(0.0, 200.0) as u32;
            cmd.arg("-a").arg(amplitude.to_string());
        }
        cmd.arg("--stdin");
        run_with_stdin(&mut cmd, &self.binary, text)
    }
}

fn other_language_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(\s*([^\s()]+)\s+\d+\s*\)").unwrap())
}

/// Parse `espeak-ng --voices`:
/// `Pty Language Age/Gender VoiceName File Other Languages`
pub fn parse_espeak_voices(output: &str) -> Vec<HostVoice> {
    output
        .lines()
        .filter(|line| !line.trim_start().starts_with("Pty"))
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < 5 {
                return None;
            }
            let (age, gender) = match cols[2].split_once('/') {
                Some((age, gender)) => (age, gender),
                None => ("--", cols[2]),
            };

            let mut languages = vec![cols[1].to_string()];
            // Other languages are "(en 2)" priority pairs, sometimes packed: "(en-us 3)(en 5)"
            let others = cols[5..].join(" ");
            languages.extend(
                other_language_re()
                    .captures_iter(&others)
                    .map(|caps| caps[1].to_string()),
            );

            Some(HostVoice {
                id: cols[4].to_string(),
                name: cols[3].replace('_', " "),
                languages,
                gender: match gender {
                    "M" => Some("Male".into()),
                    "F" => Some("Female".into()),
                    _ => None,
                },
                age: (age != "--").then(|| age.to_string()),
            })
        })
        .collect()
}

// ───────────────────── Windows SAPI ─────────────────────

const SAPI_LIST_SCRIPT: &str = r#"[Console]::OutputEncoding = [Text.Encoding]::UTF8
Add-Type -AssemblyName System.Speech
$s = New-Object System.Speech.Synthesis.SpeechSynthesizer
foreach ($v in $s.GetInstalledVoices()) { $i = $v.VoiceInfo; "{0}|{1}|{2}|{3}" -f $i.Name, $i.Culture.Name, $i.Gender, $i.Age }"#;

const SAPI_SPEAK_SCRIPT: &str = r#"[Console]::InputEncoding = [Text.Encoding]::UTF8
Add-Type -AssemblyName System.Speech
$s = New-Object System.Speech.Synthesis.SpeechSynthesizer
if ($env:LINGOVOX_VOICE) { $s.SelectVoice($env:LINGOVOX_VOICE) }
if ($env:LINGOVOX_RATE) { $s.Rate = [int]$env:LINGOVOX_RATE }
if ($env:LINGOVOX_VOLUME) { $s.Volume = [int]$env:LINGOVOX_VOLUME }
$s.Speak([Console]::In.ReadToEnd())"#;

#[derive(Debug)]
pub struct SapiEngine;

impl SapiEngine {
    fn powershell(script: &str) -> Command {
        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-NonInteractive", "-Command", script]);
        cmd
    }
}

impl SpeechHost for SapiEngine {
    fn name(&self) -> &str {
        "sapi"
    }

    fn list_voices(&self) -> Result<Vec<HostVoice>> {
        let stdout = run(&mut Self::powershell(SAPI_LIST_SCRIPT), "powershell")?;
        Ok(parse_sapi_voices(&stdout))
    }

    fn speak(&self, text: &str, settings: &SpeechSettings) -> Result<()> {
        let mut cmd = Self::powershell(SAPI_SPEAK_SCRIPT);
        cmd.env_remove("LINGOVOX_VOICE")
            .env_remove("LINGOVOX_RATE")
            .env_remove("LINGOVOX_VOLUME");
        if let Some(voice) = &settings.voice {
            cmd.env("LINGOVOX_VOICE", voice);
        }
        if let Some(rate) = settings.rate {
            cmd.env("LINGOVOX_RATE", sapi_rate(rate).to_string());
        }
        if let Some(volume) = settings.volume {
            let volume = (volume * 100.0).round().clamp(0.0, 100.0) as u32;
            cmd.env("LINGOVOX_VOLUME", volume.to_string());
        }
        run_with_stdin(&mut cmd, "powershell", text)
    }
}

/// Map words per minute onto SAPI's -10..=10 rate scale (0 ≈ 180 wpm)
pub fn sapi_rate(wpm: u32) -> i32 {
    ((wpm as i32 - 180) / 10).clamp(-10, 10)
}

/// Parse `Name|Culture|Gender|Age` lines
pub fn parse_sapi_voices(output: &str) -> Vec<HostVoice> {
    fn field(value: Option<&str>) -> Option<String> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != "NotSet")
            .map(str::to_string)
    }

    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.trim().split('|');
            let name = parts.next()?.trim();
            if name.is_empty() {
                return None;
            }
            let culture = field(parts.next());
            Some(HostVoice {
                id: name.to_string(),
                name: name.to_string(),
                languages: culture.into_iter().collect(),
                gender: field(parts.next()),
                age: field(parts.next()),
            })
        })
        .collect()
}

// ───────────────────── Process helpers ─────────────────────

fn run(cmd: &mut Command, engine: &str) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("running {engine} (is it installed?)"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("{engine} failed ({}): {}", output.status, stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run_with_stdin(cmd: &mut Command, engine: &str, text: &str) -> Result<()> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("starting {engine} (is it installed?)"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("sending text to {engine}"))?;
    }

    let output = child
        .wait_with_output()
        .with_context(|| format!("waiting for {engine}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("{engine} failed ({}): {}", output.status, stderr.trim());
    }
    Ok(())
}
