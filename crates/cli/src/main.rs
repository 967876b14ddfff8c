#![deny(warnings)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use talkheal_core::config::{EngineConfig, StdEnv};
use talkheal_core::emotion::TypingMetadata;
use talkheal_core::profile::{CommunicationStyle, ProfileUpdate};
use talkheal_core::trend::TrendError;
use talkheal_core::util::{Clock, SystemClock};
use talkheal_core::{EmotionEngine, Snapshot};
use tracing_subscriber::EnvFilter;

/// A gap this long between prompt and submitted line counts as one pause.
const PAUSE_THRESHOLD: Duration = Duration::from_secs(2);

#[derive(Parser, Debug)]
#[command(name = "talkheal")]
#[command(about = "Emotion-aware companion chat with crisis safety responses")]
struct Args {
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session: one message per line, EOF ends the session.
    Chat {
        /// Session snapshot, loaded if present and written on exit.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        #[arg(long)]
        style: Option<CommunicationStyle>,

        #[arg(long)]
        culture: Option<String>,
    },
    /// Classify a single message and print the state and reply.
    Classify {
        text: String,

        /// Typing behaviour as JSON, e.g. `{"typing_speed": 4.5, "backspace_count": 7}`.
        #[arg(long)]
        typing: Option<String>,
    },
    /// Trend report over a saved session.
    Analyze {
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        days: Option<u32>,

        #[arg(long)]
        trend_mode: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Chat {
            snapshot,
            style,
            culture,
        } => run_chat(snapshot.as_deref(), style, culture),
        Command::Classify { text, typing } => run_classify(&text, typing.as_deref()),
        Command::Analyze {
            snapshot,
            days,
            trend_mode,
        } => {
            let config = EngineConfig::resolve(trend_mode, days.filter(|d| *d > 0), &StdEnv)?;
            tracing::info!(
                trend_mode = ?config.trend_mode,
                window_days = config.default_window_days,
                "config loaded"
            );
            run_analyze(config, &snapshot, days)
        }
    }
}

fn run_chat(
    snapshot: Option<&Path>,
    style: Option<CommunicationStyle>,
    culture: Option<String>,
) -> anyhow::Result<()> {
    let config = EngineConfig::default();
    let mut engine = match snapshot.filter(|p| p.exists()) {
        Some(path) => {
            EmotionEngine::from_snapshot(read_snapshot(path)?, config, SystemClock)
        }
        None => EmotionEngine::new(config),
    };

    if style.is_some() || culture.is_some() {
        engine.update_profile(ProfileUpdate {
            communication_style: style,
            cultural_background: culture,
            ..Default::default()
        });
    }

    let stdin = std::io::stdin();
    // Piped input carries no keystroke timing.
    let track_typing = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    let mut prompt_at = Instant::now();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let text = line.trim();
        if !text.is_empty() {
            let typing =
                track_typing.then(|| typing_metadata(text.chars().count(), prompt_at.elapsed()));
            let state = engine.classify(text, typing.as_ref());
            let reply = engine.respond(&state, text);
            writeln!(stdout, "\n{reply}\n")?;
            for rec in engine.recommend(&state) {
                writeln!(stdout, "  - {rec}")?;
            }
            writeln!(stdout)?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
        prompt_at = Instant::now();
    }
    writeln!(stdout)?;

    let summary = engine.summary();
    tracing::info!(
        total = summary.total_states,
        today = summary.today_states,
        "session ended"
    );

    if let Some(path) = snapshot {
        let json = engine.export().to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        tracing::info!(path = %path.display(), "snapshot saved");
    }
    Ok(())
}

/// Typing metadata for a line of `chars` characters submitted `elapsed` after the prompt.
fn typing_metadata(chars: usize, elapsed: Duration) -> TypingMetadata {
    let secs = elapsed.as_secs_f64();
    TypingMetadata {
        speed: (secs > 0.0).then(|| chars as f64 / secs),
        backspace_count: None,
        pause_count: Some(u32::from(elapsed > PAUSE_THRESHOLD)),
    }
}

/// Invalid JSON is treated like absent metadata.
fn parse_typing(raw: &str) -> TypingMetadata {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => TypingMetadata::from_json(&value),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed --typing");
            TypingMetadata::default()
        }
    }
}

fn run_classify(text: &str, typing: Option<&str>) -> anyhow::Result<()> {
    let mut engine = EmotionEngine::new(EngineConfig::default());
    let typing = typing.map(parse_typing);
    let state = engine.classify(text, typing.as_ref());
    println!("{}", serde_json::to_string_pretty(&state)?);
    println!("\n{}", engine.respond(&state, text));
    Ok(())
}

fn run_analyze(config: EngineConfig, path: &Path, days: Option<u32>) -> anyhow::Result<()> {
    let engine = EmotionEngine::from_snapshot(read_snapshot(path)?, config, SystemClock);
    println!("{}", render_analysis(&engine, days)?);
    Ok(())
}

/// JSON report, or the informational line when the window holds no data.
fn render_analysis<C: Clock>(
    engine: &EmotionEngine<C>,
    days: Option<u32>,
) -> anyhow::Result<String> {
    let window_days = days.unwrap_or(engine.config().default_window_days);
    match engine.analyze(window_days) {
        Ok(report) => Ok(serde_json::to_string_pretty(&report)?),
        Err(e @ (TrendError::NoData { .. } | TrendError::NoHistory)) => Ok(e.to_string()),
    }
}

fn read_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    Snapshot::from_json(&json).with_context(|| format!("invalid snapshot {}", path.display()))
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
