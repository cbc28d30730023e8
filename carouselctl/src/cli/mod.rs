pub mod commands;
pub mod render;

use std::{path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use carousel_config::util::parse_duration;
use carousel_core::model::{SlideSet, Step};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "carouselctl",
    about = "Inspect and drive circular carousel navigation",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the presentable window around a slide
    Window(WindowArgs),
    /// Print the slides visited by a go-to
    Path(PathArgs),
    /// Run a scripted session on a live carousel and print every snapshot
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SlideArgs {
    /// Comma-separated slide keys
    #[arg(long, value_delimiter = ',', required_unless_present = "count")]
    pub slides: Vec<String>,
    /// Generate this many slides named slide-0, slide-1, ...
    #[arg(long, conflicts_with = "slides")]
    pub count: Option<usize>,
}

/// Upper bound for `--count` when slides are generated.
pub const MAX_GENERATED_SLIDES: usize = 100_000;

impl SlideArgs {
    pub fn build(&self) -> anyhow::Result<SlideSet<()>> {
        let set = match self.count {
            Some(count) => {
                anyhow::ensure!(
                    count <= MAX_GENERATED_SLIDES,
                    "--count {count} exceeds the limit of {MAX_GENERATED_SLIDES} generated slides"
                );
                SlideSet::from_keys((0..count).map(|i| format!("slide-{i}")))
            }
            None => SlideSet::from_keys(self.slides.iter().cloned()),
        };
        set.context("invalid slide list")
    }
}

#[derive(Args, Debug)]
pub struct WindowArgs {
    #[command(flatten)]
    pub slides: SlideArgs,
    /// Index of the current slide (wrapped onto the ring)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub current: i64,
    /// Neighbours per side; defaults to the configured radius
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<i64>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Number of slides on the ring
    #[arg(long)]
    pub count: usize,
    #[arg(long, default_value_t = 0)]
    pub from: usize,
    /// Destination; any integer, wrapped onto the ring
    #[arg(long, allow_negative_numbers = true)]
    pub to: i64,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub slides: SlideArgs,
    /// Comma-separated events: goto:<n>, clear, next, prev
    #[arg(long, value_delimiter = ',', required = true)]
    pub script: Vec<ScriptEvent>,
    /// Delay between go-to hops, e.g. 200ms
    #[arg(long, value_parser = parse_interval)]
    pub interval: Option<Duration>,
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<i64>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit one JSON object per snapshot
    #[arg(long)]
    pub json: bool,
}

fn parse_interval(raw: &str) -> Result<Duration, String> {
    parse_duration(raw).map_err(|err| err.to_string())
}

/// One scripted stimulus for `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    Goto(i64),
    Clear,
    Move(Step),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptEventError {
    #[error("unknown script event '{0}' (expected goto:<n>, clear, next or prev)")]
    Unknown(String),
    #[error("invalid go-to target '{0}'")]
    InvalidTarget(String),
}

impl FromStr for ScriptEvent {
    type Err = ScriptEventError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Some(target) = trimmed.strip_prefix("goto:") {
            return target
                .trim()
                .parse()
                .map(ScriptEvent::Goto)
                .map_err(|_| ScriptEventError::InvalidTarget(target.to_string()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "next" => Ok(ScriptEvent::Move(Step::Next)),
            "prev" | "previous" => Ok(ScriptEvent::Move(Step::Previous)),
            "clear" => Ok(ScriptEvent::Clear),
            _ => Err(ScriptEventError::Unknown(trimmed.to_string())),
        }
    }
}
