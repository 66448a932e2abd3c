//! # Tumble Runtime
//!
//! Headless driver for a [`tumble::SkillsBoard`]: loads a skill set, drops
//! the badges into a virtual area of the given size and steps a fixed number
//! of 60 Hz frames, logging progress along the way. With `--watch` the
//! skill-set file is reloaded whenever it changes on disk.

mod app;
mod watcher;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command line options for the runtime.
#[derive(Parser, Debug)]
#[command(name = "tumble", version, about)]
pub struct Args {
    /// Skill-set JSON document. A built-in list is used when omitted.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Area width in pixels, unless the document sets one.
    #[arg(long, default_value_t = 900.0)]
    pub width: f64,

    /// Area height in pixels, unless the document sets one.
    #[arg(long, default_value_t = 650.0)]
    pub height: f64,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    pub frames: usize,

    /// Seed for the spawn jitter.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretend the host cannot draw full badges.
    #[arg(long)]
    pub no_webgl: bool,

    /// Throw the first badge halfway through the run, given as `dx,dy`.
    #[arg(long, value_parser = parse_flick, allow_hyphen_values = true)]
    pub flick: Option<(f64, f64)>,

    /// Reload the skill-set file when it changes.
    #[arg(long, requires = "scene")]
    pub watch: bool,
}

fn parse_flick(s: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `dx,dy`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number `{v}`: {e}"))
    };
    Ok((parse(dx)?, parse(dy)?))
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::run(&args)
}
