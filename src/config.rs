//! Command line configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::ArgAction;
use clap::Parser;

use crate::coord::Coord;
use crate::game::DEFAULT_CADENCE;
use crate::grid::Grid;
use crate::patterns;
use crate::patterns::Pattern;
use crate::render::Glyphs;

/// Conway's Game of Life in the terminal
#[derive(Debug, Parser)]
#[command(name = "lifeview", version)]
pub struct Cli {
    /// Grid width, in cells
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Grid height, in cells
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Built-in seed, placed in the middle of the grid
    #[arg(short, long, value_enum, default_value_t = Pattern::Blinker)]
    pub pattern: Pattern,

    /// Plain text seed file, overrides `--pattern`
    #[arg(long = "seed-file", value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Milliseconds between generations while playing
    #[arg(
        long = "interval-ms",
        default_value_t = DEFAULT_CADENCE.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Glyph for live cells
    #[arg(long, default_value_t = 'O')]
    pub alive: char,

    /// Glyph for dead cells
    #[arg(long, default_value_t = 'X')]
    pub dead: char,

    /// Start playing right away
    #[arg(long)]
    pub play: bool,

    /// Increase verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file. Nothing is logged otherwise.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            alive: self.alive,
            dead: self.dead,
        }
    }

    /// Build the starting grid: the seed, centered on a `width` by `height` grid
    pub fn grid(&self) -> anyhow::Result<Grid> {
        let seed = match &self.seed_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read seed file {}", path.display()))?;

                patterns::parse_seed(&text)
                    .with_context(|| format!("Failed to parse seed file {}", path.display()))?
            }
            None => self.pattern.seed(),
        };

        let (width, height) = (self.width as usize, self.height as usize);
        let at = Coord::new(
            width.saturating_sub(seed.width()) / 2,
            height.saturating_sub(seed.height()) / 2,
        );

        Grid::with_pattern(width, height, &seed, at).with_context(|| {
            format!(
                "{}x{} seed does not fit on a {width}x{height} grid",
                seed.width(),
                seed.height()
            )
        })
    }
}
