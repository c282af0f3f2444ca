//! Soup sandbox driver.
//!
//! Builds a chamber from a preset and shows it one tick at a time: print the
//! frame, wait for Enter, step. With `--ticks N` it runs N ticks without
//! waiting and prints every frame.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use soup_engine::{Chamber, ChamberConfig, Preset};
use soup_render::{render, RenderConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// All channels zero
    Empty,
    /// Uniform noise in every driven channel
    Random,
    /// A bed of soil at the bottom
    SoilBed,
    /// Soil bed, a band of water, and one seed
    Sandbox,
}

#[derive(Debug, Parser)]
#[command(name = "soup")]
#[command(version)]
#[command(about = "Step through the Soup sandbox one tick at a time")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 32)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 16)]
    height: u32,

    /// Initial layout
    #[arg(long, value_enum, default_value_t = PresetArg::Sandbox)]
    preset: PresetArg,

    /// Seed for the random presets
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Soil rows for the soil-bed preset (default: a quarter of the height)
    #[arg(long)]
    soil_depth: Option<u32>,

    /// Run this many ticks without waiting for input
    #[arg(long)]
    ticks: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Mean density below which a cell is drawn blank
    #[arg(long, default_value_t = 0.2)]
    threshold: f32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn preset(&self) -> Preset {
        match self.preset {
            PresetArg::Empty => Preset::Empty,
            PresetArg::Random => Preset::Random { seed: self.seed },
            PresetArg::SoilBed => Preset::SoilBed {
                depth: self.soil_depth.unwrap_or(self.height / 4),
            },
            PresetArg::Sandbox => Preset::Sandbox { seed: self.seed },
        }
    }

    fn chamber_config(&self) -> ChamberConfig {
        ChamberConfig {
            width: self.width,
            height: self.height,
            preset: self.preset(),
            ..ChamberConfig::default()
        }
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            threshold: self.threshold,
            color: !self.plain,
            ..RenderConfig::default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn print_frame(out: &mut impl Write, chamber: &Chamber, config: &RenderConfig) -> Result<()> {
    writeln!(out, "Tick {}", chamber.current_tick())?;
    writeln!(out, "{}", render(chamber.grid(), config))?;
    out.flush()?;
    Ok(())
}

fn step(chamber: &mut Chamber) {
    chamber.step();
    let metrics = chamber.last_metrics();
    debug!(
        tick = chamber.current_tick().0,
        total_us = metrics.total_us,
        "stepped"
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut chamber =
        Chamber::from_config(cli.chamber_config()).context("failed to build chamber")?;
    let render_config = cli.render_config();
    info!(
        width = cli.width,
        height = cli.height,
        preset = cli.preset().name(),
        "chamber ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(ticks) = cli.ticks {
        print_frame(&mut out, &chamber, &render_config)?;
        for _ in 0..ticks {
            step(&mut chamber);
            print_frame(&mut out, &chamber, &render_config)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print_frame(&mut out, &chamber, &render_config)?;
        line.clear();
        if input.read_line(&mut line).context("failed to read stdin")? == 0 {
            break;
        }
        step(&mut chamber);
    }
    info!(ticks = chamber.current_tick().0, "done");
    Ok(())
}
