#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use bento_core::animation::FrameClock;
use bento_core::event::PointerEvent;
use bento_core::geometry::Rect;
use bento_widgets::{InteractionSurface, MotionMode, RowFrame, ScrollReveal, SurfaceConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::canvas;
use crate::error::{DemoError, Result};
use crate::logging;
use crate::script::{self, Step, Target};

#[derive(Debug, Parser)]
#[command(
    name = "bento-demo",
    about = "Play pointer scripts against a Bento panel row",
    version
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a pointer script against the panel row.
    Run(RunArgs),

    /// Scroll through the showcase sections.
    Scroll(ScrollArgs),

    /// Print a configuration as TOML.
    Config(SourceArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Works,
    Services,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ascii,
    Json,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// TOML (or .json) configuration file.
    #[arg(long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Built-in configuration.
    #[arg(long, value_enum, default_value_t = Preset::Works)]
    pub preset: Preset,

    /// Render without animation.
    #[arg(long = "static")]
    pub static_motion: bool,
}

impl SourceArgs {
    pub fn load(&self) -> Result<SurfaceConfig> {
        let mut config = match &self.config {
            Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
                SurfaceConfig::from_json_file(path)?
            }
            Some(path) => SurfaceConfig::from_toml_file(path)?,
            None => match self.preset {
                Preset::Works => SurfaceConfig::works(),
                Preset::Services => SurfaceConfig::services(),
            },
        };
        if self.static_motion {
            config.options.motion = MotionMode::Static;
        }
        Ok(config)
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pointer script; a sweep across every panel when omitted.
    #[arg(long)]
    pub script: Option<PathBuf>,

    #[arg(long, default_value_t = 80)]
    pub width: u16,

    #[arg(long, default_value_t = 16)]
    pub height: u16,

    /// Frames per second used to turn waits into ticks.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    pub format: Format,

    /// Sleep between frames and tick by measured wall time.
    #[arg(long)]
    pub realtime: bool,
}

#[derive(Debug, Args)]
pub struct ScrollArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long, default_value_t = 0.0)]
    pub from: f32,

    #[arg(long, default_value_t = 4000.0)]
    pub to: f32,

    #[arg(long, default_value_t = 250.0)]
    pub step: f32,

    #[arg(long, default_value_t = 1000.0)]
    pub viewport: f32,

    /// Time spent at each scroll position, in milliseconds.
    #[arg(long, default_value_t = 250)]
    pub dwell_ms: u64,

    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    pub format: Format,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json, cli.verbose)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run_script(&args, out),
        Commands::Scroll(args) => run_scroll(&args, out),
        Commands::Config(source) => {
            let config = source.load()?;
            out.write_all(config.to_toml_string()?.as_bytes())?;
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RowSnapshot<'a> {
    t_ms: u128,
    frame: &'a RowFrame,
}

struct Player<'a> {
    surface: InteractionSurface,
    sections: ScrollReveal,
    area: Rect,
    frame_dt: Duration,
    elapsed: Duration,
    format: Format,
    clock: Option<FrameClock>,
    out: &'a mut dyn Write,
}

impl Player<'_> {
    fn step(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Enter(Target::Rank(rank)) => {
                self.surface.pointer_enter(*rank);
            }
            Step::Enter(Target::Key(key)) => {
                // Unknown keys clear the active panel.
                self.surface.pointer_enter_key(key);
            }
            Step::Leave => {
                self.surface.pointer_leave_row();
            }
            Step::Tap(target) => {
                if let Some(rank) = self.resolve(target) {
                    self.surface.tap(rank);
                }
            }
            Step::Move { x, y } => {
                self.surface.handle_pointer(PointerEvent::moved(*x, *y));
            }
            Step::Touch { x, y } => {
                self.surface.handle_pointer(PointerEvent::tap(*x, *y));
            }
            Step::Wait(duration) => self.wait(*duration),
            Step::Snapshot => self.snapshot()?,
            Step::Scroll { offset, viewport } => self.sections.set_scroll(*offset, *viewport),
        }
        Ok(())
    }

    fn resolve(&self, target: &Target) -> Option<usize> {
        match target {
            Target::Rank(rank) => Some(*rank),
            Target::Key(key) => {
                let rank = self.surface.model().rank_of(key);
                if rank.is_none() {
                    tracing::warn!(target: "bento.demo", key = key.as_str(), "unknown panel key");
                }
                rank
            }
        }
    }

    fn wait(&mut self, duration: Duration) {
        let mut left = duration;
        while !left.is_zero() {
            let planned = left.min(self.frame_dt);
            let dt = match &mut self.clock {
                Some(clock) => {
                    std::thread::sleep(planned);
                    clock.frame().min(left)
                }
                None => planned,
            };
            self.surface.tick(dt);
            self.sections.tick(dt);
            self.elapsed += dt;
            left = left.saturating_sub(dt);
        }
    }

    fn snapshot(&mut self) -> Result<()> {
        let frame = self.surface.layout(self.area);
        match self.format {
            Format::Json => {
                let snapshot = RowSnapshot {
                    t_ms: self.elapsed.as_millis(),
                    frame: &frame,
                };
                serde_json::to_writer(&mut *self.out, &snapshot)?;
                writeln!(self.out)?;
            }
            Format::Ascii => {
                let canvas = canvas::render_row(&frame, self.surface.model());
                let active = frame.active.as_ref().map_or("-", |key| key.as_str());
                writeln!(
                    self.out,
                    "t={}ms active={active} settled={}",
                    self.elapsed.as_millis(),
                    frame.settled
                )?;
                write!(self.out, "{canvas}")?;
                if !self.sections.is_empty() && self.sections.scroll().is_some() {
                    write!(self.out, "{}", canvas::render_sections(&self.sections.sections()))?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

fn run_script(args: &RunArgs, out: &mut dyn Write) -> Result<()> {
    let config = args.source.load()?;
    let surface = config.build();
    let steps = match &args.script {
        Some(path) => script::parse(&std::fs::read_to_string(path)?)?,
        None => script::default_script(surface.len()),
    };
    if args.width == 0 || args.height == 0 {
        return Err(DemoError::Usage("--width and --height must be positive".into()));
    }

    tracing::info!(
        target: "bento.demo",
        panels = surface.len(),
        steps = steps.len(),
        fps = args.fps,
        "playing script"
    );

    let mut player = Player {
        surface,
        sections: config.build_scroll(),
        area: Rect::from_size(args.width, args.height),
        frame_dt: Duration::from_secs(1) / args.fps,
        elapsed: Duration::ZERO,
        format: args.format,
        clock: args.realtime.then(FrameClock::new),
        out,
    };
    // Lay out once so coordinate steps can hit-test from the start.
    player.surface.layout(player.area);
    if let Some(clock) = &mut player.clock {
        let _ = clock.frame();
    }
    for step in &steps {
        player.step(step)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// scroll
// ---------------------------------------------------------------------------

/// Most scroll positions one sweep may visit.
const MAX_SCROLL_STEPS: u32 = 100_000;

/// Number of positions from `from` to `to` inclusive, `step` apart.
fn scroll_positions(from: f32, to: f32, step: f32) -> Result<u32> {
    if step.is_nan() || step <= 0.0 || !from.is_finite() || !to.is_finite() {
        return Err(DemoError::Usage("--step must be positive and bounds finite".into()));
    }
    if to < from {
        return Ok(0);
    }
    let steps = ((f64::from(to) - f64::from(from)) / f64::from(step)).floor();
    if steps >= f64::from(MAX_SCROLL_STEPS) {
        return Err(DemoError::Usage(format!(
            "--step too small: sweep would visit more than {MAX_SCROLL_STEPS} positions"
        )));
    }
    Ok(steps as u32 + 1)
}

fn run_scroll(args: &ScrollArgs, out: &mut dyn Write) -> Result<()> {
    let positions = scroll_positions(args.from, args.to, args.step)?;
    let config = args.source.load()?;
    let mut sections = config.build_scroll();
    if sections.is_empty() {
        return Err(DemoError::Usage("configuration has no sections".into()));
    }

    let frame_dt = Duration::from_millis(16);
    for index in 0..positions {
        let offset = args.from + args.step * index as f32;
        sections.set_scroll(offset, args.viewport);
        let mut left = Duration::from_millis(args.dwell_ms);
        while !left.is_zero() {
            let dt = left.min(frame_dt);
            sections.tick(dt);
            left -= dt;
        }
        let frames = sections.sections();
        match args.format {
            Format::Json => {
                serde_json::to_writer(&mut *out, &serde_json::json!({
                    "offset": offset,
                    "sections": frames,
                }))?;
                writeln!(out)?;
            }
            Format::Ascii => {
                writeln!(out, "scroll={offset}")?;
                write!(out, "{}", canvas::render_sections(&frames))?;
            }
        }
    }
    Ok(())
}
