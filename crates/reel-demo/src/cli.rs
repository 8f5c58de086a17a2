use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use reel_core::{CarouselView, TeamMember};
use reel_runtime::{CarouselProgram, MacroPlayer};

use crate::error::{DemoError, Result};
use crate::render::{controls_legend, frame_line, member_card};
use crate::session::{SourceArgs, walkthrough};

#[derive(Debug, Parser)]
#[command(
    name = "reel-demo",
    about = "Headless walkthrough of the auto-advancing team carousel",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay the scripted team-page session in virtual time.
    Replay(ReplayArgs),

    /// Run the carousel on the wall clock and print frames as they change.
    Live(LiveArgs),

    /// Print the roster as member cards.
    Roster(SourceArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the control labels after the frames.
    #[arg(long)]
    pub legend: bool,
}

#[derive(Debug, Clone, Args)]
pub struct LiveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// How long to run before shutting the program down.
    #[arg(long = "duration-ms", default_value_t = 7000, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration_ms: u64,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Replay(args) => run_replay(&args, out).map(drop),
        Commands::Live(args) => run_live(&args, out).map(drop),
        Commands::Roster(source) => run_roster(&source, out),
    }
}

/// Returns the number of frames written.
pub fn run_replay(args: &ReplayArgs, out: &mut dyn Write) -> Result<usize> {
    let mut carousel = args.source.build()?;
    let script = walkthrough();
    tracing::info!(
        script = script.name(),
        events = script.len(),
        total_ms = saturating_millis(script.total_duration()),
        "replaying"
    );

    let frames = MacroPlayer::new(&script).replay(&mut carousel);
    for frame in &frames {
        let member = &carousel.items()[frame.view.cursor];
        writeln!(out, "{}", frame_line(frame.at, frame.event.as_ref(), &frame.view, member))?;
    }
    if args.legend {
        writeln!(out, "{}", controls_legend(&carousel.view()))?;
    }
    Ok(frames.len())
}

/// Returns the number of frames written.
pub fn run_live(args: &LiveArgs, out: &mut dyn Write) -> Result<usize> {
    let carousel = args.source.build()?;
    let members: Vec<TeamMember> = carousel.items().to_vec();
    let duration = Duration::from_millis(args.duration_ms);
    tracing::info!(duration_ms = args.duration_ms, members = members.len(), "running live");

    let (frames_tx, frames) = mpsc::channel::<CarouselView>();
    let handle = CarouselProgram::new(carousel).spawn(frames_tx);
    let start = Instant::now();

    let mut written = 0;
    while let Some(remaining) = duration.checked_sub(start.elapsed()) {
        match frames.recv_timeout(remaining) {
            Ok(view) => {
                write_live_frame(out, start.elapsed(), &view, &members)?;
                written += 1;
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
        }
    }

    let program = handle.shutdown().map_err(|_| DemoError::ProgramPanicked)?;
    for view in frames.try_iter() {
        write_live_frame(out, start.elapsed(), &view, &members)?;
        written += 1;
    }
    tracing::info!(
        frames = written,
        cursor = program.controller().cursor(),
        "live run finished"
    );
    Ok(written)
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn write_live_frame(
    out: &mut dyn Write,
    at: Duration,
    view: &CarouselView,
    members: &[TeamMember],
) -> Result<()> {
    writeln!(out, "{}", frame_line(at, None, view, &members[view.cursor]))?;
    Ok(())
}

pub fn run_roster(source: &SourceArgs, out: &mut dyn Write) -> Result<()> {
    let roster = source.load_roster()?;
    for member in roster.members() {
        writeln!(out, "{}", member_card(member))?;
    }
    Ok(())
}
