use std::{cell::Cell, path::PathBuf, rc::Rc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use phasescrub::{
    LinearDriver, Phase, PlayableAnimation, PlaybackController, ProgressReport, ScrubCommand,
    ScrubConfig, Transition, script, timing,
};

#[derive(Parser, Debug)]
#[command(name = "phasescrub", version)]
struct Cli {
    /// Log commands and phase changes to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrub a demo animation with a command script and print per-frame progress.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Number of demo phases (alternating uniform / bidirectional).
    #[arg(long, default_value_t = 3)]
    phases: usize,

    /// Commands: next, prev, speed=<f64>, wait=<frames>, settle.
    #[arg(long, default_value = "next")]
    script: String,

    /// Config JSON (base_duration_ms, initial_speed, tick_interval_ms).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial speed override, clamped to [0, 2].
    #[arg(long)]
    speed: Option<f64>,

    /// Emit one JSON report per frame instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ScrubConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ScrubConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.initial_speed = timing::clamp_speed(speed);
    }

    let commands = script::parse_script(&args.script).context("parse script")?;
    let (animation, visuals) = demo_animation(args.phases);
    let mut controller =
        PlaybackController::with_driver(Rc::new(animation), LinearDriver::new(), &config);
    let frame = config.tick_interval();

    let mut frame_no = 0u64;
    let mut emit = |c: &PlaybackController| {
        frame_no += 1;
        print_report(frame_no, &c.report(), &visuals, args.json);
    };

    for command in commands.into_iter().chain([ScrubCommand::Settle]) {
        script::apply(&mut controller, command, frame, &mut emit);
    }

    let report = controller.report();
    if args.json {
        println!("{}", serde_json::to_string(&report).context("encode report")?);
    } else {
        println!(
            "final phase={} state={:?} progress={}",
            report.active_phase,
            report.state,
            format_progress(&report.phases)
        );
    }
    Ok(())
}

/// Phases that each write their visible value into a shared cell.
fn demo_animation(count: usize) -> (PlayableAnimation, Vec<Rc<Cell<f64>>>) {
    let visuals: Vec<Rc<Cell<f64>>> = (0..count).map(|_| Rc::new(Cell::new(0.0))).collect();
    let phases = visuals
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if i % 2 == 0 {
                let cell = Rc::clone(cell);
                Phase::uniform(Transition::new(move |p| cell.set(p)))
            } else {
                let fwd = Rc::clone(cell);
                let rev = Rc::clone(cell);
                // Reverse sees 0 -> 1, so it undoes the forward sweep itself.
                Phase::bidirectional(
                    Transition::new(move |p| fwd.set(p)),
                    Transition::new(move |p| rev.set(1.0 - p)),
                )
            }
        })
        .collect();
    (phases, visuals)
}

fn print_report(frame: u64, report: &ProgressReport, visuals: &[Rc<Cell<f64>>], json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::error!(%err, "failed to encode report"),
        }
        return;
    }

    let visible: Vec<f64> = visuals.iter().map(|c| c.get()).collect();
    println!(
        "frame={frame:<5} phase={} {:<14} progress={} visual={}",
        report.active_phase,
        format!("{:?}", report.state),
        format_progress(&report.phases),
        format_progress(&visible)
    );
}

fn format_progress(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.3}")).collect();
    format!("[{}]", parts.join(" "))
}
