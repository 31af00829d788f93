use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollweave", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scene JSON file.
    Validate(ValidateArgs),
    /// Evaluate a scene at evenly spaced progress values and print one
    /// frame snapshot per line as JSON.
    Eval(EvalArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of evenly spaced progress samples over [0, 1].
    #[arg(long, default_value_t = 11)]
    steps: u32,

    /// Viewport width used for breakpoint selection.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Optional measurements JSON (a serialized measurement pass); without
    /// it connectors are omitted from the output.
    #[arg(long)]
    measurements: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Eval(args) => cmd_eval(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene: scrollweave::Scene = read_json(&args.in_path, "scene")?;
    scene.validate()?;
    println!(
        "ok: {} elements, {} annotations, {} effects",
        scene.elements.len(),
        scene.annotations.len(),
        scene.effects.len()
    );
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let scene: scrollweave::Scene = read_json(&args.in_path, "scene")?;
    scene.validate()?;

    let measurements: Option<scrollweave::Measurements> = args
        .measurements
        .as_deref()
        .map(|p| read_json(p, "measurements"))
        .transpose()?;

    let viewport = scrollweave::Viewport::new(args.viewport_width, args.viewport_height, 0.0);
    let steps = args.steps.max(2);
    for step in 0..steps {
        let progress = scrollweave::Progress::new(f64::from(step) / f64::from(steps - 1));
        let input = scrollweave::FrameInput {
            progress,
            viewport,
            measurements: measurements.as_ref(),
        };
        let snapshot = scrollweave::eval_frame(&scene, &input)?;
        println!("{}", serde_json::to_string(&snapshot)?);
    }
    Ok(())
}
