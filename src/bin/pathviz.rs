use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pathviz", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot a trace over a field diagram and write a PNG.
    Render(RenderArgs),
    /// Print the swept-footprint corner trajectories of a trace's actual path.
    Footprint(FootprintArgs),
}

#[derive(clap::Args, Debug)]
struct EnvelopeArgs {
    /// Robot width in feet, perpendicular to travel (overrides the config file).
    #[arg(long)]
    robot_width: Option<f64>,

    /// Robot length in feet, along travel (overrides the config file).
    #[arg(long)]
    robot_length: Option<f64>,

    /// Drop zero-length segments instead of failing.
    #[arg(long)]
    skip_degenerate: bool,
}

impl EnvelopeArgs {
    fn policy(&self) -> pathviz::DegeneratePolicy {
        if self.skip_degenerate {
            pathviz::DegeneratePolicy::Skip
        } else {
            pathviz::DegeneratePolicy::Fail
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input trace CSV.
    #[arg(long)]
    trace: PathBuf,

    /// Field diagram image drawn underneath the plot.
    #[arg(long)]
    field: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Plot config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not draw the robot footprint.
    #[arg(long)]
    no_footprint: bool,

    #[command(flatten)]
    envelope: EnvelopeArgs,
}

#[derive(Parser, Debug)]
struct FootprintArgs {
    /// Input trace CSV.
    #[arg(long)]
    trace: PathBuf,

    /// Plot config JSON (only the robot dimensions are used).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(flatten)]
    envelope: EnvelopeArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Footprint(args) => cmd_footprint(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<&Path>,
    envelope: &EnvelopeArgs,
) -> anyhow::Result<pathviz::PlotConfig> {
    let mut config = match path {
        Some(p) => pathviz::PlotConfig::from_path(p)?,
        None => pathviz::PlotConfig::default(),
    };
    if let Some(w) = envelope.robot_width {
        config.robot.width_ft = w;
    }
    if let Some(l) = envelope.robot_length {
        config.robot.length_ft = l;
    }
    config.validate().context("invalid plot config")?;
    Ok(config)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref(), &args.envelope)?;
    if args.no_footprint {
        config.footprint.enabled = false;
    }

    let trace = pathviz::load_trace(&args.trace)?;
    let background = args
        .field
        .as_deref()
        .map(pathviz::load_image)
        .transpose()?;

    let frame = pathviz::render_plot(
        &trace,
        background.as_ref(),
        &config,
        args.envelope.policy(),
    )
    .with_context(|| format!("render '{}'", args.trace.display()))?;
    pathviz::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_footprint(args: FootprintArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), &args.envelope)?;
    let envelope = config.envelope()?;

    let trace = pathviz::load_trace(&args.trace)?;
    let corners =
        pathviz::compute_footprint_with(&trace.actual, &envelope, args.envelope.policy())
            .with_context(|| format!("footprint of '{}'", args.trace.display()))?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &corners).context("write corners JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_corners_csv(&mut out, &corners)?,
    }
    out.flush()?;
    Ok(())
}

fn write_corners_csv(out: impl std::io::Write, corners: &pathviz::Corners) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_writer(out);

    let mut header = vec!["segment".to_string()];
    for corner in pathviz::Corner::ALL {
        header.push(format!("{}_x", corner.name()));
        header.push(format!("{}_y", corner.name()));
    }
    w.write_record(&header)?;

    for (i, segment) in corners.segments.iter().enumerate() {
        let mut row = vec![segment.to_string()];
        for (_, seq) in corners.iter() {
            row.push(seq[i].x.to_string());
            row.push(seq[i].y.to_string());
        }
        w.write_record(&row)?;
    }
    w.flush().context("write corners CSV")?;
    Ok(())
}
