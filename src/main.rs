use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use specialist_schedule::generator::InstanceGenerator;
use specialist_schedule::io::{
    read_classes, read_requirements, read_specialists, render_grid, write_classes,
    write_requirements, write_specialists,
};
use specialist_schedule::models::{ClassGrid, ScheduleGrid};
use specialist_schedule::scheduler::{BacktrackingScheduler, ScheduleRequest, ScheduleSummary};

const LOG_ENV: &str = "SPECIALIST_SCHEDULE_LOG";

/// Top-level CLI parser.
#[derive(Debug, Parser)]
#[command(
    name = "specialist-schedule",
    version,
    about = "Assign specialist instructors to weekly class slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose mode (info logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a timetable from CSV inputs
    Solve(SolveArgs),
    /// Write a random feasible instance as CSV inputs
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Classes CSV (class, liberation_days)
    #[arg(long)]
    classes: PathBuf,

    /// Specialists CSV (name, specialty, day_1..day_5, notes)
    #[arg(long)]
    specialists: PathBuf,

    /// Requirements CSV (class, specialty, weekly_count)
    #[arg(long)]
    requirements: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the grid and summary as JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// Keep unmatched liberation days after a general placement
    #[arg(long)]
    standing_priorities: bool,

    /// Only let a liberation day serve requirements of its own class
    #[arg(long)]
    class_bound_priorities: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Directory receiving classes.csv, specialists.csv, requirements.csv
    #[arg(long)]
    out_dir: PathBuf,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of classes
    #[arg(long, default_value_t = 6)]
    classes: usize,

    /// Number of specialties
    #[arg(long, default_value_t = 3)]
    specialties: usize,

    /// Largest weekly count per (class, specialty)
    #[arg(long, default_value_t = 1)]
    max_weekly_count: u32,
}

/// JSON output: class number → week grid, plus the summary.
#[derive(Serialize)]
struct Report<'a> {
    grid: BTreeMap<String, ClassGrid>,
    summary: &'a ScheduleSummary,
}

impl<'a> Report<'a> {
    fn new(grid: &ScheduleGrid, summary: &'a ScheduleSummary) -> Self {
        Self {
            grid: grid.clone().into_map(),
            summary,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("specialist-schedule error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Command::Solve(args) => solve(&args),
        Command::Generate(args) => generate(&args),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn solve(args: &SolveArgs) -> anyhow::Result<()> {
    let classes = read_classes(open(&args.classes)?)
        .with_context(|| format!("reading classes from {}", args.classes.display()))?;
    let specialists = read_specialists(open(&args.specialists)?)
        .with_context(|| format!("reading specialists from {}", args.specialists.display()))?;
    let requirements = read_requirements(open(&args.requirements)?)
        .with_context(|| format!("reading requirements from {}", args.requirements.display()))?;

    let request = ScheduleRequest::new(classes, specialists, requirements);
    let scheduler = BacktrackingScheduler::new()
        .with_standing_priorities(args.standing_priorities)
        .with_class_bound_priorities(args.class_bound_priorities);

    let solution = scheduler.schedule_request(&request)?;
    let summary = ScheduleSummary::calculate(&solution.grid, &request.classes);
    info!(
        filled_cells = summary.filled_cells,
        liberation_days_honored = summary.liberation_days_honored,
        liberation_days_missed = summary.liberation_days_missed,
        "timetable ready"
    );

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    if args.json {
        let report = Report::new(&solution.grid, &summary);
        let mut writer = writer;
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
    } else {
        render_grid(writer, &solution.grid)?;
    }

    Ok(())
}

fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let request = InstanceGenerator::new()
        .with_classes(args.classes)
        .with_specialties(args.specialties)
        .with_max_weekly_count(args.max_weekly_count)
        .generate(&mut rng);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    write_classes(create(&args.out_dir.join("classes.csv"))?, &request.classes)?;
    write_specialists(
        create(&args.out_dir.join("specialists.csv"))?,
        &request.specialists,
    )?;
    write_requirements(
        create(&args.out_dir.join("requirements.csv"))?,
        &request.requirements,
    )?;

    info!(
        dir = %args.out_dir.display(),
        seed = args.seed,
        classes = request.classes.len(),
        specialists = request.specialists.len(),
        requirements = request.requirements.len(),
        "instance written"
    );
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("opening {}", path.display()))
}

fn create(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("creating {}", path.display()))
}
