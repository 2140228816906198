mod loader;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Read, Write, stdin, stdout};
use std::path::PathBuf;

use loader::{FileDataLoader, default_data_dir};
use partyplanner_core::{PartyPlanner, PlannerEngine, Status, validate_reference_data};
use report::{BuildSummary, DataSummary, Format, write_build, write_data_summary};

const MSG_NO_BUILD: &str = "No build parameter (b, s or a) found in input.";

#[derive(Debug, Parser)]
#[command(name = "partyplanner", version = "0.1.0")]
#[command(about = "Decode, import and export Party Planner builds")]
struct Args {
    /// Directory holding monsters.json and specializations.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Base URL used for share links
    #[arg(long, global = true, default_value = "https://partyplanner.app/")]
    base_url: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Optional path to write the output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a build string, query string or share URL
    Decode { build: String },
    /// Import a party string (reads stdin when no file is given)
    Import {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Convert a build string into the party string format
    Export { build: String },
    /// Validate the reference data
    CheckData,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.format == Format::Console && args.output.is_none() {
        announce_banner();
    }

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let loader = FileDataLoader::new(data_dir);
    let mut output_target = OutputTarget::new(args.output.clone())?;

    let ok = match &args.command {
        Command::CheckData => check_data(&loader, &args, &mut output_target)?,
        Command::Decode { build } => {
            decode(&load_engine(&loader)?, build, &args, &mut output_target)?
        }
        Command::Import { file } => {
            let text = read_party_string(file.as_ref())?;
            let mut planner = load_engine(&loader)?.new_planner();
            planner.import_party_string(&text);
            write_summary(&planner, &args, &mut output_target)?
        }
        Command::Export { build } => export(&load_engine(&loader)?, build, &mut output_target)?,
    };
    output_target.flush_inner()?;

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn announce_banner() {
    println!("{}", "🧭 Party Planner".bright_cyan().bold());
    println!("{}", "================".cyan());
}

fn load_engine(loader: &FileDataLoader) -> Result<PlannerEngine> {
    PlannerEngine::load(loader).with_context(|| {
        format!("failed to load reference data from {}", loader.dir().display())
    })
}

fn write_summary(planner: &PartyPlanner, args: &Args, out: &mut OutputTarget) -> Result<bool> {
    let summary = BuildSummary::from_planner(planner, &args.base_url);
    write_build(out.writer(), &summary, args.format)?;
    Ok(!summary.failed())
}

fn no_build(out: &mut OutputTarget) -> Result<bool> {
    log::error!("{MSG_NO_BUILD}");
    writeln!(out.writer(), "{MSG_NO_BUILD}")?;
    Ok(false)
}

fn decode(engine: &PlannerEngine, build: &str, args: &Args, out: &mut OutputTarget) -> Result<bool> {
    let mut planner = engine.new_planner();
    if planner.load_query(build).status == Status::None {
        return no_build(out);
    }
    write_summary(&planner, args, out)
}

fn export(engine: &PlannerEngine, build: &str, out: &mut OutputTarget) -> Result<bool> {
    let mut planner = engine.new_planner();
    let notice = planner.load_query(build);
    if notice.status == Status::None {
        return no_build(out);
    }
    if notice.status == Status::Error {
        log::error!("{}", notice.message);
        writeln!(out.writer(), "{}", notice.message)?;
        return Ok(false);
    }
    if notice.status == Status::Warning {
        log::warn!("{}", notice.message);
    }
    write!(out.writer(), "{}", planner.export_party_string())?;
    Ok(true)
}

fn read_party_string(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            stdin()
                .read_to_string(&mut text)
                .context("failed to read party string from stdin")?;
            Ok(text)
        }
    }
}

fn check_data(loader: &FileDataLoader, args: &Args, out: &mut OutputTarget) -> Result<bool> {
    use partyplanner_core::DataLoader;

    let data = loader
        .load_reference_data()
        .with_context(|| format!("failed to load reference data from {}", loader.dir().display()))?;
    let problems = validate_reference_data(&data);
    let summary = DataSummary::new(
        data.monsters.len(),
        data.specializations.len(),
        data.anointments().count(),
        &problems,
    );
    write_data_summary(out.writer(), &summary, args.format)?;
    Ok(problems.is_empty())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
