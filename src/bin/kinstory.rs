//! Kinstory CLI — turn a GEDCOM record file into a family story record.
//!
//! Usage:
//!   kinstory story <file> [--pretty] [--config path]
//!   kinstory summary <file> [--config path]

use clap::{Parser, Subcommand, ValueEnum};
use kinstory::{assemble, parse_file, FamilyTree, StoryConfig, StoryRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "kinstory",
    version,
    about = "GEDCOM record parser and family-story analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log verbosity (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full story record as JSON
    Story {
        /// Path to the record file
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a short human-readable summary
    Summary {
        /// Path to the record file
        file: PathBuf,
        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Get the default config path (~/.config/kinstory/config.yaml)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kinstory").join("config.yaml"))
}

fn load_config(explicit: Option<PathBuf>) -> Result<StoryConfig, String> {
    let path = match explicit {
        Some(path) => path,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => return Ok(StoryConfig::default()),
        },
    };
    debug!(path = %path.display(), "loading config");
    StoryConfig::from_file(&path).map_err(|e| e.to_string())
}

fn load_tree(file: &Path) -> Result<FamilyTree, String> {
    parse_file(file).map_err(|e| e.to_string())
}

fn build_record(file: &Path, config: Option<PathBuf>) -> Result<(FamilyTree, StoryRecord), String> {
    let config = load_config(config)?;
    let tree = load_tree(file)?;
    let record = assemble(&tree, &config);
    Ok((tree, record))
}

fn cmd_story(file: &Path, pretty: bool, config: Option<PathBuf>) -> i32 {
    let record = match build_record(file, config) {
        Ok((_, record)) => record,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let json = if pretty {
        record.to_json_pretty()
    } else {
        record.to_json()
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_summary(file: &Path, config: Option<PathBuf>) -> i32 {
    let (tree, record) = match build_record(file, config) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let stats = &record.statistics;

    println!("{:<24}  {:>7}", "Individuals", stats.total_individuals);
    println!("{:<24}  {:>7}", "Families", stats.total_families);
    println!("{:<24}  {:>7}", "Generations", stats.generations);
    if let (Some(earliest), Some(latest)) = (stats.date_range.earliest, stats.date_range.latest) {
        println!("{:<24}  {}-{}", "Years", earliest, latest);
    }
    if let Some(avg) = stats.average_lifespan {
        println!("{:<24}  {:>7.1}", "Average lifespan", avg);
    }

    if !record.narrative_themes.is_empty() {
        let themes: Vec<_> = record.narrative_themes.iter().map(|t| t.as_str()).collect();
        println!("{:<24}  {}", "Themes", themes.join(", "));
    }

    let spouses = tree.persons().filter(|p| tree.spouse_families(p).next().is_some()).count();
    println!("{:<24}  {:>7}", "Married into a family", spouses);

    if !stats.most_common_locations.is_empty() {
        println!();
        println!("{:<48}  {:>5}", "LOCATION", "COUNT");
        println!("{}", "-".repeat(55));
        for (location, count) in &stats.most_common_locations {
            println!("{:<48}  {:>5}", location, count);
        }
    }

    println!();
    println!("{}", record.opening_narrative);
    0
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Story {
            file,
            pretty,
            config,
        } => cmd_story(&file, pretty, config),
        Commands::Summary { file, config } => cmd_summary(&file, config),
    };
    std::process::exit(code);
}
