use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use osm_cleaner::audit::audit_document;
use osm_cleaner::config::Config;
use osm_cleaner::logging;
use osm_cleaner::osm::OsmReader;
use osm_cleaner::pipeline::{process_file, ShapeReport};
use osm_cleaner::storage::SqliteLoader;
use osm_cleaner::tags::normalize::default_registry;

#[derive(Parser)]
#[command(name = "osm_cleaner")]
#[command(about = "Cleans OpenStreetMap address tags into CSV and SQLite tables")]
#[command(version = "0.1.0")]
struct Cli {
    /// Config file (defaults to osm_cleaner.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ShapeArgs {
    /// OSM XML export to read
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory for the CSV files
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Check every row against the table schema
    #[arg(long)]
    validate: bool,
    /// Drop tags whose key contains punctuation or whitespace
    #[arg(long)]
    skip_problem_keys: bool,
    /// Stop after this many elements
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Debug)]
struct LoadArgs {
    /// Directory holding the CSV files
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shape an OSM export into CSV files
    Shape(ShapeArgs),
    /// Load previously shaped CSV files into SQLite
    Load(LoadArgs),
    /// Shape, then load
    Run {
        #[command(flatten)]
        shape: ShapeArgs,
        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Survey tag keys and address values, printing a JSON report
    Audit {
        /// OSM XML export to read
        #[arg(long)]
        input: Option<PathBuf>,
        /// Stop after this many elements
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl ShapeArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        config.validate |= self.validate;
        config.skip_problem_keys |= self.skip_problem_keys;
    }
}

impl LoadArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
    }
}

fn shape(config: &Config) -> anyhow::Result<ShapeReport> {
    let input = config.input()?;
    println!("🔄 Shaping {}...", input.display());

    let report = process_file(
        input,
        &config.output_dir,
        default_registry(),
        &config.pipeline_options(),
    )
    .with_context(|| format!("Failed to shape {}", input.display()))?;

    println!("\n📊 Shaping results:");
    println!("   Nodes: {} ({} tags)", report.nodes, report.node_tags);
    println!(
        "   Ways: {} ({} tags, {} node refs)",
        report.ways, report.way_tags, report.way_nodes
    );
    println!("   Values rewritten: {}", report.values_rewritten);
    println!("   Duration: {:.2}s", report.duration_secs());
    println!("   Output dir: {}", config.output_dir.display());
    Ok(report)
}

fn load(config: &Config) -> anyhow::Result<()> {
    println!("🔨 Loading CSV files into {}...", config.database.display());

    let mut loader = SqliteLoader::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.display()))?;
    let loaded = loader
        .load_dir(&config.output_dir)
        .with_context(|| format!("Failed to load {}", config.output_dir.display()))?;

    for (table, rows) in loaded {
        println!("   {}: {} rows", table, rows);
    }
    Ok(())
}

fn audit(input: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let reader = OsmReader::from_path(input)
        .with_context(|| format!("Failed to open {}", input.display()))?
        .with_limit(limit);
    let audit = audit_document(reader, default_registry())?;
    println!("{}", audit.report()?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let result = match cli.command {
        Commands::Shape(args) => {
            args.apply(&mut config);
            shape(&config).map(|_| ())
        }
        Commands::Load(args) => {
            args.apply(&mut config);
            load(&config)
        }
        Commands::Run { shape: args, database } => {
            args.apply(&mut config);
            if let Some(database) = database {
                config.database = database;
            }
            shape(&config).and_then(|_| load(&config))
        }
        Commands::Audit { input, limit } => {
            if input.is_some() {
                config.input = input;
            }
            let limit = limit.or(config.limit);
            config
                .input()
                .map_err(anyhow::Error::from)
                .and_then(|input| audit(input, limit))
        }
    };

    match result {
        Ok(()) => info!("Command completed"),
        Err(e) => {
            error!("Command failed: {:#}", e);
            println!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
