//! `coursedb-populate` — create the example SQLite database.
//!
//! # Usage
//!
//! ```
//! coursedb-populate                       # db/example.db, synthetic unless data/raw/*.csv exist
//! coursedb-populate --db db/foo.db
//! coursedb-populate --force               # replace an existing database file
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use coursedb_populate::{CliOverrides, load_config, populate};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Create and populate the example SQLite database")]
struct Cli {
  /// Path to the SQLite file to create (default: db/example.db).
  #[arg(long, value_name = "PATH")]
  db: Option<PathBuf>,

  /// Overwrite an existing database file.
  #[arg(long)]
  force: bool,

  /// Directory searched for people.csv and transactions.csv (default: data/raw).
  #[arg(long, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Seed for the synthetic dataset.
  #[arg(long)]
  seed: Option<u64>,

  /// Optional TOML configuration file.
  #[arg(short, long, default_value = "coursedb.toml")]
  config: PathBuf,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let config = load_config(&cli.config, CliOverrides {
    db_path:  cli.db,
    data_dir: cli.data_dir,
    force:    cli.force,
    seed:     cli.seed,
  })
  .context("failed to load configuration")?;

  let mut rng = config.rng();
  let result = populate(&config, &mut rng);

  match &result {
    Ok(report) => println!("{}", report.summary),
    Err(e) => tracing::error!("Error: {e}"),
  }
  println!("Database written to: {}", config.db_path.display());

  result
    .map(|_| ())
    .with_context(|| format!("failed to populate {}", config.db_path.display()))
}
