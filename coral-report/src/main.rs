//! Coral bleaching report: the selected year's status, the full table and
//! compressed trend snapshots.

mod config;
mod table;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use coral_trend::display::format_gdp;
use coral_trend::{TrendStore, decompress_snapshot, encode_snapshot};

/// Year shown when none is selected.
const DEFAULT_YEAR: i32 = 2000;

/// zstd level used for snapshot files.
const SNAPSHOT_LEVEL: i32 = 19;

#[derive(Parser)]
#[command(
    name = "coral-report",
    version,
    about = "Estimated global coral bleaching trend"
)]
struct Cli {
    /// TOML file with years_known, bleach_known, min_year and max_year
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Year to report on
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    year: i32,

    /// GDP figure to display alongside the report
    #[arg(long)]
    gdp: Option<f64>,

    /// Print the full per-year table
    #[arg(short, long)]
    table: bool,

    /// Write a zstd-compressed snapshot of the series to this path
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref())?;
    let store = TrendStore::from_config(config).context("invalid anchor configuration")?;
    let (min_year, max_year) = store.year_range();
    log::info!(
        "trend computed for {min_year}..={max_year} ({} years)",
        store.series().len()
    );

    let record = store
        .lookup_year(cli.year)
        .with_context(|| format!("select a year between {min_year} and {max_year}"))?;
    println!("Coral reef status");
    println!("  {}", table::render_status(record));
    if let Some(gdp) = cli.gdp {
        println!("  GDP: {}", format_gdp(gdp)?);
    }

    if cli.table {
        println!();
        print!("{}", table::render_table(store.series()));
    }

    if let Some(path) = &cli.snapshot {
        write_snapshot(&store, path)?;
    }

    Ok(())
}

fn write_snapshot(store: &TrendStore, path: &Path) -> anyhow::Result<()> {
    let snapshot = store.snapshot();
    let serialized = encode_snapshot(&snapshot)?;
    log::info!("serialized snapshot: {} bytes", serialized.len());

    let compressed =
        zstd::encode_all(&serialized[..], SNAPSHOT_LEVEL).context("zstd compression failed")?;
    log::info!(
        "compressed snapshot: {} bytes ({:.1}x)",
        compressed.len(),
        serialized.len() as f64 / compressed.len() as f64
    );

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let mut f = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(&compressed)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let restored = decompress_snapshot(&compressed)?;
    TrendStore::from_snapshot(restored).context("snapshot round-trip check failed")?;
    log::info!("snapshot round-trip OK");

    println!("Wrote snapshot to {}", path.display());
    Ok(())
}
