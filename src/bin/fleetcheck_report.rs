//! Render inspection or quality reports from exported record-store rows.
//!
//! ```text
//! fleetcheck-report --kind quality --input reports.json --out ./reports
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use serde_json::Value;

use fleetcheck_core::{init_logger_with_level, render_batch, Config, RenderContext};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fleetcheck-report",
    version,
    about = "Render printable FleetCheck reports",
    long_about = "Renders inspection or quality reports as standalone HTML documents.\n\nThe input is one JSON object or an array of objects as exported from the record store.\n\nExamples:\n  fleetcheck-report --kind inspection --input inspection.json\n  fleetcheck-report --kind quality --input reports.json --out ./reports --config fleetcheck.yml"
)]
struct CliArgs {
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        help_heading = "Input",
        help = "Report kind: inspection or quality."
    )]
    kind: String,

    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help_heading = "Input",
        help = "JSON file holding one record or an array of records."
    )]
    input: PathBuf,

    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        default_value = ".",
        help_heading = "Output",
        help = "Directory the HTML documents are written to. Existing files are never overwritten."
    )]
    out: PathBuf,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help_heading = "Configuration",
        help = "YAML configuration file."
    )]
    config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logger_with_level(match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });

    let config = Config::load(args.config.as_deref())?;
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let rows = match serde_json::from_str::<Value>(&raw)
        .with_context(|| format!("invalid JSON in {}", args.input.display()))?
    {
        Value::Array(rows) => rows,
        row @ Value::Object(_) => vec![row],
        _ => bail!("{} must hold a JSON object or an array of objects", args.input.display()),
    };

    let ctx = RenderContext::new(config.report);
    let batch = render_batch(&args.kind, &rows, &ctx)?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    for document in batch.documents() {
        let path = args.out.join(&document.file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("refusing to overwrite or unable to create {}", path.display()))?;
        file.write_all(document.html.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{}", path.display());
    }

    log::info!(
        "{} EXPORT_COMPLETE received={} rendered={} failed={}",
        ctx.log_context(),
        batch.received_count,
        batch.rendered_count,
        batch.failed_count
    );
    if batch.failed_count > 0 {
        bail!("{} of {} records failed to render", batch.failed_count, batch.received_count);
    }
    Ok(())
}
