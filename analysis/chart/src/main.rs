use std::process::exit;

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use stats::{ingest_path, reduce, Layout};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

pub mod cli;
pub mod render;
pub mod summary;

use cli::Args;

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            if err.kind() != ErrorKind::MissingRequiredArgument {
                eprintln!("{}", err.render());
            }
            println!("{}", Args::command().render_usage());
            exit(1);
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let layout = Layout::dispatch();

    let groups = ingest_path(&args.results)?;
    info!(rows = groups.rows(), path = %args.results.display(), "loaded results");
    let table = reduce(&groups, &layout);

    render::render(&table, &layout, &args.chart)
        .with_context(|| format!("failed to render {}", args.chart.display()))?;
    println!("Wrote {}", args.chart.display());

    if args.summary {
        println!();
        for line in summary::summary(&table, &layout) {
            println!("{line}");
        }
    }

    Ok(())
}
