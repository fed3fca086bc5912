use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transport_catalogue_core::prelude::*;

/// Answers transport catalogue requests from a JSON document
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input document, stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the responses, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the responses
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let document = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            NetworkDocument::from_reader(BufReader::new(file))
        }
        None => NetworkDocument::from_reader(io::stdin().lock()),
    }
    .context("Failed to read network document")?;

    let model = create_transport_model(&document).context("Failed to build transport model")?;

    let responses = handle_stat_requests(&model, &document.stat_requests);
    info!(requests = responses.len(), "Answered stat requests");

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &responses)?;
    } else {
        serde_json::to_writer(&mut writer, &responses)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
