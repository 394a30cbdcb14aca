//! csv-wrangle CLI - normalize messy CSV files

use clap::Parser;
use csv_wrangle::{Dialect, Ingestor, Layout, decode, detect, is_vertical, to_csv};
use std::path::PathBuf;
use std::process::ExitCode;

/// Messy CSV normalizer.
///
/// Detects the dialect (delimiter, quote character) and orientation of each
/// input file, rebuilds vertical key/value dumps into standard records,
/// sanitizes cells, and optionally merges rows sharing an identifier field.
#[derive(Parser, Debug)]
#[command(name = "csv-wrangle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file(s) to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Merge records sharing this identifier field into one
    #[arg(short = 'i', long)]
    id_field: Option<String>,

    /// Force a specific delimiter (single character)
    #[arg(short = 'd', long)]
    delimiter: Option<char>,

    /// Force a specific quote character (single character)
    #[arg(short = 'q', long)]
    quote: Option<char>,

    /// Treat input as a vertical key/value dump (skip classification)
    #[arg(long, conflicts_with = "horizontal")]
    vertical: bool,

    /// Treat input as a standard row-oriented table (skip classification)
    #[arg(long)]
    horizontal: bool,

    /// Output format: summary (default) or csv
    #[arg(short = 'f', long, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Summary,
    Csv,
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        if let Err(e) = process_file(file, &args) {
            eprintln!("Error processing {}: {}", file.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn process_file(path: &PathBuf, args: &Args) -> csv_wrangle::Result<()> {
    let data = std::fs::read(path)?;
    let (text, _) = decode(&data);

    // Resolve the dialect and layout up front so the summary can report them
    let dialect = match (args.delimiter, args.quote) {
        (None, None) => detect(&text),
        (delim, quote) => Dialect::new(
            delim.map_or(b',', |c| c as u8),
            quote.map_or(b'"', |c| c as u8),
        ),
    };

    let layout = if args.vertical {
        Layout::Vertical
    } else if args.horizontal {
        Layout::Horizontal
    } else if is_vertical(&text, dialect) {
        Layout::Vertical
    } else {
        Layout::Horizontal
    };

    let result = Ingestor::new()
        .dialect(dialect)
        .layout(layout)
        .ingest(&text, args.id_field.as_deref());

    match args.format {
        OutputFormat::Summary => print_summary(path, dialect, layout, &result),
        OutputFormat::Csv => print!("{}", to_csv(&result.records, &result.fields)?),
    }

    Ok(())
}

fn print_summary(path: &PathBuf, dialect: Dialect, layout: Layout, result: &csv_wrangle::Ingestion) {
    println!("File: {}", path.display());
    println!("  Delimiter: {:?}", dialect.delimiter as char);
    println!("  Quote: {:?}", dialect.quote as char);
    println!(
        "  Layout: {}",
        match layout {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
        }
    );
    println!("  Fields: {}", result.fields.len());
    println!("  Records: {}", result.records.len());

    for (i, name) in result.fields.iter().enumerate() {
        println!("    {}: {}", i + 1, name);
    }

    println!();
}
