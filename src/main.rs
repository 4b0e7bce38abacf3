use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{info, Level};

use speclinks::{InputReader, Manifest, Occurrence, ReaderConfig, Rewriter, Scanner, Source};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// One line per keyword: section-index, word, lines, sentence
    List,
    /// Occurrences as pretty-printed JSON
    Json,
    /// Markdown with anchors and back-references around each keyword
    Rewrite,
    /// YAML requirement manifest
    Manifest,
}

#[derive(Parser, Debug)]
#[command(name = "speclinks")]
#[command(about = "Find and anchor RFC 2119 keywords in markdown specifications")]
#[command(version)]
struct Args {
    /// Local markdown file or https://github.com/.../blob/... URL
    source: String,

    /// Output to produce
    #[arg(long, value_enum, default_value_t = Mode::List)]
    mode: Mode,

    /// Use memory-mapped I/O for local files
    #[arg(long)]
    use_mmap: bool,

    /// Line reader buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    buffer_size: usize,

    /// HTTP timeout for remote documents
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Specification identifier for the manifest (defaults to the source)
    #[arg(long)]
    specification: Option<String>,

    /// Emit debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the document output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = ReaderConfig {
        buffer_size: args.buffer_size,
        use_mmap: args.use_mmap,
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    };
    let source = Source::parse(&args.source, &config)?;
    let specification = args
        .specification
        .clone()
        .unwrap_or_else(|| source.identifier());

    let reader = InputReader::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        Mode::Rewrite => rewrite_streaming(&reader, &source, &mut out).await?,
        Mode::List => {
            for occurrence in scan_source(&reader, &source).await? {
                writeln!(out, "{}", occurrence.format_listing())?;
            }
        }
        Mode::Json => {
            serde_json::to_writer_pretty(&mut out, &scan_source(&reader, &source).await?)?;
            writeln!(out)?;
        }
        Mode::Manifest => {
            let occurrences = scan_source(&reader, &source).await?;
            Manifest::generate(&specification, &occurrences).write_yaml(&mut out)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Annotate lines as they arrive; output already written survives a read error
async fn rewrite_streaming<W: Write>(reader: &InputReader, source: &Source, out: &mut W) -> Result<()> {
    let mut rewriter = Rewriter::new();
    let read = reader
        .for_each_line(source, |line| writeln!(out, "{}", rewriter.annotate_line(line)))
        .await;
    out.flush()?;

    let stats = read?;
    rewriter.write_index(out)?;
    out.flush()?;
    info!(
        lines = stats.lines_read,
        anchors = rewriter.tags().len(),
        "Rewrite complete"
    );
    Ok(())
}

async fn scan_source(reader: &InputReader, source: &Source) -> Result<Vec<Occurrence>> {
    let (lines, stats) = reader.read_lines(source).await?;
    info!(
        lines = stats.lines_read,
        bytes = stats.bytes_read,
        duration_ms = stats.duration_ms,
        "Input loaded"
    );

    let mut scanner = Scanner::new();
    for line in &lines {
        scanner.scan_line(line);
    }
    let (occurrences, stats) = scanner.finish();
    info!(?stats, "Scan finished");
    Ok(occurrences)
}
