use anyhow::{bail, Context, Result};
use memmap2::MmapOptions;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for document acquisition
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async line reading (default: 8KB)
    pub buffer_size: usize,
    /// Read local files through a memory map instead of buffered async I/O
    pub use_mmap: bool,
    /// HTTP timeout for remote documents
    pub timeout: Duration,
    /// Remote sources must start with this prefix
    pub remote_host_prefix: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            use_mmap: false,
            timeout: Duration::from_secs(30),
            remote_host_prefix: "https://github.com/".to_string(),
        }
    }
}

/// Where a markdown document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote {
        /// Browser "blob" view URL as given by the user
        blob_url: String,
        /// Raw content URL actually fetched
        raw_url: String,
    },
}

impl Source {
    /// Classify a command line argument as a local path or a blob URL
    pub fn parse(arg: &str, config: &ReaderConfig) -> Result<Self> {
        if arg.trim().is_empty() {
            bail!("Source must not be empty");
        }

        if arg.starts_with("http://") || arg.starts_with("https://") {
            if !arg.starts_with(&config.remote_host_prefix) {
                bail!(
                    "Unsupported remote source {arg}: expected a URL starting with {}",
                    config.remote_host_prefix
                );
            }
            if !arg.contains("/blob/") {
                bail!("Remote source {arg} is not a blob URL (missing /blob/ segment)");
            }
            return Ok(Source::Remote {
                blob_url: arg.to_string(),
                raw_url: raw_content_url(arg),
            });
        }

        Ok(Source::Local(PathBuf::from(arg)))
    }

    /// Identifier used for manifests and permalinks
    pub fn identifier(&self) -> String {
        match self {
            Source::Local(path) => path.display().to_string(),
            Source::Remote { blob_url, .. } => blob_url.clone(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// Rewrite a GitHub blob view URL into its raw content URL
pub fn raw_content_url(blob_url: &str) -> String {
    blob_url
        .replacen("https://github.com/", "https://raw.githubusercontent.com/", 1)
        .replacen("/blob/", "/", 1)
}

/// Statistics for one document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Reads markdown documents from disk or over HTTP, one line at a time
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read every line of `source`, without line terminators
    pub async fn read_lines(&self, source: &Source) -> Result<(Vec<String>, ReadStats)> {
        let mut lines = Vec::new();
        let stats = self
            .for_each_line(source, |line| {
                lines.push(line.to_string());
                Ok(())
            })
            .await?;
        Ok((lines, stats))
    }

    /// Hand each line of `source` to `on_line` as soon as it is read.
    ///
    /// Lines delivered before a read error stay delivered; the error names
    /// the line that failed.
    pub async fn for_each_line<F>(&self, source: &Source, mut on_line: F) -> Result<ReadStats>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        let start_time = Instant::now();
        debug!("Starting read of {}", source);

        let mut stats = ReadStats {
            source: source.identifier(),
            lines_read: 0,
            bytes_read: 0,
            duration_ms: 0,
        };
        let mut counted = |line: &str| {
            stats.lines_read += 1;
            // +1 for each newline
            stats.bytes_read += line.len() as u64 + 1;
            on_line(line)
                .with_context(|| format!("Failed to handle line {} of {}", stats.lines_read, source))
        };

        match source {
            Source::Local(path) if self.config.use_mmap => visit_mmap_lines(path, &mut counted)?,
            Source::Local(path) => self.visit_local_lines(path, &mut counted).await?,
            Source::Remote { raw_url, .. } => self.visit_remote_lines(raw_url, &mut counted).await?,
        }

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Successfully read {}: {} lines, {} bytes in {}ms",
            stats.source, stats.lines_read, stats.bytes_read, stats.duration_ms
        );
        Ok(stats)
    }

    async fn visit_local_lines(&self, path: &Path, on_line: &mut dyn FnMut(&str) -> Result<()>) -> Result<()> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut line_no = 0;

        loop {
            line_no += 1;
            match lines.next_line().await {
                Ok(Some(line)) => on_line(&line)?,
                Ok(None) => break,
                Err(e) => {
                    warn!("Read error in {} at line {}: {}", path.display(), line_no, e);
                    return Err(e).with_context(|| {
                        format!("Failed to read {} at line {}", path.display(), line_no)
                    });
                }
            }
        }

        Ok(())
    }

    async fn visit_remote_lines(&self, raw_url: &str, on_line: &mut dyn FnMut(&str) -> Result<()>) -> Result<()> {
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(raw_url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {raw_url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Failed to fetch {raw_url}: HTTP status {status}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {raw_url}"))?;
        for line in body.lines() {
            on_line(line)?;
        }
        Ok(())
    }
}

/// Memory-mapped read of a local file, decoding one line at a time
fn visit_mmap_lines(path: &Path, on_line: &mut dyn FnMut(&str) -> Result<()>) -> Result<()> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    if len == 0 {
        return Ok(());
    }

    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe { MmapOptions::new().map(&file) }
        .with_context(|| format!("Failed to memory-map {}", path.display()))?;

    for (i, raw) in split_raw_lines(&mmap).enumerate() {
        let line = std::str::from_utf8(raw).with_context(|| {
            format!("Failed to read {} at line {}: invalid UTF-8", path.display(), i + 1)
        })?;
        on_line(line)?;
    }
    Ok(())
}

/// Byte lines with `\n` and `\r\n` terminators removed, matching `str::lines`
fn split_raw_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = bytes;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, next) = match rest.iter().position(|&b| b == b'\n') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, &rest[rest.len()..]),
        };
        rest = next;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    })
}
