// WHY: line-by-line markdown rewrite that anchors every normative keyword in place
// Offsets here are relative to the raw line, unlike scanner occurrences

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::keywords::find_all_keywords;
use crate::section::{heading_depth, SectionTracker};

/// Streaming rewriter state; one instance per document
#[derive(Debug, Default)]
pub struct Rewriter {
    sections: SectionTracker,
    tags: Vec<String>,
}

impl Rewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `line` with an anchor and back-reference spliced around each keyword.
    ///
    /// Tags look like `must_not-1.2-3`: keyword stem, section path, then a
    /// 1-based sequence number that restarts at every heading. Heading lines
    /// pass through untouched, as the scanner reports no occurrences there.
    pub fn annotate_line(&mut self, line: &str) -> String {
        let depth = heading_depth(line);
        if depth > 0 {
            self.sections.on_heading(depth);
        }
        if line.trim_start().starts_with('#') {
            return line.to_string();
        }
        let section = self.sections.current_section();

        let mut out = String::with_capacity(line.len());
        let mut cursor = 0;
        for found in find_all_keywords(line) {
            out.push_str(&line[cursor..found.start]);

            let label = format!("{section}-{}", self.sections.next_occurrence_index() + 1);
            let tag = format!("{}-{label}", found.keyword.anchor_stem());
            out.push_str(&format!(
                r#"<a name="{tag}"></a>{}<sup>[{label}](#{tag})</sup>"#,
                found.keyword
            ));
            self.tags.push(tag);
            cursor = found.end();
        }
        out.push_str(&line[cursor..]);
        out
    }

    /// Tags emitted so far, in document order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Hidden index block listing every tag, newline-terminated
    pub fn index_block(&self) -> String {
        let mut block = String::from("<!--\n");
        for tag in &self.tags {
            block.push_str(&format!("- [{tag}](#{tag})\n"));
        }
        block.push_str("-->\n");
        block
    }

    pub fn write_index<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.index_block().as_bytes())
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

/// Rewrite a stream of lines into `out`, returning the emitted tags.
///
/// Lines already written stay written when a read error interrupts the stream.
pub fn rewrite_lines<I, S, W>(lines: I, out: &mut W) -> io::Result<Vec<String>>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
    W: Write,
{
    let mut rewriter = Rewriter::new();
    for line in lines {
        let annotated = rewriter.annotate_line(line?.as_ref());
        writeln!(out, "{annotated}")?;
    }
    rewriter.write_index(out)?;
    out.flush()?;

    info!(anchors = rewriter.tags().len(), "Rewrite complete");
    Ok(rewriter.into_tags())
}

/// Rewrite a buffered reader into `out`
pub fn rewrite<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<Vec<String>> {
    Ok(rewrite_lines(reader.lines(), out)?)
}

/// Rewrite an in-memory document
pub fn rewrite_str(text: &str) -> String {
    let mut rewriter = Rewriter::new();
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(&rewriter.annotate_line(line));
        out.push('\n');
    }
    out.push_str(&rewriter.index_block());
    out
}
