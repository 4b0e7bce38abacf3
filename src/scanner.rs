// WHY: single forward pass that attributes every keyword to one sentence, section and index
// Keywords found before their sentence completes wait in a pending queue until the flush

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead};
use tracing::{debug, info};

use crate::keywords::{find_all_keywords, Keyword};
use crate::section::{heading_depth, SectionTracker};
use crate::sentence_detector::{CompletedSentence, SentenceSegmenter};

/// One normative keyword found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub word: Keyword,
    /// Byte offset of the keyword within `sentence`
    pub offset: usize,
    /// Dot-separated section path, `0` before any heading
    pub section: String,
    /// Zero-based rank within `section`
    pub index: usize,
    /// 1-based source lines spanned by `sentence`
    pub lines: Vec<usize>,
    pub sentence: String,
}

impl Occurrence {
    /// Keyword text sliced out of the owning sentence
    pub fn keyword_text(&self) -> Option<&str> {
        self.sentence.get(self.offset..self.offset + self.word.len())
    }

    /// Line reference in permalink form: `L4` or `L4-L6`
    pub fn line_reference(&self) -> String {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) if first != last => format!("L{first}-L{last}"),
            (Some(first), _) => format!("L{first}"),
            _ => String::new(),
        }
    }

    /// Sentence with the keyword wrapped in markdown bold
    pub fn highlighted(&self) -> String {
        let end = self.offset + self.word.len();
        match (self.sentence.get(..self.offset), self.sentence.get(end..)) {
            (Some(before), Some(after)) => format!("{before}**{}**{after}", self.word),
            _ => self.sentence.clone(),
        }
    }

    /// Tab-separated listing line: `section-index  word  lines  sentence`,
    /// with the keyword bolded inside the sentence
    pub fn format_listing(&self) -> String {
        format!(
            "{}-{}\t{}\t{}\t{}",
            self.section,
            self.index,
            self.word,
            self.line_reference(),
            self.highlighted()
        )
    }
}

/// Counters reported after a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_scanned: usize,
    pub headings: usize,
    pub sentences: usize,
    pub occurrences: usize,
}

/// Streaming scan state; feed lines in order, then call [`Scanner::finish`]
#[derive(Debug, Default)]
pub struct Scanner {
    sections: SectionTracker,
    segmenter: SentenceSegmenter,
    pending: Vec<Occurrence>,
    found: Vec<Occurrence>,
    line_no: usize,
    headings: usize,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one physical line (without its line terminator)
    pub fn scan_line(&mut self, raw: &str) {
        self.line_no += 1;
        let line_no = self.line_no;

        let depth = heading_depth(raw);
        if depth > 0 {
            self.sections.on_heading(depth);
            self.headings += 1;
            debug!(
                line = line_no,
                depth = self.sections.depth(),
                section = %self.sections.current_section(),
                "Heading"
            );
        }

        let line = raw.trim();
        let mut cursor = 0;

        // heading text is not sentence material, so keywords there have no owner
        if !line.starts_with('#') {
            for found in find_all_keywords(line) {
                let completed = self.segmenter.ingest(line, cursor, found.start, line_no);
                self.attribute(completed);

                let occurrence = Occurrence {
                    word: found.keyword,
                    offset: self.segmenter.pending_offset(),
                    section: self.sections.current_section(),
                    index: self.sections.next_occurrence_index(),
                    lines: Vec::new(),
                    sentence: String::new(),
                };
                self.pending.push(occurrence);

                let completed = self.segmenter.ingest(line, found.start, found.end(), line_no);
                self.attribute(completed);
                cursor = found.end();
            }
        }

        let completed = self.segmenter.ingest(line, cursor, line.len(), line_no);
        self.attribute(completed);
        self.segmenter.end_line();
    }

    /// Flush the trailing sentence and return every occurrence in document order
    pub fn finish(mut self) -> (Vec<Occurrence>, ScanStats) {
        if self.segmenter.has_pending() {
            debug!(line = self.line_no, "Flushing unterminated sentence at end of input");
        }
        if let Some(sentence) = self.segmenter.finish() {
            self.attribute(vec![sentence]);
        }
        debug_assert!(self.pending.is_empty(), "pending occurrences left after final flush");

        let stats = ScanStats {
            lines_scanned: self.line_no,
            headings: self.headings,
            sentences: self.segmenter.sentences_flushed(),
            occurrences: self.found.len(),
        };
        info!(
            lines = stats.lines_scanned,
            sentences = stats.sentences,
            occurrences = stats.occurrences,
            "Scan complete"
        );
        (self.found, stats)
    }

    /// Hand queued occurrences to the first completed sentence
    fn attribute(&mut self, completed: Vec<CompletedSentence>) {
        for sentence in completed {
            if self.pending.is_empty() {
                continue;
            }
            for mut occurrence in self.pending.drain(..) {
                occurrence.sentence = sentence.text.clone();
                occurrence.lines = sentence.lines.clone();
                debug_assert_eq!(
                    occurrence.keyword_text(),
                    Some(occurrence.word.as_str()),
                    "offset does not point at the keyword"
                );
                self.found.push(occurrence);
            }
        }
    }
}

/// Scan a stream of lines, stopping at the first read error
pub fn scan_lines<I, S>(lines: I) -> io::Result<Vec<Occurrence>>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new();
    for line in lines {
        scanner.scan_line(line?.as_ref());
    }
    Ok(scanner.finish().0)
}

/// Scan a buffered reader line by line
pub fn scan<R: BufRead>(reader: R) -> Result<Vec<Occurrence>> {
    Ok(scan_lines(reader.lines())?)
}

/// Scan an in-memory document
pub fn scan_str(text: &str) -> Vec<Occurrence> {
    let mut scanner = Scanner::new();
    for line in text.lines() {
        scanner.scan_line(line);
    }
    scanner.finish().0
}
