// WHY: incremental sentence segmentation over trimmed markdown lines
// Lines are fed in fragments so callers can read the pending offset between fragments

use tracing::debug;

pub mod boundary;

pub use boundary::{classify, BoundaryKind};

/// Sentence finalized by the segmenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSentence {
    /// Trimmed sentence text
    pub text: String,
    /// 1-based source lines that contributed non-whitespace text, in order
    pub lines: Vec<usize>,
}

/// Partial sentence text plus the lines contributing to it
#[derive(Debug, Default)]
struct PendingSentence {
    text: String,
    lines: Vec<usize>,
}

impl PendingSentence {
    fn push(&mut self, ch: char, line_no: usize) {
        self.text.push(ch);
        if !ch.is_whitespace() && self.lines.last() != Some(&line_no) {
            self.lines.push(line_no);
        }
    }

    /// Take the trimmed text, or `None` when nothing but whitespace accumulated
    fn take(&mut self) -> Option<CompletedSentence> {
        let text = self.text.trim();
        let completed = if text.is_empty() {
            None
        } else {
            Some(CompletedSentence {
                text: text.to_string(),
                lines: std::mem::take(&mut self.lines),
            })
        };
        self.text.clear();
        self.lines.clear();
        completed
    }
}

/// Line-oriented sentence segmenter with markdown-aware boundaries
#[derive(Debug, Default)]
pub struct SentenceSegmenter {
    pending: PendingSentence,
    ignoring_line: bool,
    sentences_flushed: usize,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest bytes `start..end` of the trimmed `line`.
    ///
    /// Boundary checks look at the whole line, so a terminator at the end of
    /// a fragment is only a boundary when it also ends the line or is followed
    /// by a space. Returns every sentence completed by this fragment, in order.
    pub fn ingest(
        &mut self,
        line: &str,
        start: usize,
        end: usize,
        line_no: usize,
    ) -> Vec<CompletedSentence> {
        let mut completed = Vec::new();

        if start == 0 {
            match classify(line, 0) {
                BoundaryKind::BlankFlush => {
                    self.flush_into(&mut completed);
                    return completed;
                }
                BoundaryKind::Ignore => {
                    self.ignoring_line = true;
                }
                _ => {}
            }
        }
        if self.ignoring_line {
            return completed;
        }

        for (i, ch) in line[start..end].char_indices() {
            match classify(line, start + i) {
                BoundaryKind::Pre => {
                    self.flush_into(&mut completed);
                    self.pending.push(ch, line_no);
                }
                BoundaryKind::Post => {
                    self.pending.push(ch, line_no);
                    self.flush_into(&mut completed);
                }
                BoundaryKind::None => self.pending.push(ch, line_no),
                // only reachable at position 0, handled above
                BoundaryKind::Ignore | BoundaryKind::BlankFlush => {}
            }
        }

        completed
    }

    /// Close the current physical line.
    ///
    /// Unterminated text gets a single space so words on adjacent lines do not
    /// run together.
    pub fn end_line(&mut self) {
        if self.ignoring_line {
            self.ignoring_line = false;
            return;
        }
        let text = &mut self.pending.text;
        if !text.is_empty() && !text.ends_with(char::is_whitespace) {
            text.push(' ');
        }
    }

    /// Force out whatever has accumulated, e.g. at end of input
    pub fn finish(&mut self) -> Option<CompletedSentence> {
        self.ignoring_line = false;
        let mut completed = Vec::new();
        self.flush_into(&mut completed);
        completed.pop()
    }

    /// Byte offset the next ingested character will have in the trimmed sentence
    pub fn pending_offset(&self) -> usize {
        self.pending.text.trim_start().len()
    }

    /// Whether any non-whitespace text is waiting for a boundary
    pub fn has_pending(&self) -> bool {
        !self.pending.text.trim().is_empty()
    }

    /// Number of non-empty sentences emitted so far
    pub fn sentences_flushed(&self) -> usize {
        self.sentences_flushed
    }

    fn flush_into(&mut self, completed: &mut Vec<CompletedSentence>) {
        if let Some(sentence) = self.pending.take() {
            debug!(lines = ?sentence.lines, "Sentence completed");
            self.sentences_flushed += 1;
            completed.push(sentence);
        }
    }
}
