// WHY: hierarchical section numbering derived from ATX heading depth
// Each scan owns a fresh tracker; nothing here is shared between scans

/// Heading depth counters plus the occurrence counter of the current section
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    counters: Vec<u32>,
    occurrences: usize,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a heading with `depth` leading `#` characters.
    ///
    /// The counter stack is resized to `depth` entries (new levels start at
    /// zero), then the deepest counter is incremented. Sibling headings reset
    /// the occurrence counter as well.
    pub fn on_heading(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        self.counters.resize(depth, 0);
        if let Some(last) = self.counters.last_mut() {
            *last += 1;
        }
        self.occurrences = 0;
    }

    /// Dot-separated path such as `1.2.3`, or `0` before the first heading
    pub fn current_section(&self) -> String {
        if self.counters.is_empty() {
            return "0".to_string();
        }
        self.counters
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Return the zero-based occurrence index and advance the counter
    pub fn next_occurrence_index(&mut self) -> usize {
        let index = self.occurrences;
        self.occurrences += 1;
        index
    }

    /// Current heading depth, 0 before the first heading
    pub fn depth(&self) -> usize {
        self.counters.len()
    }
}

/// Count the run of leading `#` characters in `line`
pub fn heading_depth(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}
