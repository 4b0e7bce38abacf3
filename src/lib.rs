pub mod keywords;
pub mod section;
pub mod sentence_detector;
pub mod scanner;
pub mod rewriter;
pub mod manifest;
pub mod reader;

// Re-export main types for convenient access
pub use keywords::{find_keyword, Keyword, KeywordMatch};
pub use section::SectionTracker;
pub use sentence_detector::{CompletedSentence, SentenceSegmenter};
pub use scanner::{scan, scan_lines, scan_str, Occurrence, ScanStats, Scanner};

// Re-export output formats
pub use rewriter::{rewrite, rewrite_lines, rewrite_str, Rewriter};
pub use manifest::{Manifest, Requirement};

// Re-export input acquisition
pub use reader::{InputReader, ReadStats, ReaderConfig, Source};
