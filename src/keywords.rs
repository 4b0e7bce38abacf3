// WHY: RFC 2119 keyword lookup with leftmost-match semantics
// Priority order only breaks ties between keywords starting at the same byte

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normative requirement-level keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    #[serde(rename = "MUST NOT")]
    MustNot,
    #[serde(rename = "MUST")]
    Must,
    #[serde(rename = "REQUIRED")]
    Required,
    #[serde(rename = "SHOULD NOT")]
    ShouldNot,
    #[serde(rename = "SHOULD")]
    Should,
    #[serde(rename = "SHALL NOT")]
    ShallNot,
    #[serde(rename = "SHALL")]
    Shall,
    #[serde(rename = "NOT RECOMMENDED")]
    NotRecommended,
    #[serde(rename = "RECOMMENDED")]
    Recommended,
    #[serde(rename = "MAY")]
    May,
}

impl Keyword {
    /// All keywords in tie-break priority order
    pub const PRIORITY: [Keyword; 10] = [
        Keyword::MustNot,
        Keyword::Must,
        Keyword::Required,
        Keyword::ShouldNot,
        Keyword::Should,
        Keyword::ShallNot,
        Keyword::Shall,
        Keyword::NotRecommended,
        Keyword::Recommended,
        Keyword::May,
    ];

    /// Literal text as it appears in a document
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::MustNot => "MUST NOT",
            Keyword::Must => "MUST",
            Keyword::Required => "REQUIRED",
            Keyword::ShouldNot => "SHOULD NOT",
            Keyword::Should => "SHOULD",
            Keyword::ShallNot => "SHALL NOT",
            Keyword::Shall => "SHALL",
            Keyword::NotRecommended => "NOT RECOMMENDED",
            Keyword::Recommended => "RECOMMENDED",
            Keyword::May => "MAY",
        }
    }

    /// Byte length of the literal text
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Keyword text with spaces replaced by underscores, e.g. `MUST_NOT`
    pub fn identifier(&self) -> String {
        self.as_str().replace(' ', "_")
    }

    /// Lowercase anchor stem, e.g. `must_not`
    pub fn anchor_stem(&self) -> String {
        self.identifier().to_lowercase()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword located within a text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub keyword: Keyword,
    /// Byte index of the first character of the keyword
    pub start: usize,
}

impl KeywordMatch {
    /// Byte index one past the last character of the keyword
    pub fn end(&self) -> usize {
        self.start + self.keyword.len()
    }
}

/// Find the leftmost keyword in `text`.
///
/// Every keyword is searched for; the smallest start index wins and the first
/// keyword in [`Keyword::PRIORITY`] wins an exact tie. A phrase split across a
/// line break is not seen here, so `MUST` at the end of a line followed by
/// `NOT` on the next is reported as plain `MUST`.
pub fn find_keyword(text: &str) -> Option<KeywordMatch> {
    let mut best: Option<KeywordMatch> = None;

    for keyword in Keyword::PRIORITY {
        if let Some(start) = text.find(keyword.as_str()) {
            match best {
                Some(current) if current.start <= start => {}
                _ => best = Some(KeywordMatch { keyword, start }),
            }
        }
    }

    best
}

/// Iterate over every keyword in `text`, re-scanning the remainder after each match
pub fn find_all_keywords(text: &str) -> KeywordIter<'_> {
    KeywordIter { text, cursor: 0 }
}

/// Iterator returned by [`find_all_keywords`]
pub struct KeywordIter<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for KeywordIter<'a> {
    type Item = KeywordMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let found = find_keyword(&self.text[self.cursor..])?;
        let absolute = KeywordMatch {
            keyword: found.keyword,
            start: self.cursor + found.start,
        };
        self.cursor = absolute.end();
        Some(absolute)
    }
}
