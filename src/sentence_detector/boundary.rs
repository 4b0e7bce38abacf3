// WHY: per-character boundary classification for line-oriented markdown prose
// Positions are byte indices into an already trimmed line; every boundary character is ASCII

/// What a character at a given position does to the sentence in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Ordinary sentence content
    None,
    /// Heading marker at the start of the line: the whole line is discarded
    Ignore,
    /// List bullet: flush what came before, then start a new sentence with this character
    Pre,
    /// Terminator: append this character, then flush
    Post,
    /// Blank line: flush with nothing following
    BlankFlush,
}

/// Classify the character starting at byte `at` of the trimmed `line`
pub fn classify(line: &str, at: usize) -> BoundaryKind {
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return BoundaryKind::BlankFlush;
    }

    let Some(&current) = bytes.get(at) else {
        return BoundaryKind::None;
    };
    let next = bytes.get(at + 1).copied();

    match current {
        b'#' if at == 0 => BoundaryKind::Ignore,
        b'-' | b'*' if at == 0 && next == Some(b' ') => BoundaryKind::Pre,
        b'.' | b'!' | b'?' | b';' if next.is_none() || next == Some(b' ') => BoundaryKind::Post,
        _ => BoundaryKind::None,
    }
}
