//! Path tokenizing for extract lines.
//!
//! A line is treated as opaque text split on `/`: `https://host/a/b` splits into
//! `["https:", "", "host", "a", "b"]`. Keys are prefixes made of the first N
//! segments; labels are single segments picked out of a key.

/// Lines containing this character are dropped from every tally.
pub const QUOTE: char = '"';

/// True when a line must be ignored by every pass.
pub fn is_skipped(line: &str) -> bool {
    line.contains(QUOTE)
}

/// How deep into the URL a folder-style key reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// `scheme://host`
    Host,
    /// `scheme://host/seg1`
    Level1,
    /// `scheme://host/seg1/seg2`
    Level2,
}

impl Depth {
    /// Number of `/`-separated segments the key is made of.
    pub const fn segment_count(self) -> usize {
        match self {
            Depth::Host => 3,
            Depth::Level1 => 4,
            Depth::Level2 => 5,
        }
    }

    /// Segment index used as the rule label. Both folder depths are labelled by
    /// the first path segment.
    pub const fn label_index(self) -> usize {
        match self {
            Depth::Host => 2,
            Depth::Level1 | Depth::Level2 => 3,
        }
    }

    /// Tally key for `line`, or `None` when the line has too few segments or
    /// the key is blank. Surrounding whitespace is trimmed.
    pub fn key(self, line: &str) -> Option<&str> {
        prefix_segments(line, self.segment_count())
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Rule label for a key produced by [`Depth::key`]. Returned verbatim.
    pub fn label(self, key: &str) -> Option<&str> {
        key.split('/')
            .nth(self.label_index())
            .filter(|l| !l.is_empty())
    }

    /// Key and label together; lines whose label would be empty do not qualify.
    pub fn key_and_label(self, line: &str) -> Option<(&str, &str)> {
        let key = self.key(line)?;
        let label = self.label(key)?;
        Some((key, label))
    }
}

/// Join of the first `n` `/`-separated segments of `line`, i.e. everything up
/// to (not including) the `n`th slash. `None` if the line has fewer than `n`
/// segments.
pub fn prefix_segments(line: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    let mut slashes = 0;
    for (i, b) in line.bytes().enumerate() {
        if b == b'/' {
            slashes += 1;
            if slashes == n {
                return Some(&line[..i]);
            }
        }
    }
    if slashes + 1 >= n {
        Some(line)
    } else {
        None
    }
}

/// Query-parameter keys in `line`: for each `?`-separated part after the first,
/// the trimmed text before its first `=`. Blank keys are skipped.
pub fn query_keys(line: &str) -> impl Iterator<Item = &str> {
    line.split('?')
        .skip(1)
        .filter_map(|part| part.find('=').map(|i| part[..i].trim()))
        .filter(|k| !k.is_empty())
}

/// True when the line carries a query string.
pub fn has_query(line: &str) -> bool {
    line.contains('?')
}

/// E-commerce platforms recognisable from URL shapes alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformHints {
    /// Salesforce Commerce Cloud (Demandware) controller paths.
    pub sfcc: bool,
    /// Shopify collection/product paths.
    pub shopify: bool,
}

impl PlatformHints {
    pub fn observe(&mut self, line: &str) {
        if !self.sfcc && line.contains("/demandware/") {
            self.sfcc = true;
        }
        if !self.shopify && line.contains("/collections/") && line.contains("/products/") {
            self.shopify = true;
        }
    }
}
