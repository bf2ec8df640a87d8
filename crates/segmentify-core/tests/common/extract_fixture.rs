//! Helpers for writing URL extracts and picking generated segment files apart.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Write `lines` (newline-terminated) to `dir/name` and return the path.
pub fn write_extract(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    std::fs::write(&path, body).unwrap();
    path
}

/// One `[segment:<name>]` block of a generated file.
#[derive(Debug, Clone)]
pub struct ParsedSection {
    pub name: String,
    pub lines: Vec<String>,
}

impl ParsedSection {
    /// Labels of the rules between `@Home` and the sink, in file order.
    pub fn labels(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| l.strip_prefix('@'))
            .filter(|l| *l != "Home" && *l != "~Other")
            .collect()
    }

    /// Matcher lines (`url *...`), in file order.
    pub fn url_matchers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.starts_with("url *"))
            .map(String::as_str)
            .collect()
    }

    /// `(key, count)` pairs from the analysis comment block.
    pub fn analysis(&self) -> Vec<(String, u64)> {
        self.lines
            .iter()
            .filter_map(|l| l.strip_prefix("# --"))
            .filter_map(|l| {
                let (key, rest) = l.rsplit_once(" (URLs found: ")?;
                let count = rest.strip_suffix(')')?.parse().ok()?;
                Some((key.to_string(), count))
            })
            .collect()
    }

    pub fn sink_count(&self) -> usize {
        self.lines.iter().filter(|l| *l == "@~Other").count()
    }
}

/// Split generated text into its sections.
pub fn parse_sections(text: &str) -> Vec<ParsedSection> {
    let mut out: Vec<ParsedSection> = Vec::new();
    for line in text.lines() {
        if let Some(name) = line
            .strip_prefix("[segment:")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            out.push(ParsedSection {
                name: name.to_string(),
                lines: Vec::new(),
            });
        } else if let Some(section) = out.last_mut() {
            section.lines.push(line.to_string());
        }
    }
    out
}

pub fn section<'a>(sections: &'a [ParsedSection], name: &str) -> &'a ParsedSection {
    sections
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("section {name} missing"))
}
