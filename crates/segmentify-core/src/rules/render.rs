//! Text rendering of sections into any `io::Write`.

use std::io::{self, Write};

use super::section::SectionKind;
use super::templates;
use crate::tally::KeyCount;

/// One labelled rule: `@<label>` followed by its matcher line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    pub label: &'a str,
    pub matcher: String,
}

/// Build the rule for one tallied key, or `None` if the key has no label.
pub fn rule_for<'a>(kind: SectionKind, key: &'a str) -> Option<Rule<'a>> {
    if let Some(depth) = kind.depth() {
        let label = depth.label(key)?;
        return Some(Rule {
            label,
            matcher: format!("url *{key}/*"),
        });
    }
    match kind {
        SectionKind::ParameterKeys if !key.is_empty() => Some(Rule {
            label: key,
            matcher: format!("query *{key}=*"),
        }),
        _ => None,
    }
}

fn write_header<W: Write>(w: &mut W, kind: SectionKind) -> io::Result<()> {
    writeln!(w, "[segment:{}]", kind.name())
}

fn write_end<W: Write>(w: &mut W, kind: SectionKind) -> io::Result<()> {
    writeln!(w, "# ----End of {} Segment----", kind.name())
}

/// Write a data-driven section for `entries` (already sorted). Returns the
/// number of labelled rules written.
pub fn write_data_section<W: Write>(
    w: &mut W,
    kind: SectionKind,
    entries: &[KeyCount],
) -> io::Result<usize> {
    write_header(w, kind)?;
    w.write_all(b"@Home\npath /\n\n")?;

    let mut rules = 0;
    for entry in entries {
        if let Some(rule) = rule_for(kind, &entry.key) {
            write!(w, "@{}\n{}\n\n", rule.label, rule.matcher)?;
            rules += 1;
        }
    }

    w.write_all(b"@~Other\npath /*\n")?;
    write_end(w, kind)?;

    writeln!(w, "\n# ----{} URL analysis----", kind.name())?;
    for entry in entries {
        writeln!(w, "# --{} (URLs found: {})", entry.key, entry.count)?;
    }
    Ok(rules)
}

/// Write a fixed-text section. Data-driven kinds are rejected.
pub fn write_static_section<W: Write>(w: &mut W, kind: SectionKind) -> io::Result<()> {
    let body = templates::static_body(kind).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a static section", kind.name()),
        )
    })?;
    write_header(w, kind)?;
    w.write_all(body.as_bytes())?;
    write_end(w, kind)
}
