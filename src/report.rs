// src/report.rs
//
// Console rendering. Writes to any `io::Write` so tests can capture the
// output; the binary hands it stdout. A write failure propagates and is
// fatal to the run.

use std::io::{self, Write};

use crate::diff::Change;
use crate::records::Watched;

const RULE: &str = "----------------------------------------";

/// Optional terminal clear (ANSI, cursor to home).
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[1;1H")
}

pub fn banner<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")
}

pub fn no_changes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No changes detected.")
}

/// First run: announce that a snapshot is being created and list every
/// record in full.
pub fn first_run<W: Write, R: Watched>(out: &mut W, records: &[R]) -> io::Result<()> {
    writeln!(
        out,
        "No previous snapshot found. Saving current data ({} records).",
        records.len()
    )?;
    for record in records {
        writeln!(out, "{RULE}")?;
        record_block(out, record)?;
    }
    Ok(())
}

/// Itemized change report, one block per change, rule-separated.
pub fn changes<W: Write, R: Watched>(out: &mut W, changes: &[Change<R>]) -> io::Result<()> {
    writeln!(out, "The page has been updated!")?;
    for change in changes {
        writeln!(out, "{RULE}")?;
        match change {
            Change::Added(record) => {
                writeln!(out, "Added {}: {}", R::kind(), record.key())?;
                record_block(out, record)?;
            }
            Change::Modified { key, field, old, new } => {
                writeln!(out, "Changed {key} - {field}: '{old}' -> '{new}'")?;
            }
            Change::Removed { key } => {
                writeln!(out, "Removed {}: {}", R::kind(), key)?;
            }
        }
    }
    Ok(())
}

fn record_block<W: Write, R: Watched>(out: &mut W, record: &R) -> io::Result<()> {
    for (label, value) in record.fields() {
        writeln!(out, "  {label}: {value}")?;
    }
    let adjuntos = record.attachments();
    if !adjuntos.is_empty() {
        writeln!(out, "  Adjuntos:")?;
        for a in adjuntos {
            writeln!(out, "    - {} ({})", a.nombre, a.public_path)?;
        }
    }
    Ok(())
}
