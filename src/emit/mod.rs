//! Table emission
//!
//! Formats computed alignment tables as literal initializer data for an
//! encoder's source. Computation lives in [`crate::alignment`]; this module
//! only renders what it is given.

use crate::alignment::AlignmentTable;
use crate::debug::debug_enabled;
use crate::models::Position;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Source syntax of the emitted tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// `new[] { (r, c), ... },` jagged array blocks, no comma after the last pair
    #[default]
    CSharp,
    /// `&[ (r, c), ... ],` slice blocks with trailing commas
    Rust,
}

impl FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(TableStyle::CSharp),
            "rust" | "rs" => Ok(TableStyle::Rust),
            other => Err(format!("unknown table style {:?} (expected csharp or rust)", other)),
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStyle::CSharp => f.write_str("csharp"),
            TableStyle::Rust => f.write_str("rust"),
        }
    }
}

/// Write one block of positions, including its terminating comma and newline
pub fn write_block<W: Write>(out: &mut W, positions: &[Position], style: TableStyle) -> fmt::Result {
    match style {
        TableStyle::CSharp => {
            out.write_str("new[]\n{\n")?;
            if let Some((last, rest)) = positions.split_last() {
                for pos in rest {
                    writeln!(out, "\t{},", pos)?;
                }
                writeln!(out, "\t{}", last)?;
            }
            out.write_str("},\n")
        }
        TableStyle::Rust => {
            out.write_str("&[\n")?;
            for pos in positions {
                writeln!(out, "\t{},", pos)?;
            }
            out.write_str("],\n")
        }
    }
}

/// Write one block per table, in the order given
pub fn write_tables<W: Write>(out: &mut W, tables: &[AlignmentTable], style: TableStyle) -> fmt::Result {
    for table in tables {
        if debug_enabled() {
            eprintln!(
                "EMIT: v{} {} positions ({})",
                table.version,
                table.positions.len(),
                style
            );
        }
        write_block(out, &table.positions, style)?;
    }
    Ok(())
}

/// Render tables into a new string
pub fn render_tables(tables: &[AlignmentTable], style: TableStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_tables(&mut out, tables, style);
    out
}
