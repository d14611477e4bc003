// Builds the LaTeX table of median cycle counts (4 executables x 3 phases).

use std::fmt::Write as _;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::bench_params::{COLUMNS, EXECUTABLES, EXPECTED_ENTRIES, TABLE_CAPTION};
use crate::error::{BenchError, Result};
use crate::input::for_each_line;

pub type Row = [String; 3];

/// Keeps the lines that are digits only (after trimming); everything else is dropped.
pub fn collect_values<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for_each_line(reader, |line| {
        let v = line.trim();
        if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) {
            values.push(v.to_string());
        } else if !v.is_empty() {
            debug!(line = v, "skipping non-numeric line");
        }
    })?;
    Ok(values)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: [Row; 4],
}

impl Table {
    /// Groups 12 values row by row, in input order. Any other count is rejected.
    pub fn from_values(values: Vec<String>) -> Result<Table> {
        if values.len() != EXPECTED_ENTRIES {
            warn!(expected = EXPECTED_ENTRIES, found = values.len(), "median count mismatch");
            return Err(BenchError::ShapeMismatch {
                expected: EXPECTED_ENTRIES,
                found: values.len(),
            });
        }

        let mut it = values.into_iter();
        let rows = std::array::from_fn(|_| {
            std::array::from_fn(|_| it.next().unwrap_or_default())
        });
        Ok(Table { rows })
    }

    pub fn row(&self, i: usize) -> Option<&Row> {
        self.rows.get(i)
    }

    /// (executable name, row) pairs in the fixed executable order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &Row)> {
        EXECUTABLES.iter().copied().zip(self.rows.iter())
    }

    pub fn render_latex(&self) -> String {
        let mut out = String::new();
        // writes into a String cannot fail
        let _ = self.write_latex(&mut out);
        out
    }

    fn write_latex(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "\\begin{{table}}[h]")?;
        writeln!(out, "\\centering")?;
        writeln!(out, "\\begin{{tabular}}{{lccc}}")?;
        writeln!(out, "\\hline")?;
        writeln!(out, "Executable & {} & {} & {} \\\\", COLUMNS[0], COLUMNS[1], COLUMNS[2])?;
        writeln!(out, "\\hline")?;
        for (name, [a, b, c]) in self.rows() {
            writeln!(out, "{name} & {a} & {b} & {c} \\\\")?;
        }
        writeln!(out, "\\hline")?;
        writeln!(out, "\\end{{tabular}}")?;
        writeln!(out, "\\caption{{{TABLE_CAPTION}}}")?;
        writeln!(out, "\\end{{table}}")?;
        Ok(())
    }
}

/// Reads the whole input, validates the shape, then renders. Nothing is produced on error.
pub fn format_table<R: BufRead>(reader: R) -> Result<String> {
    let values = collect_values(reader)?;
    Ok(Table::from_values(values)?.render_latex())
}
