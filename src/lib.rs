#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Library interface
//!
//! The binary is a thin shim over three pieces exposed here:
//! [`check_input`] resolves the command line into a readable source and a
//! validated target name, [`RewrittenLines`] streams the rewrite one line at
//! a time, and [`rename_residues`] drives a full source-to-sink pass for
//! callers that do not need the iterator.

mod records;
mod resolver;
mod rewriter;

// Re-export key public types
pub use records::{is_coordinate_record, COORDINATE_RECORDS, RESNAME_END, RESNAME_START};
pub use resolver::{check_input, CheckInputError};
pub use rewriter::{rewrite_line, RewrittenLines};

use std::io::{self, BufRead, Write};
use tracing::debug;

/// Rewrite every coordinate record from `source` and write the result to
/// `sink`.
///
/// One output line per input line, order preserved, single forward pass.
/// The sink is flushed before returning.
///
/// # Example
///
/// ```
/// use pdb_bulkresname::rename_residues;
///
/// let input = "ATOM      1  N   LYS A  12      11.104  13.207  10.578  1.00 20.00           N\n";
/// let mut output = Vec::new();
/// rename_residues(input.as_bytes(), "INH", &mut output).unwrap();
/// assert_eq!(&output[17..20], b"INH");
/// ```
pub fn rename_residues<R: BufRead, W: Write>(
    source: R,
    name_to: &str,
    mut sink: W,
) -> io::Result<()> {
    let mut n_lines: u64 = 0;
    for line in RewrittenLines::new(source, name_to) {
        sink.write_all(line?.as_bytes())?;
        n_lines += 1;
    }
    sink.flush()?;
    debug!("Processed {n_lines} lines");
    Ok(())
}
