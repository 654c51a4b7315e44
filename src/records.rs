//! Record-type filter and fixed-column layout of PDB coordinate records.
//!
//! Only two structural facts of the format are relied upon: coordinate
//! records start with one of four keywords, and the residue-name field
//! occupies columns 18-20 (1-indexed).

/// Record keywords whose residue-name field is subject to rewriting.
pub const COORDINATE_RECORDS: [&str; 4] = ["ATOM", "HETATM", "TER", "ANISOU"];

/// Start of the residue-name field, 0-indexed.
pub const RESNAME_START: usize = 17;

/// End of the residue-name field, 0-indexed, exclusive.
pub const RESNAME_END: usize = 20;

/// Check whether a line is a coordinate record.
///
/// Membership is a plain prefix match against the start of the line,
/// matching how the PDB format tags records.
pub fn is_coordinate_record(line: &str) -> bool {
    COORDINATE_RECORDS.iter().any(|rec| line.starts_with(rec))
}
