//! Validation of the option argument and resolution of the input source.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while validating the command line.
#[derive(Debug, Error)]
pub enum CheckInputError {
    /// The option argument does not start with the `-` marker.
    #[error("Option not valid: '{0}'")]
    InvalidOption(String),
    /// Standard input was selected but is attached to a terminal.
    #[error("No data to process!")]
    NoData,
    /// The named input file does not exist or cannot be opened.
    #[error("File not found or not readable: '{0}'")]
    FileNotFound(PathBuf),
    /// The target name is empty or longer than three characters.
    #[error("Residue names must have one to three characters: '{0}'")]
    InvalidResidueName(String),
}

impl CheckInputError {
    /// Whether the error should be reported together with the usage text.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, CheckInputError::InvalidResidueName(_))
    }
}

/// Validate the option argument and resolve the input source.
///
/// The option must carry the replacement residue name attached to a leading
/// `-`. With a file argument the file is opened for buffered reading; without
/// one, standard input is used and must not be an interactive terminal. The
/// extracted name must be one to three characters long.
///
/// Returns the line source and the replacement name. Nothing here prints or
/// exits; the binary decides how failures reach the user.
pub fn check_input(
    option: &str,
    file: Option<&Path>,
) -> Result<(Box<dyn BufRead>, String), CheckInputError> {
    let name_to = match option.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => return Err(CheckInputError::InvalidOption(option.to_string())),
    };

    let source: Box<dyn BufRead> = match file {
        Some(path) => {
            if !path.is_file() {
                return Err(CheckInputError::FileNotFound(path.to_path_buf()));
            }
            let fh = File::open(path)
                .map_err(|_| CheckInputError::FileNotFound(path.to_path_buf()))?;
            Box::new(BufReader::new(fh))
        }
        None => {
            // Guard against sitting on an empty terminal waiting for data
            if io::stdin().is_terminal() {
                return Err(CheckInputError::NoData);
            }
            Box::new(BufReader::new(io::stdin()))
        }
    };

    let name_len = name_to.chars().count();
    if !(1..=3).contains(&name_len) {
        return Err(CheckInputError::InvalidResidueName(name_to));
    }

    Ok((source, name_to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> PathBuf {
        let root = env!("CARGO_MANIFEST_DIR");
        Path::new(root).join("test-data/macrocycle.pdb")
    }

    #[test]
    fn resolves_file_source() {
        let path = fixture();
        let (mut source, name_to) = check_input("-INH", Some(path.as_path())).unwrap();
        assert_eq!(name_to, "INH");

        let mut first_line = String::new();
        source.read_line(&mut first_line).unwrap();
        assert!(first_line.starts_with("HEADER"));
    }

    #[test]
    fn accepts_names_of_one_to_three_chars() {
        let path = fixture();
        for option in ["-A", "-BC", "-INH"] {
            let (_, name_to) = check_input(option, Some(path.as_path())).unwrap();
            assert_eq!(name_to, &option[1..]);
        }
    }

    #[test]
    fn rejects_option_without_marker() {
        let err = check_input("INH", Some(fixture().as_path())).err().unwrap();
        assert!(matches!(err, CheckInputError::InvalidOption(_)));
        assert!(err.is_usage_error());
    }

    #[test]
    fn rejects_missing_file() {
        let path = Path::new("no-such-dir/no-such-file.pdb");
        let err = check_input("-INH", Some(path)).err().unwrap();
        assert!(matches!(err, CheckInputError::FileNotFound(_)));
        assert!(err.is_usage_error());
    }

    #[test]
    fn rejects_bad_name_lengths() {
        let path = fixture();
        for option in ["-", "-LIGAND"] {
            let err = check_input(option, Some(path.as_path())).err().unwrap();
            assert!(matches!(err, CheckInputError::InvalidResidueName(_)));
            // Length failures report without the usage text
            assert!(!err.is_usage_error());
        }
    }

    #[test]
    fn option_shape_is_checked_before_the_file() {
        let path = Path::new("no-such-dir/no-such-file.pdb");
        let err = check_input("INH", Some(path)).err().unwrap();
        assert!(matches!(err, CheckInputError::InvalidOption(_)));
    }
}
