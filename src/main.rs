use clap::Parser;
use pdb_bulkresname::{check_input, RewrittenLines};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Performs replacement of all residue names by a single specified name.

Usage:
    pdb-bulkresname -<TARGET> [<file>]

Example:
    pdb-bulkresname -INH macrocycle.pdb  # changes all residues to INH
";

#[derive(Parser, Debug, Clone)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Replacement residue name attached to the option marker, e.g. `-INH`
    #[arg(value_name = "-TARGET", allow_hyphen_values = true)]
    option: String,

    /// Input PDB file; standard input is read when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };
    trace!("{args:?}");

    let (source, name_to) = match check_input(&args.option, args.file.as_deref()) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("ERROR!! {e}");
            if e.is_usage_error() {
                eprint!("{USAGE}");
            }
            std::process::exit(1);
        }
    };
    debug!("Replacing all residue names with '{name_to}'");

    let stdout = io::stdout().lock();
    let mut sink = io::BufWriter::new(stdout);
    for line in RewrittenLines::new(source, &name_to) {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("ERROR!! Could not read input: {e}");
                std::process::exit(1);
            }
        };
        match sink.write_all(line.as_bytes()) {
            Ok(()) => {}
            // Downstream consumers like `head` may close the pipe early
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return,
            Err(e) => {
                eprintln!("ERROR!! Could not write output: {e}");
                std::process::exit(1);
            }
        }
    }
    if let Err(e) = sink.flush() {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("ERROR!! Could not write output: {e}");
            std::process::exit(1);
        }
    }
}
