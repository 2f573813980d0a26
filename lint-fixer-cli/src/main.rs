//! This crate is the binary executable's entrypoint.
use std::env;
use std::process::exit;

use lint_fixer_lib::run::run_main;

/// This function simply forwards CLI args to [`run_main()`] and exits with its
/// return code.
pub fn main() {
    exit(run_main(env::args().collect::<Vec<String>>()));
}
