//! Bookshelf CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and exits non-zero on
//! failure. All real work lives in `cli`.

use bookshelf::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
