//! Phonebook server entry point
//!
//! Delegates everything to `cli::run` and turns a start-up failure into a
//! non-zero exit.

use phonebook::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
