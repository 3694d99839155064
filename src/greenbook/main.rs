//! # Greenbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into a message on stderr and
//! exit code 1.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring and one handler per subcommand
//! - `cli/print.rs`: table and message output
//!
//! Everything from the library's `api.rs` inward is UI agnostic; the CLI
//! owns argument parsing, logging setup, printing and the process exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
