//! knight-paths - every shortest knight path between two squares

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = knight_paths::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
