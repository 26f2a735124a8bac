//! lptools - LiquidPlanner task and member reports

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = lptools::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
