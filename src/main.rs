use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ocean_ke_check::{check_file, Outcome};

/// Checks the ocean scalar diagnostics file for a kinetic energy blowup
#[derive(Parser)]
#[command(name = "check_ocean_ke")]
struct Args {
    /// Path to the NetCDF scalar diagnostics file
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let outcome = match check_file(&args.path) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("check_ocean_ke: {err}");
            return ExitCode::from(2);
        }
    };

    println!("Max ocean KE {:.0}", outcome.kmax());
    match outcome {
        Outcome::WithinLimit(_) => ExitCode::SUCCESS,
        Outcome::ExceedsLimit(kmax) => {
            eprintln!("Stopping run because ocean KE {kmax:.0} exceeds limit");
            ExitCode::from(1)
        }
    }
}
