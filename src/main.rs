use clap::Parser;
use folioscope::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
