use clap::Parser;
use osctrader::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
