use clap::Parser;
use pxa_picker::cli::{self, CliArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    pxa_picker::logger::init(args.verbose);
    cli::run(args)
}
