use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = tone_audio::cli::Cli::parse();
    match tone_audio::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
