use clap::Parser;
use folder_mirror::cli::Cli;
use folder_mirror::core::system::System;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let system = match System::initialize(&cli) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let succeeded = system.run().await;
    system.terminate();

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
