mod cli;
mod exit_codes;
mod run;

use clap::Parser;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    exit_codes::ExitCode::Success.as_i32()
                }
                _ => exit_codes::ExitCode::InvalidInput.as_i32(),
            };
            std::process::exit(code);
        }
    };

    let code = match run::run(cli.resolution, &cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            exit_codes::ExitCode::RuntimeError.as_i32()
        }
    };

    std::process::exit(code);
}
