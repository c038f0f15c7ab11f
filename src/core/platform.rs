//! Process-level entry helpers and error handling.

/// Handle application errors.
///
/// Prints the error chain to stderr and exits with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse and validate command line arguments.
///
/// Invalid arguments are reported the same way clap reports parse errors.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::{CommandFactory, Parser};
    let args = crate::core::cli::CliArgs::parse();
    if let Err(message) = args.validate() {
        crate::core::cli::CliArgs::command()
            .error(clap::error::ErrorKind::ValueValidation, message)
            .exit();
    }
    args
}
