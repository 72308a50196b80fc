#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;

use argh::FromArgs;
use error::CliError;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Validate and resolve Basis Universal encoder options
struct TopLevel {
    /// log resolution details (overrides RUST_LOG)
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Encode(commands::encode::EncodeCmd),
    Create(commands::create::CreateCmd),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Encode(cmd) => commands::encode::handle_encode_command(cmd),
        Commands::Create(cmd) => commands::create::handle_create_command(cmd),
    }
}

fn main() -> ExitCode {
    let cli: TopLevel = argh::from_env();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TopLevel {
        TopLevel::from_args(&["ktx-codec-options"], args).unwrap()
    }

    #[test]
    fn dispatches_subcommands() {
        let cli = parse(&["-v", "encode", "--codec", "uastc"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Encode(cmd) => assert_eq!(cmd.codec.as_deref(), Some("uastc")),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = parse(&["create"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Create(cmd) => assert_eq!(cmd.encode, None),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(TopLevel::from_args(&["ktx-codec-options"], &[]).is_err());
    }
}
