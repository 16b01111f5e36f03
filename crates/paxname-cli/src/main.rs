//! paxname CLI.

use clap::Parser;

use paxname_cli::cli::{Cli, Command};
use paxname_cli::commands::{run_airlines, run_check_urls, run_normalize, run_verify};
use paxname_cli::logging::{init_logging, log_config_from_cli};
use paxname_cli::summary::{print_normalized, print_url_checks, print_verification};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Normalize(args) => match run_normalize(&args) {
            Ok(result) => {
                if args.json {
                    match serde_json::to_string_pretty(&result.output) {
                        Ok(json) => println!("{json}"),
                        Err(error) => {
                            eprintln!("error: {error}");
                            std::process::exit(1);
                        }
                    }
                } else {
                    print_normalized(&result);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Airlines(args) => match run_airlines(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Verify(args) => match run_verify(&args) {
            Ok(result) => {
                print_verification(&result);
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::CheckUrls(args) => match run_check_urls(&args) {
            Ok(checks) => {
                print_url_checks(&checks);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
