// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};
use msbit::bits::{
    checked_most_significant_bit, checked_position_of_most_significant_bit, most_significant_bit,
    position_of_most_significant_bit,
};
use msbit::self_test::run_self_test;
use msbit_cli::parse_value;
use std::io::{Error, ErrorKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msb-cli")]
#[command(about = "Isolate the most significant bit of a 64-bit integer and find its position", long_about = None)]
struct Cli {
    /// Runs the self-test if omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in known-answer tests.
    SelfTest,

    /// Print the value with only the most significant bit set.
    Isolate(Arg),

    /// Print the zero-based position of the most significant bit.
    Position(Arg),
}

#[derive(Parser, Clone)]
struct Arg {
    /// Decimal, 0x-prefixed hex or 0b-prefixed binary value.
    #[clap(short, long)]
    value: String,

    /// Reject inputs that are zero (for position) or have bit 63 set.
    #[clap(long)]
    checked: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = Cli::parse().command.unwrap_or(Command::SelfTest);
    match execute(cmd) {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) if e.kind() == ErrorKind::Other => {
            println!("Error: {}", e);
            std::process::exit(exitcode::SOFTWARE);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn execute(cmd: Command) -> Result<(), std::io::Error> {
    match cmd {
        Command::SelfTest => match run_self_test() {
            Ok(passed) => {
                info!("{} self-test cases passed", passed);
                println!("All test cases successfully passed!");
                Ok(())
            }
            Err(failures) => {
                let message = failures
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join("\nError: ");
                Err(Error::new(ErrorKind::Other, message))
            }
        },
        Command::Isolate(arg) => {
            let x = parse_arg(&arg)?;
            let isolated = if arg.checked {
                checked_most_significant_bit(x)
                    .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?
            } else {
                most_significant_bit(x)
            };
            debug!("Isolated {:#x} from {:#x}", isolated, x);
            println!("Isolated: {}", isolated);
            Ok(())
        }
        Command::Position(arg) => {
            let x = parse_arg(&arg)?;
            let position = if arg.checked {
                checked_position_of_most_significant_bit(x)
                    .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?
            } else {
                position_of_most_significant_bit(x)
            };
            debug!("Position of most significant bit of {:#x} is {}", x, position);
            println!("Position: {}", position);
            Ok(())
        }
    }
}

fn parse_arg(arg: &Arg) -> Result<u64, std::io::Error> {
    parse_value(&arg.value).map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))
}
