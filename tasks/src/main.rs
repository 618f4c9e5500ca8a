use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::io::{Error, ErrorKind};

mod check;
mod eval;

// -------------------------------------------------------------------------------------------------
// CONSTANTS
// -------------------------------------------------------------------------------------------------

const DEFAULT_ITERATIONS: &str = "100000";
const DEFAULT_ROUND_TRIP_COUNT: &str = "10000";
const DEFAULT_SEED: &str = "0";

// -------------------------------------------------------------------------------------------------
// COMMAND LINE
// -------------------------------------------------------------------------------------------------

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_parser(value_parser!(u64))
        .default_value(DEFAULT_SEED)
        .help("Seed of the random operands")
}

fn command() -> Command {
    Command::new("tasks")
        .about("long-emul developer tasks")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Prints debug messages"),
        )
        .subcommand(
            Command::new("check")
                .about("Compares every operation with the native 64-bit integers")
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .value_parser(value_parser!(usize))
                        .default_value(DEFAULT_ITERATIONS)
                        .help("Number of random operand pairs, on top of the edge values"),
                )
                .arg(seed_arg()),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluates `<lhs> <op> <rhs>` on decimal operands")
                .arg(Arg::new("lhs").required(true).allow_hyphen_values(true))
                .arg(
                    Arg::new("op")
                        .required(true)
                        .value_parser(eval::OPERATORS)
                        .allow_hyphen_values(true),
                )
                .arg(Arg::new("rhs").required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Formats random values to decimal and parses them back")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_parser(value_parser!(usize))
                        .default_value(DEFAULT_ROUND_TRIP_COUNT)
                        .help("Number of random values"),
                )
                .arg(seed_arg()),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn required<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<&'a T, Error>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, format!("missing argument {id}")))
}

// -------------------------------------------------------------------------------------------------
// MAIN
// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), Error> {
    // We parse the input args
    let matches = command().get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .map_err(Error::other)?;

    match matches.subcommand() {
        Some(("check", sub_matches)) => {
            let iterations = *required::<usize>(sub_matches, "iterations")?;
            let seed = *required::<u64>(sub_matches, "seed")?;
            check::check_operations(iterations, seed)?;
        }
        Some(("eval", sub_matches)) => {
            let lhs = required::<String>(sub_matches, "lhs")?;
            let op = required::<String>(sub_matches, "op")?;
            let rhs = required::<String>(sub_matches, "rhs")?;
            println!("{}", eval::eval(lhs, op, rhs)?);
        }
        Some(("roundtrip", sub_matches)) => {
            let count = *required::<usize>(sub_matches, "count")?;
            let seed = *required::<u64>(sub_matches, "seed")?;
            check::check_decimal_round_trip(count, seed)?;
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}
