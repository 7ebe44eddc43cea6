//! Parsing command-line arguments.

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// A struct to store the parse results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Args {
    pub(crate) input: Option<PathBuf>,
    pub(crate) output: PathBuf,
    pub(crate) config: Option<PathBuf>,
    pub(crate) workers: Option<usize>,
    pub(crate) generations: Option<usize>,
    pub(crate) show: usize,
    pub(crate) resume: Option<PathBuf>,
    pub(crate) save: Option<PathBuf>,
    pub(crate) verbose: u8,
}

/// The command-line interface.
pub(crate) fn command() -> Command {
    command!()
        .long_about(
            "Simulates a five-state cellular automaton\n\
             \n\
             The grid is read from a text file with one row per line:\n\
             * `O` is a healthy positive cell;\n\
             * `o` is a weakened positive cell;\n\
             * `.` is a dead cell;\n\
             * `x` is a weakened negative cell;\n\
             * `X` is a healthy negative cell.\n\
             \n\
             Each generation is computed in parallel by splitting the grid \
             into bands of rows. The result does not depend on the number \
             of processes.\n",
        )
        .arg(
            Arg::new("INPUT")
                .help("Path to the input grid")
                .short('i')
                .long("input")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("RESUME"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Path to the output grid")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("PROCESSES")
                .help("Number of worker threads [default: 1]")
                .long_help(
                    "Number of worker threads [default: 1]\n\
                     It is reduced to the number of rows when the grid is smaller.\n",
                )
                .short('p')
                .long("processes")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to simulate [default: 100]")
                .short('g')
                .long("generations")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .long_help(
                    "Reads the configuration from a JSON, YAML or TOML file\n\
                     The format is chosen by the file extension. \
                     -p and -g override the values in the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("RESUME"),
        )
        .arg(
            Arg::new("SHOW")
                .help("Prints the grid after each of the first N generations")
                .long("show")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("RESUME")
                .help("Resumes from a save file instead of reading the input grid")
                .long("resume")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("INPUT"),
        )
        .arg(
            Arg::new("SAVE")
                .help("Saves the final state to a file, to be resumed later")
                .long("save")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Prints more logs; can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> clap::error::Result<Self> {
        let matches = command().try_get_matches()?;
        Ok(Args::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Args {
            input: matches.get_one::<PathBuf>("INPUT").cloned(),
            output: matches
                .get_one::<PathBuf>("OUTPUT")
                .cloned()
                .unwrap_or_default(),
            config: matches.get_one::<PathBuf>("CONFIG").cloned(),
            workers: matches.get_one::<usize>("PROCESSES").copied(),
            generations: matches.get_one::<usize>("GENERATIONS").copied(),
            show: matches.get_one::<usize>("SHOW").copied().unwrap_or(0),
            resume: matches.get_one::<PathBuf>("RESUME").cloned(),
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            verbose: matches.get_count("VERBOSE"),
        }
    }
}
