use std::process;

use clap::{App, Arg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let matches = App::new("Chauffeur")
        .version(VERSION)
        .about("Interactive command shell with pluggable deliverables.")
        .arg(
            Arg::with_name("command")
                .short("c")
                .long("command")
                .value_name("command")
                .help("Run a single command line and exit.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .help(
                    "Load specific config file instead of default. \
                     The default config will be written to file if it doesn't exist.",
                )
                .value_name("config")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help(
                    "Sets verbosity level. Can be used multiple times, like '-v -v -v' or '-vvv'. \
                     With >=1 the shell prints input lines as they are read.",
                ),
        )
        .get_matches();

    process::exit(chauffeur::repl(&matches));
}
