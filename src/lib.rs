//! Chauffeur is an interactive command shell with pluggable deliverables.
//!
//! Commands implement the [`command::Command`] trait and are registered
//! explicitly in a [`registry::Registry`] under their name and aliases. The
//! read-eval loop dispatches each input line and interprets the returned
//! [`command::Response`]; `Shutdown` ends the loop.

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod prompt;
pub mod registry;

use std::io;

use clap::ArgMatches;
use rustyline::error::ReadlineError;
use tracing::debug;

use command::{QuitCommand, Response};
use config::Config;
use error::ShellError;
use input::Input;
use prompt::Prompt;
use registry::Registry;

fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(Box::new(QuitCommand));
    registry
}

/// Dispatches one raw line against `registry`. Empty lines are silently
/// skipped.
fn run_line(registry: &Registry, line: &str, out: &mut dyn io::Write) -> Option<Response> {
    let input = match Input::parse(line) {
        Ok(input) => input,
        Err(ShellError::EmptyInput) => return Some(Response::Continue),
        Err(err) => {
            eprintln!("{}", err);
            return None;
        }
    };

    match registry.dispatch(&input, out) {
        Ok(response) => Some(response),
        Err(err) => {
            // A failed write does not shut the shell down; only an explicit
            // Shutdown response does.
            eprintln!("{}", err);
            None
        }
    }
}

/// Starts the read-eval-print-loop of the Chauffeur shell, or runs a single
/// line when `--command` is given. Returns the process exit code.
pub fn repl(matches: &ArgMatches) -> i32 {
    let config = Config::new(matches.value_of("config"));
    let registry = default_registry();
    let verbose = matches.occurrences_of("verbose");

    if let Some(line) = matches.value_of("command") {
        return match run_line(&registry, line, &mut io::stdout()) {
            Some(_) => 0,
            None => 1,
        };
    }

    let mut prompt = Prompt::new(&config, registry.names());
    let code = loop {
        match prompt.read_line() {
            Ok(line) => {
                if verbose >= 1 {
                    println!("{}", line);
                }
                if let Some(Response::Shutdown) = run_line(&registry, &line, &mut io::stdout()) {
                    break 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                break 0;
            }
            Err(err) => {
                eprintln!("{}", err);
                break 1;
            }
        }
    };

    prompt.save_history();
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_line_quit_shuts_down() {
        let registry = default_registry();
        let mut out = Vec::new();
        let res = run_line(&registry, "quit", &mut out);
        assert_eq!(res, Some(Response::Shutdown));
        assert_eq!(out, b"Good bye!\n");
    }

    #[test]
    fn run_line_alias_shuts_down() {
        let registry = default_registry();
        let mut out = Vec::new();
        let res = run_line(&registry, "q", &mut out);
        assert_eq!(res, Some(Response::Shutdown));
    }

    #[test]
    fn run_line_empty_continues() {
        let registry = default_registry();
        let mut out = Vec::new();
        let res = run_line(&registry, "  ", &mut out);
        assert_eq!(res, Some(Response::Continue));
        assert!(out.is_empty());
    }

    #[test]
    fn run_line_unknown_continues() {
        let registry = default_registry();
        let mut out = Vec::new();
        let res = run_line(&registry, "frobnicate", &mut out);
        assert_eq!(res, Some(Response::Continue));
        assert_eq!(out, b"Unknown command: frobnicate\n");
    }
}
