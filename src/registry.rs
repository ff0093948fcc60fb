use std::collections::HashMap;
use std::io::Write;

use tracing::{debug, warn};

use crate::command::{Command, Response};
use crate::error::Result;
use crate::input::Input;

/// Table of commands, keyed by every name and alias they answer to.
///
/// Populated at startup with explicit `register` calls; there is no runtime
/// discovery. Alias resolution happens here, not in the commands.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers `cmd` under its name and all of its aliases. On a name
    /// collision the earlier registration wins and the duplicate is dropped.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let slot = self.commands.len();
        let mut keys = vec![cmd.name()];
        keys.extend_from_slice(cmd.aliases());

        for key in keys {
            if self.index.contains_key(key) {
                warn!(name = key, "duplicate command registration ignored");
                continue;
            }
            self.index.insert(key.to_string(), slot);
        }

        self.commands.push(cmd);
    }

    /// Looks up a command by name or alias.
    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        self.index.get(name).map(|slot| &*self.commands[*slot])
    }

    /// All registered names and aliases, sorted, for completion.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolves and runs the command for `input`, writing its output to
    /// `out`. Unknown names are reported on the sink and the loop continues.
    pub fn dispatch(&self, input: &Input, out: &mut dyn Write) -> Result<Response> {
        debug!(name = %input.name, "dispatching");
        match self.resolve(&input.name) {
            Some(cmd) => cmd.run(&input.args, out),
            None => {
                writeln!(out, "Unknown command: {}", input.name)?;
                Ok(Response::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::command::QuitCommand;

    /// Command that claims the `q` alias, for collision tests.
    struct Probe;

    impl Command for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn aliases(&self) -> &'static [&'static str] {
            &["q"]
        }

        fn run(&self, _args: &[String], out: &mut dyn Write) -> Result<Response> {
            writeln!(out, "probed")?;
            Ok(Response::Continue)
        }
    }

    fn quit_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(Box::new(QuitCommand));
        registry
    }

    #[test]
    fn resolve_by_name_and_alias() {
        let registry = quit_registry();
        assert_eq!(registry.resolve("quit").unwrap().name(), "quit");
        assert_eq!(registry.resolve("q").unwrap().name(), "quit");
    }

    #[test]
    fn resolve_unknown() {
        let registry = quit_registry();
        assert!(registry.resolve("nope").is_none());
    }

    #[test]
    fn names_sorted() {
        let registry = quit_registry();
        assert_eq!(registry.names(), vec!["q", "quit"]);
    }

    #[test]
    fn first_registration_wins() {
        let mut registry = quit_registry();
        registry.register(Box::new(Probe));
        assert_eq!(registry.resolve("q").unwrap().name(), "quit");
        assert_eq!(registry.resolve("probe").unwrap().name(), "probe");
    }

    #[test]
    fn dispatch_quit() {
        let registry = quit_registry();
        let input = Input::parse("quit").unwrap();
        let mut out = Vec::new();
        let res = registry.dispatch(&input, &mut out).unwrap();
        assert_eq!(res, Response::Shutdown);
        assert_eq!(out, b"Good bye!\n");
    }

    #[test]
    fn dispatch_alias() {
        let registry = quit_registry();
        let input = Input::parse("q").unwrap();
        let mut out = Vec::new();
        let res = registry.dispatch(&input, &mut out).unwrap();
        assert_eq!(res, Response::Shutdown);
        assert_eq!(out, b"Good bye!\n");
    }

    #[test]
    fn dispatch_unknown() {
        let registry = quit_registry();
        let input = Input::parse("frobnicate now").unwrap();
        let mut out = Vec::new();
        let res = registry.dispatch(&input, &mut out).unwrap();
        assert_eq!(res, Response::Continue);
        assert_eq!(out, b"Unknown command: frobnicate\n");
    }
}
