use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::config;

/// Creates `Editor` instance with proper config and completion over the
/// registered command names.
pub fn create(config: &config::Config, commands: Vec<String>) -> Editor<EditorHelper> {
    let mut editor = Editor::with_config(
        rustyline::Config::builder()
            .history_ignore_space(true)
            .history_ignore_dups(true)
            .max_history_size(config.max_history_size)
            .edit_mode(config.edit_mode)
            .completion_type(config.completion_type)
            .build(),
    );

    editor.set_helper(Some(EditorHelper::new(commands)));
    editor
}

pub struct EditorHelper {
    /// Registered command names and aliases, sorted.
    commands: Vec<String>,
    file_comp: FilenameCompleter,
}

impl EditorHelper {
    pub fn new(commands: Vec<String>) -> EditorHelper {
        EditorHelper {
            commands,
            file_comp: FilenameCompleter::new(),
        }
    }

    fn command_completer(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let mut candidates = Vec::new();

        // Show all candidates with no input and pos=0.
        if pos == 0 {
            for cmd in &self.commands {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                });
            }
        }
        // Check for partial matches and their remainders.
        else {
            let slice = &line[..pos];
            for cmd in &self.commands {
                if cmd == slice || cmd.starts_with(slice) {
                    candidates.push(Pair {
                        display: cmd.clone(),

                        // The missing part of the candidate.
                        replacement: cmd[slice.len()..].to_string(),
                    });
                }
            }
        }

        (pos, candidates)
    }
}

impl Completer for EditorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        // Do command completion if position is within first word.
        if let Some(wpos) = line.find(char::is_whitespace) {
            if pos < wpos {
                return Ok(self.command_completer(line, pos));
            }
        } else {
            return Ok(self.command_completer(line, pos));
        }

        // Otherwise, default to file completion.
        self.file_comp.complete(line, pos, ctx)
    }
}

impl Hinter for EditorHelper {
    type Hint = String;
}

impl Highlighter for EditorHelper {}
impl Validator for EditorHelper {}
impl Helper for EditorHelper {}
