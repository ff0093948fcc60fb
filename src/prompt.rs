use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::Editor;
use tracing::debug;

use crate::config::Config;
use crate::editor::{self, EditorHelper};

/// Controls showing the prompt and yielding lines from the terminal.
pub struct Prompt {
    editor: Editor<EditorHelper>,
    history_path: Option<PathBuf>,
}

impl Prompt {
    pub fn new(config: &Config, commands: Vec<String>) -> Prompt {
        let mut editor = editor::create(config, commands);

        let history_path = Config::dir().map(|dir| dir.join("history"));
        if let Some(path) = &history_path {
            if editor.load_history(path).is_err() {
                debug!("no history loaded from {}", path.display());
            }
        }

        Prompt {
            editor,
            history_path,
        }
    }

    /// Shows prompt and reads one line, recording it in history.
    pub fn read_line(&mut self) -> Result<String, ReadlineError> {
        let line = self.editor.readline("chauffeur> ")?;
        self.editor.add_history_entry(line.as_str());
        Ok(line)
    }

    /// Persists history to disk. Best effort.
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            self.editor.save_history(path).ok();
        }
    }
}
