use std::fs;
use std::path::PathBuf;

use rustyline::{CompletionType, EditMode};
use tracing::warn;

/// Shell configuration, persisted as JSON.
#[derive(Debug)]
pub struct Config {
    pub max_history_size: usize,
    pub edit_mode: EditMode,
    pub completion_type: CompletionType,

    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_history_size: 1000,
            edit_mode: EditMode::Emacs,
            completion_type: CompletionType::List,
            path: None,
        }
    }
}

impl Config {
    /// Loads config from `path`, or from `~/.chauffeur/config.json` when no
    /// path is given. The default config is written to file if it doesn't
    /// exist. Load failures keep the defaults.
    pub fn new(path: Option<&str>) -> Config {
        let mut c = Config {
            path: path.map(PathBuf::from).or_else(Config::default_path),
            ..Config::default()
        };
        c.load();
        c
    }

    /// Directory for config and history files.
    pub fn dir() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".chauffeur"))
    }

    fn default_path() -> Option<PathBuf> {
        Config::dir().map(|dir| dir.join("config.json"))
    }

    fn load(&mut self) {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => return,
        };

        // If config does not exist then save defaults to disk.
        if !path.exists() {
            self.save();
            return;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("could not load config from {}: {}", path.display(), err);
                return;
            }
        };

        let input = match json::parse(&contents) {
            Ok(input) => input,
            Err(err) => {
                warn!("could not parse config from {}: {}", path.display(), err);
                return;
            }
        };

        for (key, value) in input.entries() {
            match key.to_lowercase().as_ref() {
                "max_history_size" => {
                    self.max_history_size = value.as_usize().unwrap_or(self.max_history_size)
                }
                "edit_mode" => {
                    self.edit_mode = match value.as_str().unwrap_or("emacs") {
                        "vi" => EditMode::Vi,
                        _ /*"emacs"*/ => EditMode::Emacs,
                    };
                }
                "completion_type" => {
                    self.completion_type = match value.as_str().unwrap_or("list") {
                        "circular" => CompletionType::Circular,
                        _ /*"list"*/ => CompletionType::List,
                    };
                }
                _ => warn!("unknown config entry: {}={}", key, value),
            }
        }
    }

    pub fn save(&self) {
        let path = match &self.path {
            Some(path) => path,
            None => return,
        };

        let output = json::object![
            "max_history_size" => self.max_history_size,
            "edit_mode" => match self.edit_mode {
                EditMode::Vi => "vi",
                _ /*EditMode::Emacs*/ => "emacs",
            },
            "completion_type" => match self.completion_type {
                CompletionType::Circular => "circular",
                _ /*CompletionType::List*/ => "list",
            },
        ];

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }

        let output = json::stringify_pretty(output, 2);
        if let Err(err) = fs::write(path, output) {
            warn!("could not write config to {}: {}", path.display(), err);
        }
    }
}
