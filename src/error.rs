use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors surfaced by command parsing and dispatch.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("no command inputted")]
    EmptyInput,

    #[error("unbalanced quoting in input")]
    BadQuoting,
}
