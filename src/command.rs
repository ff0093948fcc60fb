use std::io::Write;

use crate::error::Result;

pub mod quit_command;
pub use self::quit_command::QuitCommand;

/// Outcome a command hands back to the dispatcher. The error side of
/// `Result<Response>` covers failures, so matching on the full result is
/// exhaustive over continue/shutdown/error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Keep the read-eval loop going.
    Continue,
    /// Terminate the read-eval loop after this invocation.
    Shutdown,
}

/// Base trait of all commands.
///
/// Commands are registered explicitly at startup under their name and every
/// alias; resolving those strings back to a command is the registry's job.
/// The output sink is an append-only writer owned by the host shell, lent to
/// the command for the duration of one invocation.
pub trait Command {
    /// Primary name the command is registered under.
    fn name(&self) -> &'static str;

    /// Alternative names the command is also registered under.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Execute the command with the given arguments, writing output to `out`.
    /// I/O errors propagate to the dispatcher instead of being mapped to a
    /// `Response`.
    fn run(&self, args: &[String], out: &mut dyn Write) -> Result<Response>;

    /// Directions capability, for commands that document themselves.
    fn as_directions(&self) -> Option<&dyn ProvideDirections> {
        None
    }
}

/// Capability trait for commands that can print usage directions.
pub trait ProvideDirections {
    fn directions(&self, out: &mut dyn Write) -> Result<()>;
}
