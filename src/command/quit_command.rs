use super::*;

/// Quit command prints a farewell and signals the dispatcher to shut down the
/// read-eval loop. Reachable as `quit` and `q`.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["q"]
    }

    fn run(&self, _args: &[String], out: &mut dyn Write) -> Result<Response> {
        // Arguments are ignored by contract.
        writeln!(out, "Good bye!")?;
        Ok(Response::Shutdown)
    }

    fn as_directions(&self) -> Option<&dyn ProvideDirections> {
        Some(self)
    }
}

impl ProvideDirections for QuitCommand {
    fn directions(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "quit")?;
        writeln!(out, "\talias: q")?;
        writeln!(out, "\tTo exit the Chauffeur type `quit` or `q`.")?;
        Ok(())
    }
}
