use crate::error::{Result, ShellError};

/// Command name and arguments parsed from one input line.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub args: Vec<String>,
}

impl Input {
    /// Splits a raw line into command name and arguments, honoring quoting.
    pub fn parse(line: &str) -> Result<Input> {
        let tokens = shlex::split(line).ok_or(ShellError::BadQuoting)?;
        if tokens.is_empty() {
            return Err(ShellError::EmptyInput);
        }

        Ok(Input {
            name: tokens[0].clone(),
            args: tokens[1..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_command() {
        assert!(matches!(Input::parse(""), Err(ShellError::EmptyInput)));
        assert!(matches!(Input::parse("   "), Err(ShellError::EmptyInput)));
    }

    #[test]
    fn parse_command() {
        let input = Input::parse("one").unwrap();
        assert_eq!(input.name, "one");
        assert!(input.args.is_empty());
    }

    #[test]
    fn parse_command_one_arg() {
        let input = Input::parse("one two").unwrap();
        assert_eq!(input.name, "one");
        assert_eq!(input.args, vec!["two"]);
    }

    #[test]
    fn parse_command_two_args() {
        let input = Input::parse("one two three").unwrap();
        assert_eq!(input.name, "one");
        assert_eq!(input.args, vec!["two", "three"]);
    }

    #[test]
    fn parse_command_quoted_arg() {
        let input = Input::parse("one \"two three\"").unwrap();
        assert_eq!(input.name, "one");
        assert_eq!(input.args, vec!["two three"]);
    }

    #[test]
    fn parse_unbalanced_quote() {
        assert!(matches!(
            Input::parse("one \"two"),
            Err(ShellError::BadQuoting)
        ));
    }
}
