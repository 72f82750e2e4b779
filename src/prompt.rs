//! Terminal interaction for the setup wizard

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Line-based prompt over any input and output pair.
///
/// Production code runs it over stdin/stdout; tests script it with
/// in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show a prompt and read one line, trimmed.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            anyhow::bail!("input stream closed while waiting for an answer");
        }
        Ok(line.trim().to_string())
    }

    /// Yes/no question (Y/n). Empty input counts as yes.
    ///
    /// Only the exact tokens "y" and "n" are accepted; anything else warns
    /// and asks again.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{message} [Y/n]"))?;
            match answer.as_str() {
                "" | "y" => return Ok(true),
                "n" => return Ok(false),
                other => {
                    self.warn(&format!("'{other}' is not a valid answer, use 'y' or 'n'"))?;
                }
            }
        }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.yellow())?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn confirm_with(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let answer = {
            let mut prompter = Prompter::new(Cursor::new(input.to_string()), &mut out);
            prompter.confirm("Continue").unwrap()
        };
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_input_defaults_to_yes() {
        assert!(confirm_with("\n").0);
    }

    #[test]
    fn whitespace_only_defaults_to_yes() {
        assert!(confirm_with("   \n").0);
    }

    #[test]
    fn y_is_yes_and_n_is_no() {
        assert!(confirm_with("y\n").0);
        assert!(!confirm_with("n\n").0);
    }

    #[test]
    fn unrecognized_answer_warns_and_reprompts() {
        let (answer, out) = confirm_with("maybe\ny\n");
        assert!(answer);
        assert!(out.contains("not a valid answer"));
        assert_eq!(out.matches("[Y/n]").count(), 2);
    }

    #[test]
    fn uppercase_tokens_are_not_accepted() {
        let (answer, out) = confirm_with("Y\nn\n");
        assert!(!answer);
        assert!(out.contains("not a valid answer"));
    }

    #[test]
    fn ask_trims_the_line() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("  eastus  \n".to_string()), &mut out);
        assert_eq!(prompter.ask("Location").unwrap(), "eastus");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(String::new()), &mut out);
        assert!(prompter.ask("Location").is_err());
    }
}
