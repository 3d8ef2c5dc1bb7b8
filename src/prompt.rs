//! The question/answer medium used by the interactive collector.
//!
//! [`Prompter`] abstracts how questions reach the operator. Every method
//! returns `Ok(None)` when the operator aborts (end of input), which the
//! collector turns into a clean cancellation.

use std::io::{BufRead, Write};

use crate::errors::Result;

/// An ordered question/answer interaction.
pub trait Prompter {
    /// Ask for a free-text answer.
    fn text(&mut self, message: &str) -> Result<Option<String>>;

    /// Ask the operator to pick one of `choices`; returns its index.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<Option<usize>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>>;

    /// Show an informational line (validation hints, section headers).
    fn notice(&mut self, message: &str) -> Result<()>;
}

/// Line-oriented [`Prompter`] over any reader/writer pair.
///
/// Used on locked stdin/stdout by the CLI and on in-memory buffers in tests.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "? {question} ")?;
        self.output.flush()?;
        self.read_answer()
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, message: &str) -> Result<Option<String>> {
        self.ask(message)
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<Option<usize>> {
        writeln!(self.output, "? {message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {choice}", i + 1)?;
        }
        let question = format!("Choice [1-{}]:", choices.len());
        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if let Some(index) = parse_choice(&answer, choices) {
                return Ok(Some(index));
            }
            writeln!(self.output, "  Pick a number between 1 and {}", choices.len())?;
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        let question = format!("{message} {hint}");
        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "  Please answer y or n")?,
            }
        }
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "  {message}")?;
        Ok(())
    }
}

/// Resolve a select answer: empty picks the first choice, otherwise a
/// 1-based index or a case-insensitive label.
fn parse_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    if choices.is_empty() {
        return None;
    }
    if answer.is_empty() {
        return Some(0);
    }
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| n - 1);
    }
    choices.iter().position(|c| c.eq_ignore_ascii_case(answer))
}
