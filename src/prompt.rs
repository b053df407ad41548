// src/prompt.rs
//! Interactive questions. Both prompts loop until the answer is usable, so
//! bad input never becomes an error; only a closed input stream does.
use std::io::{self, BufRead, Write};

use crate::core::sanitize::animal_name;
use crate::error::{Error, Result};
use crate::index::{AttributeIndex, Label};

/// Source of the one answer a run needs: which group to list, or which
/// animal to look up.
pub trait Asker {
    fn choose_label(&mut self, index: &AttributeIndex) -> Result<Label>;
    fn ask_name(&mut self) -> Result<String>;
}

/// Answer given up front on the command line. There is nobody to re-prompt,
/// so an unusable answer is an error.
pub struct Preset(pub String);

impl Asker for Preset {
    fn choose_label(&mut self, index: &AttributeIndex) -> Result<Label> {
        index.resolve(&self.0).ok_or_else(|| Error::InvalidChoice(self.0.clone()))
    }

    fn ask_name(&mut self) -> Result<String> {
        animal_name(&self.0).ok_or_else(|| Error::InvalidName(self.0.clone()))
    }
}

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").map_err(Error::Prompt)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{question}").map_err(Error::Prompt)?;
        self.out.flush().map_err(Error::Prompt)?;

        let mut line = s!();
        let n = self.input.read_line(&mut line).map_err(Error::Prompt)?;
        if n == 0 {
            return Err(Error::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Asker for Console<R, W> {
    /// List the choices, then read until one of them is entered.
    fn choose_label(&mut self, index: &AttributeIndex) -> Result<Label> {
        writeln!(self.out, "Available {} values:", index.key()).map_err(Error::Prompt)?;
        for choice in index.choices() {
            writeln!(self.out, " - {choice}").map_err(Error::Prompt)?;
        }

        let question = format!("\nEnter a {} from the list above: ", index.key());
        loop {
            let answer = self.ask(&question)?;
            if let Some(label) = index.resolve(&answer) {
                return Ok(label);
            }
            self.say("Not in the list. Please enter exactly one of the shown values.")?;
        }
    }

    /// Read until a non-empty, letters-and-spaces name is entered.
    fn ask_name(&mut self) -> Result<String> {
        loop {
            let answer = self.ask("Enter a name of an animal: ")?;
            if let Some(name) = animal_name(&answer) {
                return Ok(name);
            }
            self.say("Please enter a name using letters and spaces only.")?;
        }
    }
}
