//! Interactive menu driving a [`CharStringMap`].
//!
//! All user-facing messages live here, the map only hands back status values.

use std::io::{BufRead, Write};

use collections::CharStringMap;
use log::{debug, trace};

use crate::ReplError;

pub const MENU: &str = "\nOPTIONS:\n1. Insert\n2. Get\n3. Remove\n4. Quit\n";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert,
    Get,
    Remove,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ReplError> {
        match line.trim() {
            "1" => Ok(Command::Insert),
            "2" => Ok(Command::Get),
            "3" => Ok(Command::Remove),
            "4" => Ok(Command::Quit),
            other => Err(ReplError::UnknownOption(other.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Repl<R, W> {
    input: R,
    output: W,
    map: CharStringMap,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, map: CharStringMap) -> Self {
        Self { input, output, map }
    }

    pub fn into_map(self) -> CharStringMap {
        self.map
    }

    /// Runs until the user quits or the input is exhausted.
    /// Only IO errors end the loop early.
    pub fn run(&mut self) -> Result<(), ReplError> {
        loop {
            write!(self.output, "{MENU}Enter option: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!(target: "repl", "input: EOF");
                return Ok(());
            };

            match Command::parse(&line).and_then(|cmd| self.execute(cmd)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    debug!(target: "repl", "{e}");
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> Result<Flow, ReplError> {
        trace!(target: "repl", "executing {cmd:?}");
        match cmd {
            Command::Insert => {
                let Some(key) = self.prompt_key()? else {
                    return Ok(Flow::Quit);
                };
                self.prompt("Enter value: ")?;
                let Some(value) = self.read_line()? else {
                    return Ok(Flow::Quit);
                };
                let outcome = self.map.insert(key, value);
                writeln!(self.output, "{outcome}")?;
            }
            Command::Get => {
                let Some(key) = self.prompt_key()? else {
                    return Ok(Flow::Quit);
                };
                match self.map.get(key) {
                    Some(value) => writeln!(self.output, "Retrieved value: {value}")?,
                    None => writeln!(self.output, "Item not found.")?,
                }
            }
            Command::Remove => {
                let Some(key) = self.prompt_key()? else {
                    return Ok(Flow::Quit);
                };
                let outcome = self.map.remove(key);
                writeln!(self.output, "{outcome}")?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> Result<(), ReplError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// The first non-whitespace character of the next line, `None` on EOF
    fn prompt_key(&mut self) -> Result<Option<char>, ReplError> {
        self.prompt("Enter key: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        line.trim()
            .chars()
            .next()
            .map(Some)
            .ok_or(ReplError::MissingKey)
    }

    /// Next line without its terminator, `None` on EOF
    fn read_line(&mut self) -> Result<Option<String>, ReplError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
