use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use owo_colors::OwoColorize;

use crate::error::Result;

/// A line-oriented console over explicit input and output ends.
///
/// Editing flows receive a `Console` rather than touching the process
/// terminal, so tests can script them with in-memory readers and writers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// A console wired to the process stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a trailing newline and reads one line.
    ///
    /// The returned line has its line ending stripped; an empty submission
    /// is an empty string. A closed input end is an error, never a value.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            return Err(
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into()
            );
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Writes one plain line.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes a line opening with a bold label.
    pub fn labeled(&mut self, label: &str, rest: &str) -> Result<()> {
        writeln!(self.output, "{}{rest}", label.bold())?;
        Ok(())
    }

    /// Clears the screen and homes the cursor.
    pub fn clear(&mut self) -> Result<()> {
        write!(self.output, "\x1b[2J\x1b[1;1H")?;
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the console and hands back the output end.
    pub fn into_output(self) -> W {
        self.output
    }
}
