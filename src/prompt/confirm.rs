use std::io::{BufRead, Write};

use crate::error::Result;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks a yes/no question until the answer is a recognized token.
    ///
    /// Only the exact tokens `y`/`yes` and `n`/`no` are accepted; anything
    /// else re-asks with an error message, without limit.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let response = self.prompt_line(&format!("{question} [y/n] "))?;
            match response.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.line("\nPlease select y or n\n")?,
            }
        }
    }
}
